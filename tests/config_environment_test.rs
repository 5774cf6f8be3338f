// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, and CONFIG_INVALID errors for unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrient_ai_server::config::{Environment, LogLevel, ServerConfig};
use nutrient_ai_server::errors::ErrorCode;
use serial_test::serial;
use std::env;

const CONFIG_VARS: [&str; 7] = [
    "HOST",
    "HTTP_PORT",
    "CORS_ALLOWED_ORIGINS",
    "MAX_UPLOAD_BYTES",
    "REQUEST_TIMEOUT_SECS",
    "ENVIRONMENT",
    "RUST_LOG",
];

fn clear_config_env() {
    for key in CONFIG_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything-else"),
        Environment::Development
    );
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.http_port, 8000);
    assert!(config.cors.allows_any_origin());
    assert_eq!(config.limits.max_upload_bytes, 10 * 1024 * 1024);
    assert_eq!(config.limits.request_timeout_secs, 30);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_config_env();
    env::set_var("HOST", "127.0.0.1");
    env::set_var("HTTP_PORT", "9100");
    env::set_var("CORS_ALLOWED_ORIGINS", "http://localhost:5173");
    env::set_var("MAX_UPLOAD_BYTES", "2048");
    env::set_var("REQUEST_TIMEOUT_SECS", " 5 ");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.bind_address().unwrap().to_string(), "127.0.0.1:9100");
    assert!(!config.cors.allows_any_origin());
    assert_eq!(config.limits.max_upload_bytes, 2048);
    assert_eq!(config.limits.request_timeout_secs, 5);
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn test_unparseable_port_is_config_invalid() {
    clear_config_env();
    env::set_var("HTTP_PORT", "eighty");

    let err = ServerConfig::from_env().unwrap_err();
    clear_config_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_zero_upload_limit_is_config_invalid() {
    clear_config_env();
    env::set_var("MAX_UPLOAD_BYTES", "0");

    let err = ServerConfig::from_env().unwrap_err();
    clear_config_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_bad_host_is_config_invalid() {
    clear_config_env();
    env::set_var("HOST", "not a host");

    let err = ServerConfig::from_env().unwrap_err();
    clear_config_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert_eq!(err.http_status(), 500);
}
