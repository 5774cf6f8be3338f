// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{limits, ports};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or a comma-separated list of allowed origins
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

impl CorsConfig {
    /// Whether any origin is accepted
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        let trimmed = self.allowed_origins.trim();
        trimmed.is_empty() || trimmed == "*"
    }
}

/// Request size and time limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestLimits {
    /// Maximum accepted request body in bytes
    pub max_upload_bytes: usize,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_upload_bytes: limits::DEFAULT_MAX_UPLOAD_BYTES,
            request_timeout_secs: limits::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl RequestLimits {
    /// Timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Body size and timeout limits
    pub limits: RequestLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ports::DEFAULT_HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            cors: CorsConfig::default(),
            limits: RequestLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error when a numeric variable is set but unparseable
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HOST", ports::DEFAULT_HOST),
            http_port: parse_env("HTTP_PORT", ports::DEFAULT_HTTP_PORT)?,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            limits: RequestLimits {
                max_upload_bytes: parse_env(
                    "MAX_UPLOAD_BYTES",
                    limits::DEFAULT_MAX_UPLOAD_BYTES,
                )?,
                request_timeout_secs: parse_env(
                    "REQUEST_TIMEOUT_SECS",
                    limits::DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot work
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error for a zero upload limit or zero timeout
    pub fn validate(&self) -> AppResult<()> {
        if self.limits.max_upload_bytes == 0 {
            return Err(AppError::config_invalid("MAX_UPLOAD_BYTES", "0"));
        }
        if self.limits.request_timeout_secs == 0 {
            return Err(AppError::config_invalid("REQUEST_TIMEOUT_SECS", "0"));
        }
        self.bind_address().map(|_| ())
    }

    /// Socket address the server listens on
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error if `host` is not an IP address
    pub fn bind_address(&self) -> AppResult<SocketAddr> {
        let candidate = format!("{}:{}", self.host, self.http_port);
        candidate
            .parse()
            .map_err(|_| AppError::config_invalid("HOST", self.host.clone()))
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrient AI Server Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - CORS Origins: {}\n\
             - Max Upload: {} bytes\n\
             - Request Timeout: {}s",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            if self.cors.allows_any_origin() {
                "any"
            } else {
                self.cors.allowed_origins.as_str()
            },
            self.limits.max_upload_bytes,
            self.limits.request_timeout_secs,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an optional numeric variable; unset means `default`, garbage is an error
fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config_invalid(key, raw)),
        Err(_) => Ok(default),
    }
}
