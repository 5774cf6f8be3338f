// ABOUTME: Server binary for the Nutrient AI estimation service
// ABOUTME: Loads environment configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrient AI Server Binary
//!
//! Starts the HTTP API for meal text and image analysis.

use anyhow::Result;
use clap::Parser;
use nutrient_ai_server::{
    config::ServerConfig, constants::routes, logging, server::NutrientServer,
};
use tracing::{error, info};

/// Command-line overrides for environment configuration
#[derive(Parser)]
#[command(name = "nutrient-ai-server")]
#[command(about = "Nutrient AI - prototype meal nutrition estimation API")]
#[command(version)]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting Nutrient AI server");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = NutrientServer::new(config).run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Health:         GET  http://{host}:{port}{}", routes::HEALTH);
    info!("   Analyze Text:   POST http://{host}:{port}{}", routes::ANALYZE_TEXT);
    info!("   Analyze Image:  POST http://{host}:{port}{}", routes::ANALYZE_IMAGE);
    info!("=== End of Endpoint List ===");
}
