//! Airwatch Server - HTTP proxy for WAQI air-quality data.
//!
//! Serves the `/api` surface (AQI by city or coordinates, health, stats)
//! and the prebuilt frontend, caching upstream payloads in memory.

use airwatch_core::{AirQualityService, Settings, WaqiClient};
use airwatch_server::server;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "airwatch-server")]
#[command(about = "Air-quality proxy server backed by the WAQI API")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Directory of prebuilt frontend assets served at /
    #[arg(long, default_value = "frontend")]
    frontend_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Airwatch server");

    // Refuses to start without an upstream token.
    let settings = Settings::from_env()?;

    let client = WaqiClient::new(settings.api_token, None);
    let service = AirQualityService::new(client);

    let addr =
        server::start_server(service, Some(args.frontend_dir), &args.host, args.port).await?;

    info!("Airwatch server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
