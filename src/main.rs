//! Demo HTTP service entry point.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use axum_demo_app::api;
use axum_demo_app::config::Config;

/// Demo HTTP service for container and Kubernetes deployment exercises.
#[derive(Parser, Debug)]
#[command(name = "axum-demo-app")]
#[command(about = "Demo HTTP service with liveness/readiness probes")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// HTTP server port (overrides the PORT environment variable).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("axum_demo_app=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load configuration
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = args.port {
        config.port = port;
    }

    info!(
        version = %axum_demo_app::config::app_version(),
        environment = %axum_demo_app::config::environment(),
        port = config.port,
        "Starting axum-demo-app"
    );

    api::serve(&config).await.map_err(|e| {
        error!("Server error: {}", e);
        e
    })?;

    info!("Shutdown complete");
    Ok(())
}
