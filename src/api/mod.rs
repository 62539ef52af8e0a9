//! HTTP API module for the home, health, readiness, and info endpoints.

pub mod handlers;
pub mod routes;

pub use routes::create_router;

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::utils::shutdown_signal;

/// Bind `0.0.0.0:<port>` and serve the API until a shutdown signal arrives.
pub async fn serve(config: &Config) -> crate::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
