//! HTTP API handlers.
//!
//! All four handlers are infallible: they read the process environment, the
//! OS host name, or the wall clock and serialize a response struct. Probe
//! handlers must succeed whenever the process can respond at all, so nothing
//! here returns an error status.

use axum::Json;
use serde::Serialize;

use crate::config;

/// Greeting reported by the home endpoint.
pub const HOME_MESSAGE: &str = "Welcome to the DevOps Learning Lab!";

/// Human-readable application name reported by the home endpoint.
pub const APP_DISPLAY_NAME: &str = "Axum Demo Application";

/// Machine-readable application name reported by the info endpoint.
pub const APP_NAME: &str = "axum-demo-app";

/// Readiness message. Orchestration docs reference this string verbatim.
pub const READY_MESSAGE: &str = "Application is ready to serve traffic";

/// Home endpoint response.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    /// Greeting.
    pub message: &'static str,
    /// Application display name.
    pub app: &'static str,
    /// Reported version (`APP_VERSION` or default).
    pub version: String,
    /// Deployment environment label (`ENVIRONMENT` or default).
    pub environment: String,
    /// OS host name at request time.
    pub hostname: String,
    /// RFC 3339 UTC wall-clock time at request time.
    pub timestamp: String,
}

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: &'static str,
    /// RFC 3339 UTC wall-clock time at request time.
    pub timestamp: String,
}

/// Readiness probe response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Always "ready"; no dependency or warm-up check is performed.
    pub status: &'static str,
    /// Fixed readiness message.
    pub message: &'static str,
}

/// Info endpoint response.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Application name.
    pub app_name: &'static str,
    /// Reported version (`APP_VERSION` or default).
    pub version: String,
    /// Deployment environment label (`ENVIRONMENT` or default).
    pub environment: String,
    /// Compiler version the binary was built with.
    pub runtime_version: &'static str,
    /// OS host name at request time.
    pub hostname: String,
}

/// OS host name, or "unknown" if resolution fails or is not valid UTF-8.
/// Probes and the home endpoint must not fail over an ambient lookup.
fn host_name() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Current UTC wall-clock time as an RFC 3339 string.
fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Home handler: application overview.
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: HOME_MESSAGE,
        app: APP_DISPLAY_NAME,
        version: config::app_version(),
        environment: config::environment(),
        hostname: host_name(),
        timestamp: now_rfc3339(),
    })
}

/// Liveness handler: always 200 while the process can respond.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: now_rfc3339(),
    })
}

/// Readiness handler: unconditionally ready.
pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready",
        message: READY_MESSAGE,
    })
}

/// Info handler: deployment debugging info.
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: APP_NAME,
        version: config::app_version(),
        environment: config::environment(),
        runtime_version: env!("RUSTC_VERSION"),
        hostname: host_name(),
    })
}
