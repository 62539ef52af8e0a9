//! Demo HTTP service for container and Kubernetes deployment exercises.
//!
//! The service exposes four JSON endpoints used to demonstrate liveness and
//! readiness probes, environment-driven configuration, and per-host identity:
//!
//! ```text
//! GET /        -> application overview (version, environment, host, time)
//! GET /health  -> liveness probe, healthy while the process can respond
//! GET /ready   -> readiness probe, unconditionally ready
//! GET /info    -> deployment debugging info including the compiler version
//! ```
//!
//! There is no state and no business logic; each request reads the process
//! environment, the OS host name, or the wall clock and serializes a small
//! response struct.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions
pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
