//! Application configuration loaded from environment variables.
//!
//! `PORT` is read once at startup into [`Config`]. `APP_VERSION` and
//! `ENVIRONMENT` are read on every request via [`app_version`] and
//! [`environment`], never cached.

use serde::Deserialize;

/// Default TCP port the server listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Default reported application version when `APP_VERSION` is unset.
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Default deployment environment label when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Startup configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    /// Load configuration from environment, reading a `.env` file first.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }
}

/// Reported application version: `APP_VERSION` or `"1.0.0"`.
pub fn app_version() -> String {
    std::env::var("APP_VERSION").unwrap_or_else(|_| DEFAULT_APP_VERSION.to_string())
}

/// Reported deployment environment label: `ENVIRONMENT` or `"development"`.
pub fn environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; tests that touch them take
    // this lock so parallel test threads cannot interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn port_defaults_to_5000() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("PORT");

        let config = Config::load().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn port_reads_environment() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("PORT", "8080");

        let config = Config::load().unwrap();
        assert_eq!(config.port, 8080);

        std::env::remove_var("PORT");
    }

    #[test]
    fn port_rejects_garbage() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("PORT", "not-a-port");

        assert!(Config::load().is_err());

        std::env::remove_var("PORT");
    }

    #[test]
    fn app_version_defaults_when_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("APP_VERSION");

        assert_eq!(app_version(), DEFAULT_APP_VERSION);
    }

    #[test]
    fn app_version_reads_environment_per_call() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var("APP_VERSION", "2.3.1");
        assert_eq!(app_version(), "2.3.1");

        // No caching: the next call observes the removal.
        std::env::remove_var("APP_VERSION");
        assert_eq!(app_version(), DEFAULT_APP_VERSION);
    }

    #[test]
    fn environment_defaults_when_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("ENVIRONMENT");

        assert_eq!(environment(), DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn environment_reads_environment_per_call() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var("ENVIRONMENT", "production");
        assert_eq!(environment(), "production");

        std::env::remove_var("ENVIRONMENT");
        assert_eq!(environment(), DEFAULT_ENVIRONMENT);
    }
}
