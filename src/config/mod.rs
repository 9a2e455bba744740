//! Configuration module for the slides backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default role passwords, matching the frontend's built-in constants.
/// Override them in any deployment that leaves the local network.
const DEFAULT_VIEWER_PASSWORD: &str = "123456";
const DEFAULT_ADMIN_PASSWORD: &str = "tkck6688";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Password granting the viewer role
    pub viewer_password: String,
    /// Password granting the admin role
    pub admin_password: String,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let viewer_password = env::var("SLIDES_VIEWER_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_VIEWER_PASSWORD.to_string());

        let admin_password = env::var("SLIDES_ADMIN_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        let db_path = env::var("SLIDES_DB_PATH")
            .unwrap_or_else(|_| "./data/slides.sqlite".to_string())
            .into();

        let bind_addr = env::var("SLIDES_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid SLIDES_BIND_ADDR format");

        let log_level = env::var("SLIDES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            viewer_password,
            admin_password,
            db_path,
            bind_addr,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("SLIDES_VIEWER_PASSWORD");
        env::remove_var("SLIDES_ADMIN_PASSWORD");
        env::remove_var("SLIDES_DB_PATH");
        env::remove_var("SLIDES_BIND_ADDR");
        env::remove_var("SLIDES_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.viewer_password, DEFAULT_VIEWER_PASSWORD);
        assert_eq!(config.admin_password, DEFAULT_ADMIN_PASSWORD);
        assert_eq!(config.db_path, PathBuf::from("./data/slides.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }
}
