//! Application configuration loaded from environment variables.

use std::env;

#[cfg(feature = "postgres")]
use chirp_infra::DatabaseConfig;
use chirp_infra::MediaConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            #[cfg(feature = "postgres")]
            database: DatabaseConfig::from_env(),
            media: MediaConfig::from_env(),
        }
    }
}
