//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::net::SocketAddr;

use bingo_master::TableConfig;

/// Complete server configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,

    /// Shared table configuration
    pub table: TableConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    ///
    /// # Returns
    ///
    /// * `Result<ServerConfig, ConfigError>` - Loaded configuration or error
    pub fn from_env(bind_override: Option<SocketAddr>) -> Result<Self, ConfigError> {
        let bind = bind_override
            .or_else(|| {
                std::env::var("SERVER_BIND")
                    .ok()
                    .and_then(|s| s.parse().ok())
            })
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 5000)));

        let defaults = TableConfig::default();
        let table = TableConfig {
            name: std::env::var("TABLE_NAME").unwrap_or(defaults.name),
            max_sessions: parse_env_or("TABLE_MAX_SESSIONS", defaults.max_sessions),
            lock_free_space: parse_env_or("TABLE_LOCK_FREE_SPACE", defaults.lock_free_space),
        };

        Ok(ServerConfig { bind, table })
    }

    /// Validate configuration after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "TABLE_NAME".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.table.max_sessions == 0 {
            return Err(ConfigError::Invalid {
                var: "TABLE_MAX_SESSIONS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
