//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use crate::domains::roster::{DEFAULT_RETRIES, MAX_RETRIES};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Roster endpoint: Saiyans of the Z fighter affiliation.
pub const DEFAULT_ROSTER_URL: &str =
    "https://dragonball-api.com/api/characters?race=Saiyan&affiliation=Z fighter";

/// User agent sent with every roster request.
pub const DEFAULT_USER_AGENT: &str = "mcp-dragonball/1.0";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Character roster API configuration.
    pub roster: RosterConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the character roster API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Full URL of the roster endpoint, query filters included.
    pub endpoint: String,

    /// Value of the `user-agent` header.
    pub user_agent: String,

    /// Retries after the first failed attempt.
    pub retries: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ROSTER_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retries: DEFAULT_RETRIES,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dragonball-saiyan-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            roster: RosterConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_ROSTER_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(endpoint) = std::env::var("MCP_ROSTER_URL") {
            info!("Roster endpoint overridden: {}", endpoint);
            config.roster.endpoint = endpoint;
        }

        if let Ok(user_agent) = std::env::var("MCP_ROSTER_USER_AGENT") {
            config.roster.user_agent = user_agent;
        }

        if let Ok(retries) = std::env::var("MCP_ROSTER_RETRIES") {
            match retries.trim().parse::<u32>() {
                Ok(parsed) if parsed > MAX_RETRIES => {
                    warn!(
                        "MCP_ROSTER_RETRIES={} is above the limit, using {}",
                        parsed, MAX_RETRIES
                    );
                    config.roster.retries = MAX_RETRIES;
                }
                Ok(parsed) => config.roster.retries = parsed,
                Err(_) => warn!(
                    "Ignoring invalid MCP_ROSTER_RETRIES={:?}, using {}",
                    retries, config.roster.retries
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_roster_env() {
        unsafe {
            std::env::remove_var("MCP_ROSTER_URL");
            std::env::remove_var("MCP_ROSTER_USER_AGENT");
            std::env::remove_var("MCP_ROSTER_RETRIES");
        }
    }

    #[test]
    fn test_roster_defaults() {
        let config = Config::default();
        assert_eq!(config.roster.endpoint, DEFAULT_ROSTER_URL);
        assert_eq!(config.roster.user_agent, "mcp-dragonball/1.0");
        assert_eq!(config.roster.retries, 2);
    }

    #[test]
    fn test_roster_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ROSTER_URL", "http://localhost:9999/characters");
            std::env::set_var("MCP_ROSTER_USER_AGENT", "test-agent/0.1");
            std::env::set_var("MCP_ROSTER_RETRIES", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.roster.endpoint, "http://localhost:9999/characters");
        assert_eq!(config.roster.user_agent, "test-agent/0.1");
        assert_eq!(config.roster.retries, 5);
        clear_roster_env();
    }

    #[test]
    fn test_invalid_retries_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_roster_env();
        unsafe {
            std::env::set_var("MCP_ROSTER_RETRIES", "many");
        }
        let config = Config::from_env();
        assert_eq!(config.roster.retries, DEFAULT_RETRIES);
        clear_roster_env();
    }

    #[test]
    fn test_excessive_retries_are_capped() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_roster_env();
        unsafe {
            std::env::set_var("MCP_ROSTER_RETRIES", "4294967295");
        }
        let config = Config::from_env();
        assert_eq!(config.roster.retries, MAX_RETRIES);
        clear_roster_env();
    }
}
