//! Configuration management for the resource API.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the resource API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in logs and the welcome page.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// JSON file to seed the store from. The built-in list is used when unset.
    pub data_file: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "resource-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
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
    /// The listening port comes from `PORT`; everything else is prefixed with
    /// `RESOURCE_API_`, e.g. `RESOURCE_API_LOG_LEVEL`, `RESOURCE_API_DATA_FILE`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("RESOURCE_API_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("RESOURCE_API_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(data_file) = std::env::var("RESOURCE_API_DATA_FILE") {
            config.resources.data_file = Some(PathBuf::from(data_file));
        }

        config.http = HttpConfig::from_env();

        config
    }
}
