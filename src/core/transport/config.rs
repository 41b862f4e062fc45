//! HTTP transport configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Page served for any route the API does not match.
    #[serde(default = "default_static_index")]
    pub static_index: PathBuf,

    /// Compress response bodies.
    #[serde(default = "default_true")]
    pub enable_compression: bool,

    /// Enable CORS for browser clients.
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

fn default_port() -> u16 {
    5000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_static_index() -> PathBuf {
    PathBuf::from("public/index.html")
}

fn default_true() -> bool {
    true
}

/// Parse an on/off environment toggle; anything but `false`/`0` is on.
fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v.to_lowercase() != "false" && v != "0")
        .unwrap_or(true)
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            static_index: default_static_index(),
            enable_compression: default_true(),
            enable_cors: default_true(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config for the given address with other fields defaulted.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load HTTP config from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let host = std::env::var("RESOURCE_API_HOST").unwrap_or_else(|_| default_host());
        let static_index = std::env::var("RESOURCE_API_STATIC_INDEX")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_static_index());

        Self {
            port,
            host,
            static_index,
            enable_compression: env_flag("RESOURCE_API_COMPRESSION"),
            enable_cors: env_flag("RESOURCE_API_CORS"),
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this listener for logging.
    pub fn description(&self) -> String {
        format!(
            "HTTP on {} (compression {}, CORS {})",
            self.address(),
            on_off(self.enable_compression),
            on_off(self.enable_cors)
        )
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}
