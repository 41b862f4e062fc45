//! API server state and lifecycle.
//!
//! `ApiServer` ties the configuration to the domain services. It is cheap to
//! clone and is handed to the HTTP handlers as shared state.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result;
use crate::domains::resources::{ResourceService, default_resources, load_resources};

/// The resource API server.
#[derive(Clone)]
pub struct ApiServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource requests.
    resources: ResourceService,
}

impl ApiServer {
    /// Create a server over an existing resource service.
    pub fn new(config: Config, resources: ResourceService) -> Self {
        Self {
            config: Arc::new(config),
            resources,
        }
    }

    /// Create a server with an in-memory store seeded as the config says.
    ///
    /// Seeds from `resources.data_file` when set, otherwise from the built-in list.
    pub async fn from_config(config: Config) -> Result<Self> {
        let seed = match &config.resources.data_file {
            Some(path) => {
                info!("Seeding resources from {}", path.display());
                load_resources(path).await?
            }
            None => {
                info!("No data file configured, using built-in resources");
                default_resources()
            }
        };

        Ok(Self::new(config, ResourceService::in_memory(seed)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the resource service.
    pub fn resources(&self) -> &ResourceService {
        &self.resources
    }
}
