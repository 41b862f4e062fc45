//! Resource API Library
//!
//! A small REST API exposing CRUD operations over an in-memory collection of
//! text resources, seeded from a built-in list or a JSON data file.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, server state and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **resources**: The resource records, their validation, search and storage
//!
//! # Example
//!
//! ```rust,no_run
//! use resource_api::core::{ApiServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ApiServer::from_config(config.clone()).await?;
//!     HttpTransport::new(config.http).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{ApiServer, Config, Error, Result};
