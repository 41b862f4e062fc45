//! Core module containing shared infrastructure components.
//!
//! This module provides configuration, error handling, the server state shared
//! by request handlers, and the HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::ApiServer;
pub use transport::{HttpConfig, HttpTransport};
