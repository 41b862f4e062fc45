//! Error types and handling for the resource API.
//!
//! This module defines a unified error type that can represent errors from
//! the resources domain and the transport layer.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the resource API.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error from the HTTP listener.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
