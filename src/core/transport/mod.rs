//! Transport layer for the resource API.
//!
//! The API is served over HTTP only. This module holds the listener
//! configuration, the axum router with its handlers, and the response types
//! the handlers produce.

mod config;
mod error;
pub mod http;
pub mod response;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, build_router};
