//! Response bodies for the HTTP API.
//!
//! Successful responses are pretty-printed JSON (or plain text). Lookup misses
//! are a small HTML fragment and validation failures are the bare message as
//! plain text.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::domains::resources::ResourceError;

/// JSON body serialized with two-space indentation.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

/// What the client was trying to do when a lookup missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Fetch,
    Update,
    Delete,
}

impl Lookup {
    /// HTML fragment sent with a 404 for this kind of lookup.
    pub fn not_found_html(self) -> &'static str {
        match self {
            Self::Fetch => {
                r#"<h2 style="font-family: Malgun Gothic; color: darkred;">Could not find that resource.</h2>"#
            }
            Self::Update => {
                r#"<h2 style="font-family: Malgun Gothic; color: darkred;">Could not find that resource to update.</h2>"#
            }
            Self::Delete => {
                r#"<h2 style="font-family: Malgun Gothic; color: darkred;">Could not find that resource to delete.</h2>"#
            }
        }
    }
}

/// A [`ResourceError`] paired with the lookup it happened during.
#[derive(Debug)]
pub struct ApiError {
    error: ResourceError,
    lookup: Lookup,
}

impl ApiError {
    pub fn new(error: ResourceError, lookup: Lookup) -> Self {
        Self { error, lookup }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.error {
            ResourceError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Html(self.lookup.not_found_html())).into_response()
            }
            ResourceError::ValidationFailed(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}

/// Attach a [`Lookup`] to a resource result.
pub trait LookupContext<T> {
    fn during(self, lookup: Lookup) -> Result<T, ApiError>;
}

impl<T> LookupContext<T> for Result<T, ResourceError> {
    fn during(self, lookup: Lookup) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(e, lookup))
    }
}
