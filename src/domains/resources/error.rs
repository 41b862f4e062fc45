//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource carries the requested id.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The request body failed validation.
    #[error("{0}")]
    ValidationFailed(String),

    /// Seed data could not be interpreted.
    #[error("Invalid resource data: {0}")]
    InvalidData(String),

    /// An I/O error occurred while loading resource data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a new "validation failed" error.
    pub fn validation_failed(msg: impl Into<String>) -> Self {
        Self::ValidationFailed(msg.into())
    }

    /// Create a new "invalid data" error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error is a client-side lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_bare() {
        let err = ResourceError::validation_failed("\"text\" is required");
        assert_eq!(err.to_string(), "\"text\" is required");
    }

    #[test]
    fn test_not_found_display() {
        let err = ResourceError::not_found("42");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Resource not found: 42");
    }
}
