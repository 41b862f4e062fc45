//! Request body validation for create and update.
//!
//! The only rule is on `text`: it is required, must be a string, and must be at
//! least [`MIN_TEXT_LENGTH`] characters long. Every other field is accepted as-is.

use serde_json::Value;

use super::model::NewResource;

/// Minimum number of characters in a resource's text.
pub const MIN_TEXT_LENGTH: usize = 3;

/// The first rule a body broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending key (`value` for the body itself).
    pub field: &'static str,

    /// Human-readable message sent back to the client.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Check a JSON body against the resource schema.
///
/// Returns the accepted creator and text on success, or the first failed rule.
pub fn validate_resource(body: &Value) -> Result<NewResource, ValidationError> {
    let Some(object) = body.as_object() else {
        return Err(ValidationError::new("value", "\"value\" must be an object"));
    };

    let text = match object.get("text") {
        None | Some(Value::Null) => {
            return Err(ValidationError::new("text", "\"text\" is required"));
        }
        Some(Value::String(text)) => text,
        Some(_) => {
            return Err(ValidationError::new("text", "\"text\" must be a string"));
        }
    };

    if text.chars().count() < MIN_TEXT_LENGTH {
        return Err(ValidationError::new(
            "text",
            format!("\"text\" length must be at least {MIN_TEXT_LENGTH} characters long"),
        ));
    }

    let creator = match object.get("creator") {
        None | Some(Value::Null) => None,
        Some(Value::String(creator)) => Some(creator.clone()),
        Some(other) => Some(other.to_string()),
    };

    Ok(NewResource {
        creator,
        text: text.clone(),
    })
}
