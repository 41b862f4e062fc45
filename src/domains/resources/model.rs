//! Resource records.

use serde::{Deserialize, Serialize};

/// A text record with an identifier and creator attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Decimal identifier, assigned by the store at creation time.
    pub id: String,

    /// Who the text is attributed to. Not validated; may be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// The resource content.
    pub text: String,
}

/// A validated resource that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub creator: Option<String>,
    pub text: String,
}

impl Resource {
    /// Build a resource from a new record and the id the store picked for it.
    pub fn from_new(id: u64, new: NewResource) -> Self {
        Self {
            id: id.to_string(),
            creator: new.creator,
            text: new.text,
        }
    }

    /// Numeric value of the id, if it is a plain decimal.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }
}
