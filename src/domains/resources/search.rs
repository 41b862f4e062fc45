//! Text search over resources.

use regex::{Regex, RegexBuilder};
use tracing::debug;

/// A case-insensitive pattern compiled from a search query.
///
/// Queries are tried as regular expressions first; anything that does not
/// compile is matched as a literal substring instead.
#[derive(Debug, Clone)]
pub enum SearchPattern {
    /// Empty or missing query.
    Any,
    Regex(Regex),
    /// Lowercased literal substring.
    Literal(String),
}

impl SearchPattern {
    /// Compile a query string.
    pub fn new(query: Option<&str>) -> Self {
        let query = match query {
            Some(q) if !q.is_empty() => q,
            _ => return Self::Any,
        };

        match RegexBuilder::new(query).case_insensitive(true).build() {
            Ok(regex) => Self::Regex(regex),
            Err(e) => {
                debug!("Query {:?} is not a valid pattern ({}), matching literally", query, e);
                Self::Literal(query.to_lowercase())
            }
        }
    }

    /// Whether `text` matches this pattern.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Regex(regex) => regex.is_match(text),
            Self::Literal(needle) => text.to_lowercase().contains(needle.as_str()),
        }
    }
}
