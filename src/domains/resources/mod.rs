//! Resources domain module.
//!
//! This module holds the text resources served by the API and everything
//! needed to manage them.
//!
//! ## Architecture
//!
//! - `model.rs` - The `Resource` record
//! - `validation.rs` - Create/update body validation
//! - `search.rs` - Case-insensitive text matching
//! - `store.rs` - The `ResourceStore` trait and its in-memory backend
//! - `seed.rs` - Built-in seed data and the JSON data-file loader
//! - `service.rs` - `ResourceService`, used by the HTTP handlers

mod error;
mod model;
mod search;
pub mod seed;
mod service;
mod store;
mod validation;

pub use error::ResourceError;
pub use model::{NewResource, Resource};
pub use search::SearchPattern;
pub use seed::{default_resources, load_resources, parse_resources};
pub use service::{DEFAULT_LIST_LIMIT, ResourceService, parse_limit};
pub use store::{InMemoryStore, ResourceStore, StoreResult};
pub use validation::{MIN_TEXT_LENGTH, ValidationError, validate_resource};
