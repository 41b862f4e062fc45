//! Domains module containing business logic organized by bounded contexts.
//!
//! The API currently has a single domain, `resources`.

pub mod resources;
