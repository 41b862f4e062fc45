//! Resource service implementation.
//!
//! The ResourceService sits between the HTTP handlers and the store: it applies
//! body validation, turns query parameters into store arguments and logs every
//! mutation. It only knows the store through [`ResourceStore`].

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::error::ResourceError;
use super::model::Resource;
use super::search::SearchPattern;
use super::store::{InMemoryStore, ResourceStore};
use super::validation::validate_resource;

/// Number of entries returned when `limit` is given but unusable.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Turn a raw `limit` query value into a store limit.
///
/// No value means no limit. Fractional numbers are truncated (`2.5` takes 2);
/// anything that is not a non-negative number falls back to [`DEFAULT_LIST_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw.map(|value| {
        let value = value.trim();
        if let Ok(limit) = value.parse::<usize>() {
            return limit;
        }
        match value.parse::<f64>() {
            Ok(limit) if limit.is_finite() && limit >= 0.0 => limit.trunc() as usize,
            _ => DEFAULT_LIST_LIMIT,
        }
    })
}

/// Service for listing, searching and mutating resources.
#[derive(Clone)]
pub struct ResourceService {
    store: Arc<dyn ResourceStore>,
}

impl ResourceService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        info!("Initializing ResourceService");
        Self { store }
    }

    /// Create a service over an in-memory store holding `seed`.
    pub fn in_memory(seed: Vec<Resource>) -> Self {
        Self::new(Arc::new(InMemoryStore::new(seed)))
    }

    /// List resources, optionally truncated.
    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<Resource>, ResourceError> {
        self.store.list(limit).await
    }

    /// Resources whose text matches `query`, case-insensitively.
    ///
    /// An empty match is an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Resource>, ResourceError> {
        let pattern = SearchPattern::new(query);
        let found = self.store.search(&pattern).await?;
        info!("Search matched {} resources", found.len());
        Ok(found)
    }

    /// Fetch a single resource.
    pub async fn get(&self, id: &str) -> Result<Resource, ResourceError> {
        self.store.get(id).await
    }

    /// Fetch a random resource.
    pub async fn random(&self) -> Result<Resource, ResourceError> {
        self.store.random().await
    }

    /// Validate `body` and append a new resource.
    #[instrument(skip_all)]
    pub async fn create(&self, body: &Value) -> Result<Resource, ResourceError> {
        let new = validate_resource(body).map_err(|e| {
            warn!("Rejected create: {}", e);
            ResourceError::validation_failed(e.message)
        })?;

        let resource = self.store.insert(new).await?;
        info!("Created resource {}", resource.id);
        Ok(resource)
    }

    /// Replace the text of an existing resource.
    ///
    /// The id is looked up before the body is validated, so a missing resource
    /// is reported as not found even when the body is also invalid.
    #[instrument(skip(self, body))]
    pub async fn update(&self, id: &str, body: &Value) -> Result<Resource, ResourceError> {
        self.store.get(id).await?;

        let new = validate_resource(body).map_err(|e| {
            warn!("Rejected update: {}", e);
            ResourceError::validation_failed(e.message)
        })?;

        let resource = self.store.update_text(id, new.text).await?;
        info!("Updated resource {}", resource.id);
        Ok(resource)
    }

    /// Remove a resource and return it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Resource, ResourceError> {
        let resource = self.store.delete(id).await?;
        info!("Deleted resource {}", resource.id);
        Ok(resource)
    }

    /// Number of stored resources.
    pub async fn count(&self) -> Result<usize, ResourceError> {
        self.store.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::seed::default_resources;
    use serde_json::json;

    fn service() -> ResourceService {
        ResourceService::in_memory(default_resources())
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), None);
        assert_eq!(parse_limit(Some("2")), Some(2));
        assert_eq!(parse_limit(Some("0")), Some(0));
        assert_eq!(parse_limit(Some("lots")), Some(DEFAULT_LIST_LIMIT));
        assert_eq!(parse_limit(Some("-1")), Some(DEFAULT_LIST_LIMIT));
    }

    #[test]
    fn test_parse_limit_truncates_fractions() {
        assert_eq!(parse_limit(Some("2.5")), Some(2));
        assert_eq!(parse_limit(Some("0.9")), Some(0));
        assert_eq!(parse_limit(Some("1e1")), Some(10));
        assert_eq!(parse_limit(Some("NaN")), Some(DEFAULT_LIST_LIMIT));
        assert_eq!(parse_limit(Some("-2.5")), Some(DEFAULT_LIST_LIMIT));
    }

    #[tokio::test]
    async fn test_create_valid() {
        let service = service();
        let before = service.count().await.unwrap();

        let created = service
            .create(&json!({ "creator": "X", "text": "abcd" }))
            .await
            .unwrap();

        assert_eq!(created.id, (before + 1).to_string());
        assert_eq!(created.creator.as_deref(), Some("X"));
        assert_eq!(service.count().await.unwrap(), before + 1);
    }

    #[tokio::test]
    async fn test_create_invalid_leaves_store_unchanged() {
        let service = service();
        let err = service
            .create(&json!({ "creator": "X", "text": "ab" }))
            .await
            .unwrap_err();

        assert!(matches!(err, ResourceError::ValidationFailed(_)));
        assert_eq!(service.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_update_checks_id_before_body() {
        let service = service();
        let err = service.update("42", &json!({ "text": "x" })).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_invalid_body_keeps_text() {
        let service = service();
        let original = service.get("1").await.unwrap();

        let err = service.update("1", &json!({ "text": "no" })).await.unwrap_err();
        assert!(matches!(err, ResourceError::ValidationFailed(_)));
        assert_eq!(service.get("1").await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_update_ignores_id_and_creator_in_body() {
        let service = service();
        let updated = service
            .update("1", &json!({ "id": "9", "creator": "Someone", "text": "changed" }))
            .await
            .unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(updated.creator.as_deref(), Some("A Tribe Called Quest"));
        assert_eq!(updated.text, "changed");
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let service = service();
        service.delete("3").await.unwrap();
        assert_eq!(service.count().await.unwrap(), 4);
        assert!(service.get("3").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_search_empty_result_is_ok() {
        let service = service();
        let found = service.search(Some("no such lyric")).await.unwrap();
        assert!(found.is_empty());
    }
}
