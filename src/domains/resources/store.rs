//! Resource storage.
//!
//! Request handling talks to storage only through the [`ResourceStore`] trait,
//! so the in-memory backend can be swapped for a file or database backed one
//! without touching the HTTP layer.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;
use tracing::debug;

use super::error::ResourceError;
use super::model::{NewResource, Resource};
use super::search::SearchPattern;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, ResourceError>;

/// Ordered collection of resources.
///
/// Lookups by id match the first record whose stored id equals `id` exactly.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// All resources in order, truncated to the first `limit` when given.
    async fn list(&self, limit: Option<usize>) -> StoreResult<Vec<Resource>>;

    /// Resources whose text matches `pattern`, in order.
    async fn search(&self, pattern: &SearchPattern) -> StoreResult<Vec<Resource>>;

    /// The resource with the given id.
    async fn get(&self, id: &str) -> StoreResult<Resource>;

    /// A uniformly random resource.
    async fn random(&self) -> StoreResult<Resource>;

    /// Append a resource, assigning it the next id.
    async fn insert(&self, new: NewResource) -> StoreResult<Resource>;

    /// Replace the text of the resource with the given id.
    async fn update_text(&self, id: &str, text: String) -> StoreResult<Resource>;

    /// Remove the resource with the given id and return it.
    async fn delete(&self, id: &str) -> StoreResult<Resource>;

    /// Number of stored resources.
    async fn count(&self) -> StoreResult<usize>;
}

#[derive(Debug)]
struct Inner {
    items: Vec<Resource>,
    /// Next id to hand out. Only ever grows, so ids are not reused after deletes.
    next_id: u64,
}

impl Inner {
    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|r| r.id == id)
    }
}

/// Process-lifetime store backed by a `Vec`.
///
/// All mutations run under a single write lock.
#[derive(Debug)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// Create a store holding `seed`, in order.
    ///
    /// Ids handed out later start after the largest numeric seed id.
    pub fn new(seed: Vec<Resource>) -> Self {
        let next_id = seed
            .iter()
            .filter_map(Resource::numeric_id)
            .max()
            .map_or(1, |max| max.saturating_add(1));

        debug!(
            "In-memory store seeded with {} resources, next id {}",
            seed.len(),
            next_id
        );

        Self {
            inner: RwLock::new(Inner {
                items: seed,
                next_id,
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ResourceStore for InMemoryStore {
    async fn list(&self, limit: Option<usize>) -> StoreResult<Vec<Resource>> {
        let inner = self.inner.read().await;
        let take = limit.unwrap_or(inner.items.len());
        Ok(inner.items.iter().take(take).cloned().collect())
    }

    async fn search(&self, pattern: &SearchPattern) -> StoreResult<Vec<Resource>> {
        let inner = self.inner.read().await;
        Ok(inner
            .items
            .iter()
            .filter(|r| pattern.is_match(&r.text))
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> StoreResult<Resource> {
        let inner = self.inner.read().await;
        inner
            .items
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ResourceError::not_found(id))
    }

    async fn random(&self) -> StoreResult<Resource> {
        let inner = self.inner.read().await;
        inner
            .items
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| ResourceError::not_found("random"))
    }

    async fn insert(&self, new: NewResource) -> StoreResult<Resource> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| ResourceError::internal("resource id space exhausted"))?;

        let resource = Resource::from_new(id, new);
        inner.items.push(resource.clone());
        Ok(resource)
    }

    async fn update_text(&self, id: &str, text: String) -> StoreResult<Resource> {
        let mut inner = self.inner.write().await;
        let resource = inner
            .items
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ResourceError::not_found(id))?;

        resource.text = text;
        Ok(resource.clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<Resource> {
        let mut inner = self.inner.write().await;
        let index = inner
            .position(id)
            .ok_or_else(|| ResourceError::not_found(id))?;
        Ok(inner.items.remove(index))
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.inner.read().await.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::seed::default_resources;

    fn new_resource(text: &str) -> NewResource {
        NewResource {
            creator: Some("X".to_string()),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_with_limit() {
        let store = InMemoryStore::new(default_resources());

        let all = store.list(None).await.unwrap();
        assert_eq!(all.len(), 5);

        let two = store.list(Some(2)).await.unwrap();
        assert_eq!(two, all[..2].to_vec());

        let many = store.list(Some(50)).await.unwrap();
        assert_eq!(many.len(), 5);
    }

    #[tokio::test]
    async fn test_insert_assigns_next_id() {
        let store = InMemoryStore::new(default_resources());
        let before = store.count().await.unwrap();

        let created = store.insert(new_resource("abcd")).await.unwrap();
        assert_eq!(created.id, (before + 1).to_string());
        assert_eq!(store.count().await.unwrap(), before + 1);

        let last = store.list(None).await.unwrap().pop().unwrap();
        assert_eq!(last, created);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = InMemoryStore::new(default_resources());
        store.delete("5").await.unwrap();

        let created = store.insert(new_resource("abcd")).await.unwrap();
        assert_eq!(created.id, "6");

        store.delete("2").await.unwrap();
        let created = store.insert(new_resource("efgh")).await.unwrap();
        assert_eq!(created.id, "7");
    }

    #[tokio::test]
    async fn test_empty_store_starts_at_one() {
        let store = InMemoryStore::default();
        let created = store.insert(new_resource("abcd")).await.unwrap();
        assert_eq!(created.id, "1");
    }

    #[tokio::test]
    async fn test_update_text_only() {
        let store = InMemoryStore::new(default_resources());
        let original = store.get("2").await.unwrap();

        let updated = store.update_text("2", "new words".to_string()).await.unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.creator, original.creator);
        assert_eq!(updated.text, "new words");
        assert_eq!(store.get("2").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_delete_removes_one_and_keeps_ids() {
        let store = InMemoryStore::new(default_resources());

        let removed = store.delete("3").await.unwrap();
        assert_eq!(removed.id, "3");
        assert_eq!(store.count().await.unwrap(), 4);

        let ids: Vec<_> = store
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["1", "2", "4", "5"]);
    }

    #[tokio::test]
    async fn test_missing_id_leaves_store_unchanged() {
        let store = InMemoryStore::new(default_resources());
        let before = store.list(None).await.unwrap();

        assert!(store.get("99").await.unwrap_err().is_not_found());
        assert!(store.update_text("99", "abcd".into()).await.unwrap_err().is_not_found());
        assert!(store.delete("99").await.unwrap_err().is_not_found());

        assert_eq!(store.list(None).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_duplicate_ids_hit_first_match() {
        let mut seed = default_resources();
        seed.push(Resource {
            id: "1".to_string(),
            creator: None,
            text: "duplicate".to_string(),
        });
        let store = InMemoryStore::new(seed);

        let removed = store.delete("1").await.unwrap();
        assert_ne!(removed.text, "duplicate");
        assert_eq!(store.get("1").await.unwrap().text, "duplicate");
    }

    #[tokio::test]
    async fn test_search_filters_in_order() {
        let store = InMemoryStore::new(default_resources());
        let found = store.search(&SearchPattern::new(Some("THE"))).await.unwrap();

        assert!(!found.is_empty());
        assert!(found.iter().all(|r| r.text.to_lowercase().contains("the")));

        let none = store.search(&SearchPattern::new(Some("zzzz"))).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_random_is_member() {
        let store = InMemoryStore::new(default_resources());
        let all = store.list(None).await.unwrap();
        for _ in 0..20 {
            let picked = store.random().await.unwrap();
            assert!(all.contains(&picked));
        }

        let empty = InMemoryStore::default();
        assert!(empty.random().await.unwrap_err().is_not_found());
    }
}
