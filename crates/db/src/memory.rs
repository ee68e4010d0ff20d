//! In-memory backend for the [`DocumentStore`] trait.
//!
//! Backs the API integration tests so they exercise the full request path
//! without a running MongoDB. Semantics mirror the Mongo backend where the
//! service depends on them: store-assigned `_id`s, insertion order, limit
//! capping, and subset-match filtering.

use std::collections::HashMap;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use tokio::sync::RwLock;

use agency_core::error::CoreError;

use crate::{DocumentStore, StoreProbe};

/// Collections held in process memory behind an async lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// True when every key/value pair in `filter` is present in `document`.
/// An empty filter matches everything, like Mongo's `{}`.
fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut document: Document) -> Result<Bson, CoreError> {
        let id = Bson::ObjectId(ObjectId::new());
        document.insert("_id", id.clone());

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, CoreError> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, &filter))
                    .take(limit.max(0) as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(documents)
    }

    async fn count(&self, collection: &str, filter: Document) -> Result<u64, CoreError> {
        let collections = self.collections.read().await;
        let count = collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| matches(doc, &filter)).count())
            .unwrap_or(0);

        Ok(count as u64)
    }

    async fn probe(&self) -> StoreProbe {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();

        StoreProbe {
            reachable: true,
            collections: names,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;

    use super::*;

    #[tokio::test]
    async fn insert_assigns_an_object_id() {
        let store = MemoryStore::new();
        let id = store.insert("lead", doc! { "name": "Ava" }).await.unwrap();

        assert!(matches!(id, Bson::ObjectId(_)));

        let docs = store.find("lead", doc! {}, 10).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get("_id"), Some(&id));
    }

    #[tokio::test]
    async fn find_caps_at_limit_in_insertion_order() {
        let store = MemoryStore::new();
        for i in 0..3 {
            store
                .insert("project", doc! { "title": format!("p{i}") })
                .await
                .unwrap();
        }

        let docs = store.find("project", doc! {}, 2).await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].get_str("title").unwrap(), "p0");
        assert_eq!(docs[1].get_str("title").unwrap(), "p1");
    }

    #[tokio::test]
    async fn filter_matches_on_field_equality() {
        let store = MemoryStore::new();
        store
            .insert("lead", doc! { "name": "Ava", "status": "new" })
            .await
            .unwrap();
        store
            .insert("lead", doc! { "name": "Marcus", "status": "won" })
            .await
            .unwrap();

        let won = store.find("lead", doc! { "status": "won" }, 10).await.unwrap();
        assert_eq!(won.len(), 1);
        assert_eq!(won[0].get_str("name").unwrap(), "Marcus");

        assert_eq!(store.count("lead", doc! {}).await.unwrap(), 2);
        assert_eq!(store.count("lead", doc! { "status": "new" }).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_collection_is_empty_not_an_error() {
        let store = MemoryStore::new();
        assert_eq!(store.count("nope", doc! {}).await.unwrap(), 0);
        assert!(store.find("nope", doc! {}, 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn probe_lists_collections_sorted() {
        let store = MemoryStore::new();
        store.insert("service", doc! { "name": "s" }).await.unwrap();
        store.insert("lead", doc! { "name": "l" }).await.unwrap();

        let probe = store.probe().await;
        assert!(probe.reachable);
        assert_eq!(probe.collections, ["lead", "service"]);
        assert_eq!(probe.error, None);
    }
}
