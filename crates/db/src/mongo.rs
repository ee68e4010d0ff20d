//! MongoDB backend for the [`DocumentStore`] trait.

use async_trait::async_trait;
use bson::{Bson, Document};
use futures::TryStreamExt;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use agency_core::error::CoreError;

use crate::{DocumentStore, StoreProbe};

/// A thin pass-through over one `mongodb::Client` and one database name.
///
/// The driver owns connection pooling and timeouts; no retry or caching
/// logic lives at this layer.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: String,
}

impl MongoStore {
    /// Build a store from a connection string and database name.
    ///
    /// Fails with [`CoreError::Configuration`] when the connection string
    /// cannot be parsed. The driver connects lazily, so an unreachable
    /// server surfaces later as [`CoreError::Storage`] on first use.
    pub async fn connect(url: &str, database: &str) -> Result<Self, CoreError> {
        let options = ClientOptions::parse(url)
            .await
            .map_err(|e| CoreError::Configuration(e.to_string()))?;
        let client = Client::with_options(options)
            .map_err(|e| CoreError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            database: database.to_string(),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.client.database(&self.database).collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, document: Document) -> Result<Bson, CoreError> {
        let result = self
            .collection(collection)
            .insert_one(document)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))?;

        Ok(result.inserted_id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, CoreError> {
        self.collection(collection)
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))
    }

    async fn count(&self, collection: &str, filter: Document) -> Result<u64, CoreError> {
        self.collection(collection)
            .count_documents(filter)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))
    }

    async fn probe(&self) -> StoreProbe {
        match self
            .client
            .database(&self.database)
            .list_collection_names()
            .await
        {
            Ok(collections) => StoreProbe {
                reachable: true,
                collections,
                error: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Document store probe failed");
                StoreProbe {
                    reachable: false,
                    collections: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
