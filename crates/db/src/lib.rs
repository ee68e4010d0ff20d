//! Document store adapter.
//!
//! Exposes the [`DocumentStore`] trait — collection-scoped insert / find /
//! count plus a diagnostics probe — with two backends: [`MongoStore`] for
//! production and [`MemoryStore`] for tests. The store is always injected as
//! an explicit (possibly absent) dependency; nothing in this crate reads
//! process-wide state.

use async_trait::async_trait;
use bson::{Bson, Document};

use agency_core::error::CoreError;

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Diagnostics snapshot returned by [`DocumentStore::probe`].
///
/// Probing never fails: an unreachable store is reported through
/// `reachable = false` and `error`, not through a `Result`.
#[derive(Debug, Clone)]
pub struct StoreProbe {
    /// Whether the store answered the introspection call.
    pub reachable: bool,
    /// Known collection names, empty when unreachable.
    pub collections: Vec<String>,
    /// Driver error message when unreachable.
    pub error: Option<String>,
}

/// Capability contract for the underlying document database.
///
/// Every operation is independently atomic at the single-document level;
/// there are no transactions and no cross-collection guarantees. `find`
/// returns records in store-default order, which callers must treat as
/// insertion-order-ish but never rely on for correctness.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return the store-assigned identifier.
    async fn insert(&self, collection: &str, document: Document) -> Result<Bson, CoreError>;

    /// Return documents matching `filter`, capped at `limit`.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, CoreError>;

    /// Count documents matching `filter`.
    async fn count(&self, collection: &str, filter: Document) -> Result<u64, CoreError>;

    /// Liveness / introspection probe. Diagnostics only.
    async fn probe(&self) -> StoreProbe;
}
