//! Remote document store interface.
//!
//! The remote search service is reachable only through three bulk
//! operations; everything else about its storage engine is out of
//! scope. Keeping the seam as a trait lets the sync policy be tested
//! against in-memory doubles.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::SearchDocument;

/// The three operations the remote store must support
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Delete every document in the target collection
    async fn delete_all(&self) -> Result<()>;

    /// Bulk-insert documents into the collection
    async fn add(&self, documents: &[SearchDocument]) -> Result<()>;

    /// Bulk-upsert documents by their `objectID`
    async fn upsert(&self, documents: &[SearchDocument]) -> Result<()>;
}
