//! HTTP implementation of the remote document store.
//!
//! Speaks the remote search service's documents API: one collection
//! per deployment, bulk writes as JSON arrays, bearer-token auth.
//! Batching for request-size limits would live here if it were ever
//! needed; the sync policy above never partitions.

use async_trait::async_trait;
use reqwest::Client;

use crate::core::error::{DocsiftError, Result};
use crate::core::sync::store::DocumentStore;
use crate::core::types::SearchDocument;

/// Remote store client for one collection
pub struct HttpDocumentStore {
    client: Client,
    documents_url: String,
    api_key: String,
}

impl HttpDocumentStore {
    /// Create a client for the collection's documents endpoint
    pub fn new(endpoint: &str, collection: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("docsift/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base = endpoint.trim_end_matches('/');
        let documents_url = format!("{base}/indexes/{collection}/documents");

        Ok(Self {
            client,
            documents_url,
            api_key: api_key.to_string(),
        })
    }

    fn check(status: reqwest::StatusCode, operation: &str) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(DocsiftError::SyncFailed(format!(
                "{operation} returned {status}"
            )))
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn delete_all(&self) -> Result<()> {
        let response = self
            .client
            .delete(&self.documents_url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Self::check(response.status(), "delete")
    }

    async fn add(&self, documents: &[SearchDocument]) -> Result<()> {
        let response = self
            .client
            .post(&self.documents_url)
            .bearer_auth(&self.api_key)
            .json(documents)
            .send()
            .await?;
        Self::check(response.status(), "insert")
    }

    async fn upsert(&self, documents: &[SearchDocument]) -> Result<()> {
        let response = self
            .client
            .put(&self.documents_url)
            .bearer_auth(&self.api_key)
            .json(documents)
            .send()
            .await?;
        Self::check(response.status(), "upsert")
    }
}
