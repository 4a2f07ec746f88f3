//! Index synchronization policy and wire behavior.
//!
//! The replacement policy is tested against an in-memory store
//! double; the HTTP client is tested against a mock server.

mod common;

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use httpmock::prelude::*;

use common::fixtures::document;
use docsift::core::error::{DocsiftError, Result};
use docsift::core::sync::http::HttpDocumentStore;
use docsift::core::sync::store::DocumentStore;
use docsift::{SearchDocument, SyncEngine, SyncMode, SyncOutcome, SyncTarget};

/// In-memory stand-in for the remote collection
#[derive(Default)]
struct MemoryStore {
    documents: Mutex<HashMap<String, SearchDocument>>,
}

impl MemoryStore {
    fn seeded(documents: Vec<SearchDocument>) -> Self {
        let store = Self::default();
        store.insert_all(&documents);
        store
    }

    fn insert_all(&self, documents: &[SearchDocument]) {
        let mut map = self.documents.lock().unwrap();
        for doc in documents {
            map.insert(doc.object_id.clone(), doc.clone());
        }
    }

    fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    fn get(&self, object_id: &str) -> Option<SearchDocument> {
        self.documents.lock().unwrap().get(object_id).cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn delete_all(&self) -> Result<()> {
        self.documents.lock().unwrap().clear();
        Ok(())
    }

    async fn add(&self, documents: &[SearchDocument]) -> Result<()> {
        self.insert_all(documents);
        Ok(())
    }

    async fn upsert(&self, documents: &[SearchDocument]) -> Result<()> {
        self.insert_all(documents);
        Ok(())
    }
}

/// Double whose insert step always fails, exposing the gap between
/// delete and insert in full mode
struct InsertFailsStore {
    inner: MemoryStore,
}

#[async_trait]
impl DocumentStore for InsertFailsStore {
    async fn delete_all(&self) -> Result<()> {
        self.inner.delete_all().await
    }

    async fn add(&self, _documents: &[SearchDocument]) -> Result<()> {
        Err(DocsiftError::SyncFailed("insert rejected".to_string()))
    }

    async fn upsert(&self, documents: &[SearchDocument]) -> Result<()> {
        self.inner.upsert(documents).await
    }
}

fn batch(ids: &[&str]) -> Vec<SearchDocument> {
    ids.iter().map(|id| document(id, "content")).collect()
}

#[tokio::test]
async fn full_sync_replaces_the_collection() {
    let existing = batch(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
    let store = MemoryStore::seeded(existing);
    assert_eq!(store.len(), 10);

    let new_set = batch(&["n1", "n2", "n3", "n4", "n5"]);
    SyncEngine::apply(&store, &new_set, SyncMode::Full)
        .await
        .unwrap();

    assert_eq!(store.len(), 5);
    for doc in &new_set {
        assert!(store.get(&doc.object_id).is_some());
    }
    assert!(store.get("a").is_none());
}

#[tokio::test]
async fn incremental_sync_leaves_stale_documents_untouched() {
    let stale = document("x", "untouched");
    let store = MemoryStore::seeded(vec![stale.clone()]);

    let new_set = batch(&["a", "b"]);
    SyncEngine::apply(&store, &new_set, SyncMode::Incremental)
        .await
        .unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get("x").unwrap(), stale);
}

#[tokio::test]
async fn incremental_sync_overwrites_matching_ids() {
    let store = MemoryStore::seeded(vec![document("a", "old")]);

    SyncEngine::apply(&store, &[document("a", "new")], SyncMode::Incremental)
        .await
        .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").unwrap().content, "new");
}

#[tokio::test]
async fn full_sync_failure_after_delete_leaves_collection_empty() {
    // The two-step sequence is non-atomic by contract: when the
    // insert fails, the delete is not rolled back.
    let store = InsertFailsStore {
        inner: MemoryStore::seeded(batch(&["a", "b", "c"])),
    };

    let result = SyncEngine::apply(&store, &batch(&["n1"]), SyncMode::Full).await;

    assert!(result.is_err());
    assert_eq!(store.inner.len(), 0);
}

#[tokio::test]
async fn http_store_speaks_the_documents_api() {
    let server = MockServer::start_async().await;

    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/indexes/docs/documents")
                .header("authorization", "Bearer secret-key");
            then.status(200);
        })
        .await;
    let insert = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/indexes/docs/documents")
                .header("authorization", "Bearer secret-key")
                .json_body_obj(&batch(&["a"]));
            then.status(202);
        })
        .await;

    let store = HttpDocumentStore::new(&server.base_url(), "docs", "secret-key").unwrap();
    store.delete_all().await.unwrap();
    store.add(&batch(&["a"])).await.unwrap();

    delete.assert_async().await;
    insert.assert_async().await;
}

#[tokio::test]
async fn http_store_upserts_with_put() {
    let server = MockServer::start_async().await;

    let upsert = server
        .mock_async(|when, then| {
            when.method(PUT).path("/indexes/docs/documents");
            then.status(202);
        })
        .await;

    let store = HttpDocumentStore::new(&server.base_url(), "docs", "key").unwrap();
    store.upsert(&batch(&["a", "b"])).await.unwrap();

    upsert.assert_async().await;
}

#[tokio::test]
async fn http_store_maps_error_statuses_to_failures() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/indexes/docs/documents");
            then.status(403);
        })
        .await;

    let store = HttpDocumentStore::new(&server.base_url(), "docs", "wrong-key").unwrap();
    let err = store.delete_all().await.unwrap_err();

    assert!(err.is_sync_failure());
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn engine_reports_transport_failures_without_raising() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(PUT).path("/indexes/docs/documents");
            then.status(500);
        })
        .await;

    let target = SyncTarget {
        endpoint: server.base_url(),
        api_key: Some("key".to_string()),
        collection: "docs".to_string(),
        mode: SyncMode::Incremental,
    };

    let outcome = SyncEngine::sync(&batch(&["a"]), &target).await;
    match outcome {
        SyncOutcome::Failed { reason } => assert!(reason.contains("500")),
        SyncOutcome::Completed { .. } => panic!("engine must surface the failure"),
    }
}

#[tokio::test]
async fn engine_completes_a_full_deployment() {
    let server = MockServer::start_async().await;

    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/indexes/docs/documents");
            then.status(200);
        })
        .await;
    let insert = server
        .mock_async(|when, then| {
            when.method(POST).path("/indexes/docs/documents");
            then.status(202);
        })
        .await;

    let target = SyncTarget {
        endpoint: server.base_url(),
        api_key: Some("key".to_string()),
        collection: "docs".to_string(),
        mode: SyncMode::Full,
    };

    let outcome = SyncEngine::sync(&batch(&["a", "b"]), &target).await;
    assert!(outcome.is_completed());
    delete.assert_async().await;
    insert.assert_async().await;
}
