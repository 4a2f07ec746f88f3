//! Index synchronization.
//!
//! Pushes a build's full document set to the remote search store,
//! either replacing the collection wholesale or upserting into it.
//! Sync is a best-effort side channel: every failure (missing
//! credential, network, remote rejection) is captured in the
//! returned outcome and logged, and never propagates to the caller.

pub mod http;
pub mod store;

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{DocsiftError, Result};
use crate::core::sync::http::HttpDocumentStore;
use crate::core::sync::store::DocumentStore;
use crate::core::types::SearchDocument;

/// Environment variable consulted when no explicit api key is set
pub const API_KEY_ENV: &str = "DOCSIFT_API_KEY";

/// Replacement strategy for a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Delete everything in the collection, then insert the new set
    Full,

    /// Upsert by objectID; stale remote documents are left in place
    Incremental,
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncMode::Full => write!(f, "full"),
            SyncMode::Incremental => write!(f, "incremental"),
        }
    }
}

/// Descriptor of the remote collection to deploy into
#[derive(Debug, Clone)]
pub struct SyncTarget {
    /// Base URL of the remote search service
    pub endpoint: String,

    /// Explicit credential; falls back to [`API_KEY_ENV`]
    pub api_key: Option<String>,

    /// Collection (index) identifier
    pub collection: String,

    /// Replacement strategy
    pub mode: SyncMode,
}

/// What a deployment attempt produced
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SyncOutcome {
    /// The document set was written to the remote collection
    Completed { documents: usize, mode: SyncMode },

    /// The deployment stopped; the build itself carries on
    Failed { reason: String },
}

impl SyncOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SyncOutcome::Completed { .. })
    }
}

/// Deploys a document set into a remote collection
pub struct SyncEngine;

impl SyncEngine {
    /// Sync the full document set for a build against the target.
    ///
    /// This is the system's only network I/O. It runs to completion
    /// or failure; there is no retry and no cancellation here.
    pub async fn sync(documents: &[SearchDocument], target: &SyncTarget) -> SyncOutcome {
        match Self::try_sync(documents, target).await {
            Ok(()) => {
                tracing::info!(
                    "Deployed {} documents to '{}' ({} mode)",
                    documents.len(),
                    target.collection,
                    target.mode
                );
                SyncOutcome::Completed {
                    documents: documents.len(),
                    mode: target.mode,
                }
            }
            Err(e) => {
                tracing::warn!("Deployment to '{}' failed: {}", target.collection, e);
                SyncOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn try_sync(documents: &[SearchDocument], target: &SyncTarget) -> Result<()> {
        let api_key = resolve_credential(target)?;
        let store = HttpDocumentStore::new(&target.endpoint, &target.collection, &api_key)?;
        Self::apply(&store, documents, target.mode).await
    }

    /// Apply the replacement policy through a document store.
    ///
    /// Full mode is a two-step, non-atomic sequence: a failure after
    /// the delete leaves the remote collection empty. That is the
    /// accepted cost of the policy, not something to mask here.
    pub async fn apply(
        store: &dyn DocumentStore,
        documents: &[SearchDocument],
        mode: SyncMode,
    ) -> Result<()> {
        match mode {
            SyncMode::Full => {
                store.delete_all().await?;
                store.add(documents).await
            }
            SyncMode::Incremental => store.upsert(documents).await,
        }
    }
}

/// Resolve the deployment credential: explicit value, else the
/// environment, else a configuration error.
fn resolve_credential(target: &SyncTarget) -> Result<String> {
    if let Some(key) = &target.api_key {
        if !key.is_empty() {
            return Ok(key.clone());
        }
    }

    env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()).ok_or_else(|| {
        DocsiftError::ConfigError(format!(
            "No api key configured and {API_KEY_ENV} is not set"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn target(api_key: Option<&str>) -> SyncTarget {
        SyncTarget {
            endpoint: "http://localhost:7700".to_string(),
            api_key: api_key.map(str::to_string),
            collection: "docs".to_string(),
            mode: SyncMode::Full,
        }
    }

    #[test]
    #[serial]
    fn test_explicit_credential_wins() {
        env::set_var(API_KEY_ENV, "from-env");
        let key = resolve_credential(&target(Some("explicit"))).unwrap();
        env::remove_var(API_KEY_ENV);

        assert_eq!(key, "explicit");
    }

    #[test]
    #[serial]
    fn test_credential_falls_back_to_env() {
        env::set_var(API_KEY_ENV, "from-env");
        let key = resolve_credential(&target(None)).unwrap();
        env::remove_var(API_KEY_ENV);

        assert_eq!(key, "from-env");
    }

    #[test]
    #[serial]
    fn test_missing_credential_is_config_error() {
        env::remove_var(API_KEY_ENV);
        let err = resolve_credential(&target(None)).unwrap_err();
        assert!(err.is_bad_input());
    }

    #[test]
    #[serial]
    fn test_empty_credential_treated_as_missing() {
        env::remove_var(API_KEY_ENV);
        assert!(resolve_credential(&target(Some(""))).is_err());
    }

    #[tokio::test]
    #[serial]
    async fn test_sync_without_credential_reports_failure() {
        env::remove_var(API_KEY_ENV);
        let outcome = SyncEngine::sync(&[], &target(None)).await;

        match outcome {
            SyncOutcome::Failed { reason } => assert!(reason.contains(API_KEY_ENV)),
            SyncOutcome::Completed { .. } => panic!("sync must not succeed without a credential"),
        }
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(SyncMode::Full.to_string(), "full");
        assert_eq!(SyncMode::Incremental.to_string(), "incremental");
    }
}
