//! docsift - search documents from rendered documentation sites
//!
//! Walks a site generator's rendered output, segments every page
//! into search documents anchored to their enclosing headings, and
//! synchronizes the resulting collection with a remote search index.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types
//!   - segmenter (heading hierarchy, node walk, identities)
//!   - site (page enumeration, metadata manifest)
//!   - sync (replacement policy, remote store client)
//!   - pipeline, export (build orchestration, file artifact)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Key Guarantees
//!
//! - Segmentation is pure and always succeeds; every parsed page
//!   yields at least one searchable record
//! - Document identities are stable across builds; they are the
//!   remote store's join key
//! - File export and remote sync are best-effort side channels; no
//!   failure there aborts a build

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{DocsiftError, Result};
pub use crate::core::pipeline::BuildPipeline;
pub use crate::core::segmenter::segment_page;
pub use crate::core::sync::{SyncEngine, SyncMode, SyncOutcome, SyncTarget};
pub use crate::core::types::{BuildStats, Frontmatter, Page, SearchDocument};
