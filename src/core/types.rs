//! Core data types for the docsift build tool.
//!
//! This module defines the data structures shared across the
//! application: pages as handed over by the site generator, the
//! search documents the segmenter emits, and build statistics.

use serde::{Deserialize, Serialize};

/// A rendered documentation page, as produced by the site generator.
///
/// Pages are read-only inputs: the driver assembles them once and the
/// segmenter never mutates them.
#[derive(Debug, Clone)]
pub struct Page {
    /// Logical URL path of the page (e.g. `/guide/setup.html`)
    pub path: String,

    /// Rendered markup of the page's content root
    pub markup: String,

    /// Page title, used to seed the level-0 heading frame
    pub title: String,

    /// Language tag from the page, defaults to "en"
    pub lang: String,

    /// Frontmatter metadata attached by the site generator
    pub frontmatter: Frontmatter,

    /// Whether the markup declares an excerpt truncation marker
    pub has_excerpt: bool,
}

/// Page-level frontmatter relevant to search indexing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Whether the page should be indexed at all
    #[serde(default = "default_search")]
    pub search: bool,

    /// Numeric rank used by the remote store for result ordering
    #[serde(default)]
    pub page_rank: i64,
}

fn default_search() -> bool {
    true
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            search: true,
            page_rank: 0,
        }
    }
}

/// A single search document emitted by the segmenter.
///
/// Serializes to the flat JSON object the remote store consumes. All
/// optional hierarchy fields are always present, `null` when empty;
/// consumers do not distinguish absence from `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDocument {
    /// Normalized inline text accumulated since the previous
    /// emission boundary
    pub content: String,

    /// Page path, prefixed with the configured base URL
    pub url: String,

    /// Id of the deepest active heading frame with an anchor
    pub anchor: Option<String>,

    /// Stable identity hash, the remote store's join key
    #[serde(rename = "objectID")]
    pub object_id: String,

    pub hierarchy_lvl0: Option<String>,
    pub hierarchy_lvl1: Option<String>,
    pub hierarchy_lvl2: Option<String>,
    pub hierarchy_lvl3: Option<String>,
    pub hierarchy_lvl4: Option<String>,
    pub hierarchy_lvl5: Option<String>,
    pub hierarchy_lvl6: Option<String>,

    // The radio table stops at level 5. The remote store's schema
    // expects exactly this asymmetry; do not extend it.
    pub hierarchy_radio_lvl0: Option<String>,
    pub hierarchy_radio_lvl1: Option<String>,
    pub hierarchy_radio_lvl2: Option<String>,
    pub hierarchy_radio_lvl3: Option<String>,
    pub hierarchy_radio_lvl4: Option<String>,
    pub hierarchy_radio_lvl5: Option<String>,

    /// Page language, defaults to "en"
    pub lang: String,

    /// Maximum heading depth active at emission time
    pub level: u8,

    /// 0-based emission sequence number within the page
    pub position: usize,

    /// Frontmatter rank, defaults to 0
    pub page_rank: i64,
}

/// Statistics from a build run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of pages enumerated from the site directory
    pub pages_seen: usize,

    /// Number of pages segmented into documents
    pub pages_indexed: usize,

    /// Pages skipped (excluded by frontmatter, unreadable, or empty)
    pub pages_skipped: usize,

    /// Total search documents emitted
    pub documents_emitted: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}
