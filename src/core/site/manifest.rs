//! Page metadata manifest.
//!
//! The site generator can emit a JSON sidecar mapping logical page
//! paths to frontmatter metadata the rendered HTML no longer carries.
//! Pages missing from the manifest fall back to metadata extracted
//! from the document itself.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::error::{DocsiftError, Result};

/// Frontmatter metadata for one page, as recorded by the generator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    /// Page title override
    pub title: Option<String>,

    /// Language tag override
    pub lang: Option<String>,

    /// Whether the page participates in search indexing
    pub search: Option<bool>,

    /// Rank forwarded to the remote store
    pub page_rank: Option<i64>,
}

/// Manifest of page metadata keyed by logical path
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: HashMap<String, PageMeta>,
}

impl Manifest {
    /// A manifest with no entries; every page uses extracted defaults
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            DocsiftError::ManifestError(format!("Failed to read {}: {e}", path.display()))
        })?;

        let entries: HashMap<String, PageMeta> = serde_json::from_str(&contents).map_err(|e| {
            DocsiftError::ManifestError(format!("Failed to parse {}: {e}", path.display()))
        })?;

        Ok(Self { entries })
    }

    /// Look up the metadata for a logical page path
    pub fn get(&self, path: &str) -> Option<&PageMeta> {
        self.entries.get(path)
    }

    /// Number of pages the manifest describes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest describes no pages
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(
            &path,
            r#"{
                "/guide/": {"title": "Guide", "page_rank": 2},
                "/internal/": {"search": false}
            }"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 2);

        let guide = manifest.get("/guide/").unwrap();
        assert_eq!(guide.title.as_deref(), Some("Guide"));
        assert_eq!(guide.page_rank, Some(2));
        assert!(guide.search.is_none());

        let internal = manifest.get("/internal/").unwrap();
        assert_eq!(internal.search, Some(false));
    }

    #[test]
    fn test_missing_file_is_manifest_error() {
        let err = Manifest::load(Path::new("/nonexistent/pages.json")).unwrap_err();
        assert!(err.is_bad_input());
    }

    #[test]
    fn test_malformed_json_is_manifest_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(&path, "not json").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(err.is_bad_input());
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::empty();
        assert!(manifest.is_empty());
        assert!(manifest.get("/guide/").is_none());
    }
}
