// Test fixtures for integration testing

use std::path::Path;
use tempfile::TempDir;

use docsift::{Frontmatter, Page, SearchDocument};

/// Rendered-site fixture built in a temp directory
#[allow(dead_code)] // Used in integration tests
pub struct TestSite {
    pub dir: TempDir,
}

impl TestSite {
    /// Create a site from (relative path, file contents) pairs
    #[allow(dead_code)] // Used in integration tests
    pub fn with_pages(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
        }

        Self { dir }
    }

    /// Get path to the site root
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A minimal rendered page wrapping `body` in the usual chrome
#[allow(dead_code)] // Used in integration tests
pub fn rendered(title: &str, body: &str) -> String {
    format!(
        "<html lang=\"en\"><head><title>{title}</title></head>\
         <body><nav><a href=\"/\">Home</a></nav><main>{body}</main></body></html>"
    )
}

/// An in-memory page record for driving the segmenter directly
#[allow(dead_code)] // Used in integration tests
pub fn page(path: &str, title: &str, markup: &str) -> Page {
    Page {
        path: path.to_string(),
        markup: markup.to_string(),
        title: title.to_string(),
        lang: "en".to_string(),
        frontmatter: Frontmatter::default(),
        has_excerpt: false,
    }
}

/// A hand-rolled search document for sync tests
#[allow(dead_code)] // Used in integration tests
pub fn document(object_id: &str, content: &str) -> SearchDocument {
    SearchDocument {
        content: content.to_string(),
        url: format!("/{object_id}/"),
        anchor: None,
        object_id: object_id.to_string(),
        hierarchy_lvl0: Some("Fixture".to_string()),
        hierarchy_lvl1: None,
        hierarchy_lvl2: None,
        hierarchy_lvl3: None,
        hierarchy_lvl4: None,
        hierarchy_lvl5: None,
        hierarchy_lvl6: None,
        hierarchy_radio_lvl0: Some("Fixture".to_string()),
        hierarchy_radio_lvl1: None,
        hierarchy_radio_lvl2: None,
        hierarchy_radio_lvl3: None,
        hierarchy_radio_lvl4: None,
        hierarchy_radio_lvl5: None,
        lang: "en".to_string(),
        level: 0,
        position: 0,
        page_rank: 0,
    }
}
