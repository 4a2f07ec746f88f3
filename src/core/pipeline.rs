//! Build pipeline orchestration.
//!
//! Coordinates the per-build workflow:
//! 1. Walk the rendered site tree
//! 2. Load each page and its metadata
//! 3. Apply the inclusion filter
//! 4. Segment each page into search documents
//!
//! Pages are independent: each gets its own heading stack and
//! accumulator, so one bad page never affects the rest of the
//! build.

use std::path::Path;
use std::time::Instant;

use crate::core::error::{DocsiftError, Result};
use crate::core::segmenter::segment_page;
use crate::core::site::manifest::Manifest;
use crate::core::site::walker::SiteWalker;
use crate::core::site::PageLoader;
use crate::core::types::{BuildStats, SearchDocument};

/// Orchestrates one build pass over a rendered site
pub struct BuildPipeline {
    walker: SiteWalker,
    loader: PageLoader,
    base_url: String,
    index_content: bool,
}

impl BuildPipeline {
    /// Create a pipeline from the effective build settings
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        content_selector: &str,
        default_lang: &str,
        manifest: Manifest,
        base_url: String,
        index_content: bool,
    ) -> Result<Self> {
        let walker = SiteWalker::new(include_patterns, exclude_patterns)?;
        let loader = PageLoader::new(content_selector, default_lang, manifest)?;

        Ok(Self {
            walker,
            loader,
            base_url,
            index_content,
        })
    }

    /// Segment every included page under the site root.
    ///
    /// Per-page failures (unreadable file, unparseable markup) are
    /// logged and skipped; only a missing site root fails the build.
    pub fn build(&self, site_root: &Path) -> Result<(Vec<SearchDocument>, BuildStats)> {
        let start = Instant::now();

        if !site_root.is_dir() {
            return Err(DocsiftError::InvalidSitePath(format!(
                "{} is not a directory",
                site_root.display()
            )));
        }

        tracing::info!("Enumerating pages under {:?}", site_root);
        let files = self.walker.collect_pages(site_root)?;
        tracing::info!("Found {} pages", files.len());

        let mut documents = Vec::new();
        let mut pages_indexed = 0;
        let mut pages_skipped = 0;

        for file in &files {
            let page = match self.loader.load(site_root, file) {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", file, e);
                    pages_skipped += 1;
                    continue;
                }
            };

            if !page.frontmatter.search {
                tracing::debug!("Page {} excluded by frontmatter", page.path);
                pages_skipped += 1;
                continue;
            }

            let docs = segment_page(&page, &self.base_url, self.index_content);
            if docs.is_empty() {
                // Markup that did not parse; the page is unfindable
                pages_skipped += 1;
                continue;
            }

            tracing::debug!("Segmented {} into {} documents", page.path, docs.len());
            documents.extend(docs);
            pages_indexed += 1;
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Build complete: {} pages segmented, {} skipped, {} documents in {}ms",
            pages_indexed,
            pages_skipped,
            documents.len(),
            duration_ms
        );

        let stats = BuildStats {
            pages_seen: files.len(),
            pages_indexed,
            pages_skipped,
            documents_emitted: documents.len(),
            duration_ms,
        };

        Ok((documents, stats))
    }
}
