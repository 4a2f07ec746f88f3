//! Hierarchical content segmentation.
//!
//! Splits a rendered page into search documents, one per contiguous
//! content block, each anchored to the nearest enclosing headings.
//! Segmentation is pure and always succeeds: a page that cannot be
//! parsed simply contributes no documents, and a page with no
//! extractable text still yields a placeholder record so it can be
//! found by title.

pub mod hierarchy;
pub mod identity;
mod walker;

use scraper::Html;

use crate::core::segmenter::walker::PageWalker;
use crate::core::types::{Page, SearchDocument};

/// Parse rendered markup into a node tree.
///
/// Empty or whitespace-only markup does not yield a tree. The parser
/// itself recovers from any tag soup, so this is the only failure
/// mode parsing has.
fn parse_markup(markup: &str) -> Option<Html> {
    if markup.trim().is_empty() {
        return None;
    }
    Some(Html::parse_fragment(markup))
}

/// Segment one page into its ordered search documents.
///
/// `index_content` requests full-content indexing; without it, pages
/// are only indexed up to their excerpt marker (and pages without an
/// excerpt contribute headings and title only).
///
/// Returns an empty vec only when the markup did not parse; any
/// parsed page yields at least one document.
pub fn segment_page(page: &Page, base_url: &str, index_content: bool) -> Vec<SearchDocument> {
    let Some(dom) = parse_markup(&page.markup) else {
        tracing::debug!("Markup for {} did not parse, skipping", page.path);
        return Vec::new();
    };

    let url = format!("{}{}", base_url, page.path);

    // Fragment parsing wraps the markup in a synthetic root element;
    // the page's own nodes are its children.
    let root = dom.tree.root();
    let Some(wrapper) = root.children().find(|node| node.value().is_element()) else {
        tracing::debug!("Markup for {} parsed into nothing, skipping", page.path);
        return Vec::new();
    };

    let mut walker = PageWalker::new(page, url.clone(), index_content);
    for child in wrapper.children() {
        walker.walk(child, false);
    }
    let mut docs = walker.into_documents();

    // Prefer substantive records: once any document carries text, the
    // empty boundary flushes are noise. Positions keep their original
    // values, so gaps in the sequence are expected.
    if docs.iter().any(|doc| !doc.content.is_empty()) {
        docs.retain(|doc| !doc.content.is_empty());
    } else if docs.is_empty() {
        docs.push(placeholder(page, &url));
    }

    docs
}

/// Placeholder record for a page that emitted nothing at all.
///
/// Guarantees every included page has one searchable record carrying
/// its title and url.
fn placeholder(page: &Page, url: &str) -> SearchDocument {
    SearchDocument {
        content: String::new(),
        url: url.to_string(),
        anchor: None,
        object_id: identity::object_id(url, None, 0),
        hierarchy_lvl0: Some(page.title.clone()),
        hierarchy_lvl1: None,
        hierarchy_lvl2: None,
        hierarchy_lvl3: None,
        hierarchy_lvl4: None,
        hierarchy_lvl5: None,
        hierarchy_lvl6: None,
        hierarchy_radio_lvl0: Some(page.title.clone()),
        hierarchy_radio_lvl1: None,
        hierarchy_radio_lvl2: None,
        hierarchy_radio_lvl3: None,
        hierarchy_radio_lvl4: None,
        hierarchy_radio_lvl5: None,
        lang: page.lang.clone(),
        level: 0,
        position: 0,
        page_rank: page.frontmatter.page_rank,
    }
}
