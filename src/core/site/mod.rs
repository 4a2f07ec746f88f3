//! Rendered-site access: page enumeration and page loading.
//!
//! This is the driver-facing edge of the system. The site generator
//! owns page production; docsift only reads what it rendered, HTML
//! files plus an optional metadata manifest, and assembles the
//! read-only [`Page`] records the segmenter consumes.

pub mod manifest;
pub mod walker;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::fs;
use std::path::Path;

use crate::core::error::{DocsiftError, Result};
use crate::core::site::manifest::Manifest;
use crate::core::types::{Frontmatter, Page};

/// The truncation marker the site generator renders for excerpts
static EXCERPT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--\s*more\s*-->").expect("static regex"));

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("static selector"));

static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("static selector"));

static HTML_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("html").expect("static selector"));

static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("static selector"));

/// Loads rendered pages from disk and merges manifest metadata
#[derive(Debug)]
pub struct PageLoader {
    selector: Selector,
    default_lang: String,
    manifest: Manifest,
}

impl PageLoader {
    /// Create a loader with the configured content selector.
    ///
    /// The selector locates the indexable content root inside a full
    /// rendered document (keeping navigation chrome out of the
    /// index); pages without a match fall back to `body`.
    pub fn new(content_selector: &str, default_lang: &str, manifest: Manifest) -> Result<Self> {
        let selector = Selector::parse(content_selector).map_err(|e| {
            DocsiftError::ConfigError(format!("Invalid content selector '{content_selector}': {e}"))
        })?;

        Ok(Self {
            selector,
            default_lang: default_lang.to_string(),
            manifest,
        })
    }

    /// Load one page from its rendered HTML file
    pub fn load(&self, site_root: &Path, file: &Path) -> Result<Page> {
        let raw = fs::read_to_string(file)?;
        let path = logical_path(site_root, file)?;
        let document = Html::parse_document(&raw);

        let meta = self.manifest.get(&path).cloned().unwrap_or_default();

        let title = meta
            .title
            .or_else(|| extract_title(&document))
            .unwrap_or_else(|| path.clone());

        let lang = meta
            .lang
            .or_else(|| extract_lang(&document))
            .unwrap_or_else(|| self.default_lang.clone());

        let markup = self.content_markup(&document, &raw);
        let has_excerpt = EXCERPT_MARKER.is_match(&markup);

        Ok(Page {
            path,
            title,
            lang,
            frontmatter: Frontmatter {
                search: meta.search.unwrap_or(true),
                page_rank: meta.page_rank.unwrap_or(0),
            },
            has_excerpt,
            markup,
        })
    }

    /// Markup of the content root: configured selector, else `body`,
    /// else the raw document (content-only fragments have neither)
    fn content_markup(&self, document: &Html, raw: &str) -> String {
        if let Some(root) = document.select(&self.selector).next() {
            return root.inner_html();
        }
        if let Some(body) = document.select(&BODY_SELECTOR).next() {
            let inner = body.inner_html();
            if !inner.trim().is_empty() {
                return inner;
            }
        }
        raw.to_string()
    }
}

/// Derive a page's logical URL path from its file location.
///
/// `guide/setup.html` becomes `/guide/setup.html`; an `index.html`
/// collapses to its directory path with a trailing slash, matching
/// how the rendered site is served.
pub fn logical_path(site_root: &Path, file: &Path) -> Result<String> {
    let relative = file.strip_prefix(site_root).map_err(|_| {
        DocsiftError::InvalidSitePath(format!(
            "{} is outside the site root {}",
            file.display(),
            site_root.display()
        ))
    })?;

    let mut parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.last().map(String::as_str) == Some("index.html") {
        parts.pop();
        if parts.is_empty() {
            return Ok("/".to_string());
        }
        return Ok(format!("/{}/", parts.join("/")));
    }

    Ok(format!("/{}", parts.join("/")))
}

fn extract_title(document: &Html) -> Option<String> {
    let from_tag = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| collapse(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty());

    from_tag.or_else(|| {
        document
            .select(&H1_SELECTOR)
            .next()
            .map(|el| collapse(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty())
    })
}

fn extract_lang(document: &Html) -> Option<String> {
    document
        .select(&HTML_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("lang"))
        .map(str::to_string)
        .filter(|l| !l.is_empty())
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_page(dir: &TempDir, rel: &str, html: &str) -> std::path::PathBuf {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, html).unwrap();
        path
    }

    #[test]
    fn test_logical_path_plain_file() {
        let root = Path::new("/site");
        let path = logical_path(root, Path::new("/site/guide/setup.html")).unwrap();
        assert_eq!(path, "/guide/setup.html");
    }

    #[test]
    fn test_logical_path_index_collapses() {
        let root = Path::new("/site");
        assert_eq!(
            logical_path(root, Path::new("/site/guide/index.html")).unwrap(),
            "/guide/"
        );
        assert_eq!(
            logical_path(root, Path::new("/site/index.html")).unwrap(),
            "/"
        );
    }

    #[test]
    fn test_logical_path_outside_root() {
        let root = Path::new("/site");
        assert!(logical_path(root, Path::new("/other/page.html")).is_err());
    }

    #[test]
    fn test_load_extracts_metadata_from_document() {
        let dir = TempDir::new().unwrap();
        let file = write_page(
            &dir,
            "guide/index.html",
            "<html lang=\"fr\"><head><title>Le Guide</title></head>\
             <body><main><p>Bonjour</p></main></body></html>",
        );

        let loader = PageLoader::new("main", "en", Manifest::empty()).unwrap();
        let page = loader.load(dir.path(), &file).unwrap();

        assert_eq!(page.path, "/guide/");
        assert_eq!(page.title, "Le Guide");
        assert_eq!(page.lang, "fr");
        assert_eq!(page.markup, "<p>Bonjour</p>");
        assert!(page.frontmatter.search);
        assert_eq!(page.frontmatter.page_rank, 0);
        assert!(!page.has_excerpt);
    }

    #[test]
    fn test_load_manifest_overrides_extracted_metadata() {
        let dir = TempDir::new().unwrap();
        let file = write_page(
            &dir,
            "internal/index.html",
            "<html><head><title>Internal</title></head><body><p>secret</p></body></html>",
        );
        let manifest_path = dir.path().join("pages.json");
        fs::write(
            &manifest_path,
            r#"{"/internal/": {"title": "Hidden", "search": false, "page_rank": 9}}"#,
        )
        .unwrap();

        let manifest = Manifest::load(&manifest_path).unwrap();
        let loader = PageLoader::new("main", "en", manifest).unwrap();
        let page = loader.load(dir.path(), &file).unwrap();

        assert_eq!(page.title, "Hidden");
        assert!(!page.frontmatter.search);
        assert_eq!(page.frontmatter.page_rank, 9);
    }

    #[test]
    fn test_load_falls_back_to_body_then_h1() {
        let dir = TempDir::new().unwrap();
        let file = write_page(
            &dir,
            "about.html",
            "<html><body><h1>About Us</h1><p>text</p></body></html>",
        );

        let loader = PageLoader::new("main", "en", Manifest::empty()).unwrap();
        let page = loader.load(dir.path(), &file).unwrap();

        // No <title>, so the first h1 names the page; no <main>, so
        // the body is the content root.
        assert_eq!(page.title, "About Us");
        assert!(page.markup.contains("<h1>About Us</h1>"));
    }

    #[test]
    fn test_excerpt_marker_detected() {
        let dir = TempDir::new().unwrap();
        let file = write_page(
            &dir,
            "post.html",
            "<html><body><main><p>lead</p><!-- more --><p>rest</p></main></body></html>",
        );

        let loader = PageLoader::new("main", "en", Manifest::empty()).unwrap();
        let page = loader.load(dir.path(), &file).unwrap();

        assert!(page.has_excerpt);
    }

    #[test]
    fn test_invalid_selector_is_config_error() {
        let err = PageLoader::new("ma!!in[", "en", Manifest::empty()).unwrap_err();
        assert!(err.is_bad_input());
    }
}
