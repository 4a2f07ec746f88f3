//! Recursive walk over a page's parsed node tree.
//!
//! The walker visits element, text and comment nodes in document
//! order, accumulating inline text and cutting a new search document
//! at every emission boundary (a heading or block element, or the end
//! of the page). Heading nodes feed the [`HeadingStack`] instead of
//! the accumulator.

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::node::Node;

use crate::core::segmenter::hierarchy::HeadingStack;
use crate::core::segmenter::identity;
use crate::core::types::{Page, SearchDocument};

/// Whitespace-run normalizer for accumulated content.
///
/// Deliberately `[\s\n]+` and not a wider class: the derivation of
/// document content is a compatibility contract.
static CONTENT_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\n]+").expect("static regex"));

/// Whitespace-run normalizer for heading text
static HEADING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Role of an element tag in the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Role {
    /// h1-h6; flushes, then updates the heading stack
    Heading(usize),

    /// Container; flushes, then descends
    Block,

    /// Descends, accumulating text without a flush
    Inline,

    /// Neither text nor children are visited
    Ignored,
}

/// Classify an element tag into exactly one role
pub(super) fn classify(tag: &str) -> Role {
    match tag {
        "h1" => Role::Heading(1),
        "h2" => Role::Heading(2),
        "h3" => Role::Heading(3),
        "h4" => Role::Heading(4),
        "h5" => Role::Heading(5),
        "h6" => Role::Heading(6),
        tag if is_block_tag(tag) => Role::Block,
        tag if is_inline_tag(tag) => Role::Inline,
        _ => Role::Ignored,
    }
}

/// Sectioning, paragraph, list, table and form-control containers
fn is_block_tag(tag: &str) -> bool {
    matches!(
        tag,
        "address"
            | "article"
            | "aside"
            | "blockquote"
            | "button"
            | "caption"
            | "dd"
            | "details"
            | "dialog"
            | "div"
            | "dl"
            | "dt"
            | "fieldset"
            | "figcaption"
            | "figure"
            | "footer"
            | "form"
            | "header"
            | "hgroup"
            | "hr"
            | "label"
            | "legend"
            | "li"
            | "main"
            | "menu"
            | "nav"
            | "ol"
            | "optgroup"
            | "option"
            | "output"
            | "p"
            | "pre"
            | "section"
            | "select"
            | "summary"
            | "table"
            | "tbody"
            | "td"
            | "textarea"
            | "tfoot"
            | "th"
            | "thead"
            | "tr"
            | "ul"
    )
}

/// Phrasing content that contributes text to the current accumulator
fn is_inline_tag(tag: &str) -> bool {
    matches!(
        tag,
        "a" | "abbr"
            | "b"
            | "bdi"
            | "bdo"
            | "br"
            | "cite"
            | "code"
            | "data"
            | "del"
            | "dfn"
            | "em"
            | "i"
            | "ins"
            | "kbd"
            | "mark"
            | "q"
            | "rp"
            | "rt"
            | "ruby"
            | "s"
            | "samp"
            | "small"
            | "span"
            | "strong"
            | "sub"
            | "sup"
            | "time"
            | "u"
            | "var"
            | "wbr"
    )
}

/// Normalize heading text: collapse whitespace runs, trim ends
pub(super) fn normalize_heading(text: &str) -> String {
    HEADING_WS.replace_all(text, " ").trim().to_string()
}

/// Raw concatenated text of a node's subtree
fn collect_text(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        if let Node::Text(text) = descendant.value() {
            out.push_str(&text.text);
        }
    }
    out
}

/// Extract a heading's own text.
///
/// Themes wrap heading text in an `<a class="header-anchor">` link so
/// the heading can deep-link to itself. When that wrapper is the
/// heading's sole child, the text lives in the wrapper's first child;
/// descending there keeps the autogenerated link markup out of the
/// heading text.
pub(super) fn heading_text(node: NodeRef<'_, Node>) -> String {
    let significant: Vec<NodeRef<'_, Node>> = node
        .children()
        .filter(|child| match child.value() {
            Node::Text(text) => !text.text.trim().is_empty(),
            Node::Element(_) => true,
            _ => false,
        })
        .collect();

    if let [only] = significant.as_slice() {
        if let Node::Element(el) = only.value() {
            if el.name() == "a" && el.classes().any(|class| class == "header-anchor") {
                let inner = only.first_child().map(collect_text).unwrap_or_default();
                return normalize_heading(&inner);
            }
        }
    }

    normalize_heading(&collect_text(node))
}

/// Mutable walk state for one page.
///
/// All state is page-local; nothing is shared across pages.
pub(super) struct PageWalker<'a> {
    page: &'a Page,
    url: String,
    index_content: bool,
    stack: HeadingStack,
    buffer: String,
    docs: Vec<SearchDocument>,
    position: usize,
    truncated: bool,
}

impl<'a> PageWalker<'a> {
    pub(super) fn new(page: &'a Page, url: String, index_content: bool) -> Self {
        Self {
            url,
            index_content,
            stack: HeadingStack::new(&page.title),
            buffer: String::new(),
            docs: Vec::new(),
            position: 0,
            truncated: false,
            page,
        }
    }

    /// Whether flushed content is currently appended to the output
    fn indexing_active(&self) -> bool {
        self.index_content || (self.page.has_excerpt && !self.truncated)
    }

    /// Visit one node and its subtree
    pub(super) fn walk(&mut self, node: NodeRef<'_, Node>, in_pre: bool) {
        match node.value() {
            Node::Element(el) => {
                let tag = el.name();
                match classify(tag) {
                    Role::Heading(level) => {
                        self.flush();
                        let text = heading_text(node);
                        let anchor = el.attr("id").map(str::to_string);
                        self.stack.observe(level, text, anchor);
                    }
                    Role::Block => {
                        self.flush();
                        let preserve = in_pre || tag == "pre";
                        for child in node.children() {
                            self.walk(child, preserve);
                        }
                    }
                    Role::Inline => {
                        for child in node.children() {
                            self.walk(child, in_pre);
                        }
                    }
                    Role::Ignored => {}
                }
            }
            Node::Text(text) => self.append_text(&text.text, in_pre),
            Node::Comment(comment) => self.observe_comment(&comment.comment),
            _ => {}
        }
    }

    /// Append text-node data to the accumulator.
    ///
    /// Outside a preserve context, whitespace-only runs contribute
    /// nothing and interior runs collapse to single spaces; inside
    /// one (a `pre` subtree) the data is kept verbatim.
    fn append_text(&mut self, data: &str, in_pre: bool) {
        if in_pre {
            self.buffer.push_str(data);
            return;
        }

        if data.trim().is_empty() {
            return;
        }

        let collapsed = CONTENT_WS.replace_all(data, " ");
        if self.buffer.ends_with(' ') && collapsed.starts_with(' ') {
            self.buffer.push_str(collapsed.trim_start_matches(' '));
        } else {
            self.buffer.push_str(&collapsed);
        }
    }

    /// React to a comment node.
    ///
    /// The first `<!-- more -->` marker on an excerpted page flushes
    /// what has accumulated and stops all further emission. Nodes
    /// after the marker are still walked for heading bookkeeping.
    fn observe_comment(&mut self, data: &str) {
        if self.index_content || !self.page.has_excerpt || self.truncated {
            return;
        }

        if data.trim() == "more" {
            self.flush();
            self.truncated = true;
        }
    }

    /// Emission boundary: finalize the accumulator into a document.
    ///
    /// The accumulator is cleared unconditionally; the document is
    /// appended (and `position` advanced) only while indexing is
    /// active. Empty content is appended too; filtering happens in
    /// post-processing.
    pub(super) fn flush(&mut self) {
        let content = self.buffer.trim().to_string();
        self.buffer.clear();

        if !self.indexing_active() {
            return;
        }

        let snapshot = self.stack.snapshot();
        let [lvl0, lvl1, lvl2, lvl3, lvl4, lvl5, lvl6] = snapshot.titles;

        self.docs.push(SearchDocument {
            content,
            url: self.url.clone(),
            object_id: identity::object_id(&self.url, snapshot.anchor.as_deref(), self.position),
            anchor: snapshot.anchor,
            hierarchy_radio_lvl0: lvl0.clone(),
            hierarchy_radio_lvl1: lvl1.clone(),
            hierarchy_radio_lvl2: lvl2.clone(),
            hierarchy_radio_lvl3: lvl3.clone(),
            hierarchy_radio_lvl4: lvl4.clone(),
            hierarchy_radio_lvl5: lvl5.clone(),
            hierarchy_lvl0: lvl0,
            hierarchy_lvl1: lvl1,
            hierarchy_lvl2: lvl2,
            hierarchy_lvl3: lvl3,
            hierarchy_lvl4: lvl4,
            hierarchy_lvl5: lvl5,
            hierarchy_lvl6: lvl6,
            lang: self.page.lang.clone(),
            level: snapshot.level as u8,
            position: self.position,
            page_rank: self.page.frontmatter.page_rank,
        });
        self.position += 1;
    }

    /// Final flush, then hand back everything emitted
    pub(super) fn into_documents(mut self) -> Vec<SearchDocument> {
        self.flush();
        self.docs
    }
}
