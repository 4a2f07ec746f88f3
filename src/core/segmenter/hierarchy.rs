//! Heading hierarchy tracking during a page walk.
//!
//! Maintains the stack of heading frames that are "open" at the
//! current point of a page traversal. Levels run 0..=6: level 0 is a
//! synthetic frame seeded from the page title, levels 1-6 correspond
//! to `h1`-`h6`. At most one frame is active per level, so the whole
//! stack fits a fixed seven-slot array.

/// One active heading frame
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingFrame {
    /// Heading depth, 0..=6
    pub level: usize,

    /// Normalized heading text
    pub text: String,

    /// The heading's `id` attribute, if present
    pub anchor: Option<String>,
}

/// Per-level snapshot of the active heading state.
///
/// Captured at each emission boundary to populate a search document.
#[derive(Debug, Clone)]
pub struct HierarchySnapshot {
    /// Heading text per level; `None` where no frame is active
    pub titles: [Option<String>; 7],

    /// Deepest active level
    pub level: usize,

    /// Anchor of the deepest active frame that has one
    pub anchor: Option<String>,
}

/// Stack of active heading frames
#[derive(Debug, Clone)]
pub struct HeadingStack {
    frames: [Option<HeadingFrame>; 7],
}

impl HeadingStack {
    /// Create a stack seeded with a level-0 frame for the page title
    pub fn new(page_title: &str) -> Self {
        let mut frames: [Option<HeadingFrame>; 7] = Default::default();
        frames[0] = Some(HeadingFrame {
            level: 0,
            text: page_title.to_string(),
            anchor: None,
        });
        Self { frames }
    }

    /// Record a heading observed during traversal.
    ///
    /// A new frame at level L closes every open frame at depth >= L:
    /// a fresh `h2` evicts a prior `h2` and any deeper `h3`-`h6`,
    /// while frames above it stay untouched. Levels outside 0..=6
    /// are ignored.
    pub fn observe(&mut self, level: usize, text: String, anchor: Option<String>) {
        if level >= self.frames.len() {
            return;
        }

        for slot in self.frames.iter_mut().skip(level) {
            *slot = None;
        }

        self.frames[level] = Some(HeadingFrame {
            level,
            text,
            anchor,
        });
    }

    /// Deepest level with an active frame
    pub fn level(&self) -> usize {
        self.frames
            .iter()
            .rposition(|f| f.is_some())
            .unwrap_or(0)
    }

    /// Active levels, shallowest first (used by tests)
    #[allow(dead_code)]
    pub fn active_levels(&self) -> Vec<usize> {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.as_ref().map(|_| i))
            .collect()
    }

    /// Capture the current heading state for a document emission
    pub fn snapshot(&self) -> HierarchySnapshot {
        let mut titles: [Option<String>; 7] = Default::default();
        for (slot, frame) in titles.iter_mut().zip(self.frames.iter()) {
            *slot = frame.as_ref().map(|f| f.text.clone());
        }

        let anchor = self
            .frames
            .iter()
            .rev()
            .flatten()
            .find_map(|f| f.anchor.clone());

        HierarchySnapshot {
            titles,
            level: self.level(),
            anchor,
        }
    }
}
