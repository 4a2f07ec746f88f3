//! Stable document identities.
//!
//! Each emitted search document gets a SHA-1 hex identifier derived
//! from its (url, anchor, position) tuple. The remote store uses the
//! identifier as the join key for incremental updates, so the
//! derivation is a compatibility contract: the same tuple must hash
//! identically across builds and across implementations.

use sha1::{Digest, Sha1};

/// Derive the identity hash for one search document.
///
/// With an anchor the input is `{url}#{anchor}-{position}`; without
/// one it is the bare url, and `position` does not participate. Two
/// anchorless emissions of the same url would therefore collide,
/// a known limitation of the derivation, kept as-is.
pub fn object_id(url: &str, anchor: Option<&str>, position: usize) -> String {
    let input = match anchor {
        Some(anchor) => format!("{url}#{anchor}-{position}"),
        None => url.to_string(),
    };
    let digest = Sha1::digest(input.as_bytes());
    format!("{digest:x}")
}
