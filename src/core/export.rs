//! File export of the aggregate document set.
//!
//! Writes the full document array as pretty-printed JSON. Like sync,
//! this is a best-effort side channel: callers report a failure and
//! carry on.

use std::fs;
use std::path::Path;

use crate::core::error::{DocsiftError, Result};
use crate::core::types::SearchDocument;

/// Write the document set to `path`, creating parent directories as
/// needed.
pub fn write_documents(path: &Path, documents: &[SearchDocument]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                DocsiftError::ExportFailed(format!(
                    "Failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let json = serde_json::to_string_pretty(documents)?;
    fs::write(path, json)
        .map_err(|e| DocsiftError::ExportFailed(format!("Failed to write {}: {e}", path.display())))
}
