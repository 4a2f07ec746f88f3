//! Error types and error handling for the docsift build tool.
//!
//! This module defines the error types used throughout the
//! application. The segmentation core itself never fails; errors
//! exist only on the side channels (configuration, file export,
//! remote sync) and none of them abort a build.

use thiserror::Error;

/// Result type alias for docsift operations
pub type Result<T> = std::result::Result<T, DocsiftError>;

/// Main error type for the docsift build tool
#[derive(Error, Debug)]
pub enum DocsiftError {
    #[error("Invalid site path: {0}")]
    InvalidSitePath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Manifest error: {0}")]
    ManifestError(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Sync failed: {0}")]
    SyncFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl DocsiftError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error belongs to the sync side channel
    ///
    /// Sync errors are reported but never abort the build.
    pub fn is_sync_failure(&self) -> bool {
        matches!(
            self,
            DocsiftError::SyncFailed(_) | DocsiftError::HttpError(_)
        )
    }

    /// Check if this is a bad input error (invalid path or config)
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            DocsiftError::InvalidSitePath(_)
                | DocsiftError::ConfigError(_)
                | DocsiftError::ManifestError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_failed_is_sync_failure() {
        let err = DocsiftError::SyncFailed("connection refused".to_string());
        assert!(err.is_sync_failure());
        assert!(!err.is_bad_input());
    }

    #[test]
    fn test_config_error_is_bad_input() {
        let err = DocsiftError::ConfigError("missing collection".to_string());
        assert!(err.is_bad_input());
        assert!(!err.is_sync_failure());
    }

    #[test]
    fn test_invalid_site_path_is_bad_input() {
        let err = DocsiftError::InvalidSitePath("/does/not/exist".to_string());
        assert!(err.is_bad_input());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DocsiftError::from(io_err);
        assert!(!err.is_bad_input());
        assert!(!err.is_sync_failure());
    }

    #[test]
    fn test_error_message() {
        let err = DocsiftError::ExportFailed("disk full".to_string());
        assert!(err.message().contains("disk full"));
        assert!(err.message().contains("Export failed"));
    }
}
