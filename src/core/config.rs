//! Configuration management for the docsift build tool.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{DocsiftError, Result};
use crate::core::sync::{SyncMode, SyncTarget};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub deploy: DeployConfig,
}

/// Site enumeration configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Prefix for every document url (e.g. "https://docs.example.com")
    #[serde(default)]
    pub base_url: String,

    /// Language assumed for pages that declare none
    #[serde(default = "default_lang")]
    pub default_lang: String,

    /// CSS selector locating the indexable content root
    #[serde(default = "default_content_selector")]
    pub content_selector: String,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Segmentation configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Index full page content instead of stopping at excerpts
    #[serde(default)]
    pub index_content: bool,
}

/// File artifact configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where to write the aggregate document array, if anywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Remote deployment configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeployConfig {
    /// Base URL of the remote search service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Api key; prefer the DOCSIFT_API_KEY environment variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Collection (index) identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    /// Replacement strategy
    #[serde(default = "default_mode")]
    pub mode: SyncMode,
}

// Default value functions
fn default_lang() -> String {
    "en".to_string()
}

fn default_content_selector() -> String {
    "main".to_string()
}

fn default_include_patterns() -> Vec<String> {
    vec!["**/*.html".to_string()]
}

fn default_mode() -> SyncMode {
    SyncMode::Full
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            default_lang: default_lang(),
            content_selector: default_content_selector(),
            include_patterns: default_include_patterns(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            collection: None,
            mode: default_mode(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsiftError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults.
    ///
    /// File lookup order:
    /// 1. DOCSIFT_CONFIG env var
    /// 2. ./docsift.toml
    /// 3. XDG config file (~/.config/docsift/config.toml)
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCSIFT_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("docsift.toml").exists() {
            Self::from_file("docsift.toml")?
        } else {
            match xdg_config_file() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Self::default(),
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(base_url) = env::var("DOCSIFT_BASE_URL") {
            self.site.base_url = base_url;
        }
        if let Ok(index_content) = env::var("DOCSIFT_INDEX_CONTENT") {
            self.indexing.index_content =
                index_content == "1" || index_content.eq_ignore_ascii_case("true");
        }
        if let Ok(endpoint) = env::var("DOCSIFT_ENDPOINT") {
            self.deploy.endpoint = Some(endpoint);
        }
        if let Ok(collection) = env::var("DOCSIFT_COLLECTION") {
            self.deploy.collection = Some(collection);
        }
        if let Ok(output) = env::var("DOCSIFT_OUTPUT") {
            self.output.file = Some(PathBuf::from(output));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.site.default_lang.is_empty() {
            return Err(DocsiftError::ConfigError(
                "Default language must not be empty".to_string(),
            ));
        }

        if self.site.content_selector.trim().is_empty() {
            return Err(DocsiftError::ConfigError(
                "Content selector must not be empty".to_string(),
            ));
        }

        if let Some(endpoint) = &self.deploy.endpoint {
            if endpoint.is_empty() {
                return Err(DocsiftError::ConfigError(
                    "Deploy endpoint must not be empty".to_string(),
                ));
            }
            match &self.deploy.collection {
                Some(collection) if !collection.is_empty() => {}
                _ => {
                    return Err(DocsiftError::ConfigError(
                        "Deploy endpoint configured without a collection".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Build the sync target from the deploy section.
    ///
    /// Fails when the endpoint or collection is missing; credential
    /// resolution happens later, inside the sync engine.
    pub fn sync_target(&self) -> Result<SyncTarget> {
        let endpoint = self
            .deploy
            .endpoint
            .clone()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                DocsiftError::ConfigError("No deploy endpoint configured".to_string())
            })?;

        let collection = self
            .deploy
            .collection
            .clone()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                DocsiftError::ConfigError("No deploy collection configured".to_string())
            })?;

        Ok(SyncTarget {
            endpoint,
            api_key: self.deploy.api_key.clone(),
            collection,
            mode: self.deploy.mode,
        })
    }

    /// Log the effective configuration at startup
    pub fn log_config(&self) {
        tracing::info!("Base url: {:?}", self.site.base_url);
        tracing::info!("Content selector: {}", self.site.content_selector);
        tracing::info!("Index full content: {}", self.indexing.index_content);
        if let Some(endpoint) = &self.deploy.endpoint {
            tracing::info!(
                "Deploy target: {} / {:?} ({} mode)",
                endpoint,
                self.deploy.collection,
                self.deploy.mode
            );
        }
    }
}

fn xdg_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docsift").join("config.toml"))
}
