//! Build command - segment a rendered site into search documents

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::export;
use crate::core::pipeline::BuildPipeline;
use crate::core::site::manifest::Manifest;
use crate::core::sync::{SyncEngine, SyncOutcome};

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the site generator's rendered output
    pub site_dir: PathBuf,

    /// Page metadata manifest (defaults to <site-dir>/pages.json when present)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Prefix for every document url
    #[arg(long)]
    pub base_url: Option<String>,

    /// Index full page content instead of stopping at excerpt markers
    #[arg(long)]
    pub index_content: bool,

    /// Write the aggregate document array to this file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Deploy the documents to the configured remote index
    #[arg(long)]
    pub deploy: bool,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// CSS selector for the indexable content root
    #[arg(long)]
    pub selector: Option<String>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub site: String,
    pub pages_seen: usize,
    pub pages_indexed: usize,
    pub pages_skipped: usize,
    pub documents: usize,
    pub duration_secs: f64,
    pub output_file: Option<String>,
    pub sync: Option<SyncOutcome>,
}

/// Execute the build command
pub async fn execute(
    args: BuildArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate site path
    let site_dir = args.site_dir.canonicalize().map_err(|e| {
        format!(
            "Invalid site path '{}': {}. Make sure the site has been rendered first.",
            args.site_dir.display(),
            e
        )
    })?;

    if !site_dir.is_dir() {
        return Err(format!(
            "Path '{}' is not a directory. Point docsift at the rendered output directory.",
            site_dir.display()
        )
        .into());
    }

    // Merge argument overrides into the configuration
    if let Some(base_url) = args.base_url {
        config.site.base_url = base_url;
    }
    if args.index_content {
        config.indexing.index_content = true;
    }
    if let Some(selector) = args.selector {
        config.site.content_selector = selector;
    }

    let include_patterns = if args.include.is_empty() {
        config.site.include_patterns.clone()
    } else {
        args.include
    };
    let exclude_patterns = if args.exclude.is_empty() {
        config.site.exclude_patterns.clone()
    } else {
        args.exclude
    };

    // Locate the page metadata manifest
    let manifest = match args.manifest {
        Some(path) => Manifest::load(&path)?,
        None => {
            let default_path = site_dir.join("pages.json");
            if default_path.exists() {
                Manifest::load(&default_path)?
            } else {
                Manifest::empty()
            }
        }
    };

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Segmenting {}...",
            colors::path(&site_dir.display().to_string())
        );
    }

    // Segment the site
    let pipeline = BuildPipeline::new(
        include_patterns,
        exclude_patterns,
        &config.site.content_selector,
        &config.site.default_lang,
        manifest,
        config.site.base_url.clone(),
        config.indexing.index_content,
    )?;
    let (documents, stats) = pipeline.build(&site_dir)?;

    // Side channel 1: file artifact
    let output_path = args.output.or_else(|| config.output.file.clone());
    let output_file = match &output_path {
        Some(path) => match export::write_documents(path, &documents) {
            Ok(()) => Some(path.display().to_string()),
            Err(e) => {
                print_warning(&e.to_string());
                None
            }
        },
        None => None,
    };

    // Side channel 2: remote deployment
    let sync = if args.deploy {
        match config.sync_target() {
            Ok(target) => Some(SyncEngine::sync(&documents, &target).await),
            Err(e) => {
                print_warning(&e.to_string());
                Some(SyncOutcome::Failed {
                    reason: e.to_string(),
                })
            }
        }
    } else {
        None
    };

    let response = BuildResponse {
        site: site_dir.to_string_lossy().into_owned(),
        pages_seen: stats.pages_seen,
        pages_indexed: stats.pages_indexed,
        pages_skipped: stats.pages_skipped,
        documents: documents.len(),
        duration_secs: stats.duration_ms as f64 / 1000.0,
        output_file,
        sync,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} pages ({} documents) in {}",
                colors::success("Segmented"),
                colors::number(&response.pages_indexed.to_string()),
                colors::number(&response.documents.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            if response.pages_skipped > 0 {
                println!(
                    "Skipped {} pages",
                    colors::number(&response.pages_skipped.to_string())
                );
            }
            if let Some(file) = &response.output_file {
                println!("Wrote {}", colors::path(file));
            }
            match &response.sync {
                Some(SyncOutcome::Completed { documents, mode }) => {
                    println!(
                        "{} {} documents ({} mode)",
                        colors::success("Deployed"),
                        colors::number(&documents.to_string()),
                        mode
                    );
                }
                Some(SyncOutcome::Failed { reason }) => {
                    println!("{} {}", colors::error("Deploy failed:"), reason);
                }
                None => {}
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
