//! Deploy command - push an exported artifact to the remote index

use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::sync::{SyncEngine, SyncMode, SyncOutcome};
use crate::core::types::SearchDocument;

/// Arguments for the deploy command
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Path to a document artifact produced by `docsift build --output`
    pub documents: PathBuf,

    /// Base URL of the remote search service
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Collection (index) identifier
    #[arg(long)]
    pub collection: Option<String>,

    /// Api key for the remote service
    #[arg(long, env = "DOCSIFT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Replacement strategy
    #[arg(long, value_enum)]
    pub mode: Option<SyncMode>,
}

/// Deploy result response
#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub artifact: String,
    pub documents: usize,
    pub collection: String,
    pub sync: SyncOutcome,
}

/// Execute the deploy command.
///
/// Unlike `build --deploy`, a failed push here is the command's
/// whole job, so it exits non-zero.
pub async fn execute(
    args: DeployArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(&args.documents).map_err(|e| {
        format!(
            "Failed to read artifact '{}': {}",
            args.documents.display(),
            e
        )
    })?;

    let documents: Vec<SearchDocument> = serde_json::from_str(&contents).map_err(|e| {
        format!(
            "Artifact '{}' is not a document array: {}",
            args.documents.display(),
            e
        )
    })?;

    // Merge argument overrides into the configuration
    if let Some(endpoint) = args.endpoint {
        config.deploy.endpoint = Some(endpoint);
    }
    if let Some(collection) = args.collection {
        config.deploy.collection = Some(collection);
    }
    if let Some(api_key) = args.api_key {
        config.deploy.api_key = Some(api_key);
    }
    if let Some(mode) = args.mode {
        config.deploy.mode = mode;
    }

    let target = config.sync_target()?;
    let outcome = SyncEngine::sync(&documents, &target).await;

    let response = DeployResponse {
        artifact: args.documents.display().to_string(),
        documents: documents.len(),
        collection: target.collection.clone(),
        sync: outcome,
    };

    match format {
        OutputFormat::Human => match &response.sync {
            SyncOutcome::Completed { documents, mode } => {
                println!(
                    "{} {} documents to '{}' ({} mode)",
                    colors::success("Deployed"),
                    colors::number(&documents.to_string()),
                    colors::collection(&response.collection),
                    mode
                );
            }
            SyncOutcome::Failed { reason } => {
                return Err(format!("Deploy failed: {reason}").into());
            }
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            if let SyncOutcome::Failed { .. } = response.sync {
                return Err("Deploy failed".into());
            }
        }
    }

    Ok(())
}
