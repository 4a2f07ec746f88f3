//! CLI adapter for docsift
//!
//! Provides the command-line interface over the core build and sync
//! capabilities. Nothing in `core/` depends on this module.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// docsift - search documents from rendered documentation sites
///
/// Segments a site generator's rendered HTML into heading-anchored
/// search documents and keeps a remote search index in sync with
/// them.
#[derive(Parser, Debug)]
#[command(name = "docsift")]
#[command(version)]
#[command(about = "Documentation site search indexer", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Segment a rendered site into search documents
    Build(commands::BuildArgs),

    /// Push a previously exported document artifact to the remote index
    Deploy(commands::DeployArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docsift completions bash > ~/.local/share/bash-completion/completions/docsift
    ///   zsh:   docsift completions zsh > ~/.zfunc/_docsift
    ///   fish:  docsift completions fish > ~/.config/fish/completions/docsift.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let config = Config::load()?;

    // Execute command
    match cli.command {
        Commands::Build(args) => commands::build::execute(args, config, cli.format).await,
        Commands::Deploy(args) => commands::deploy::execute(args, config, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
