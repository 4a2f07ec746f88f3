//! docsift entry point.
//!
//! # Examples
//!
//! ```bash
//! # Segment a rendered site and write the artifact
//! docsift build ./public --output search-index.json
//!
//! # Segment and deploy to the remote index
//! docsift build ./public --deploy
//!
//! # Push a previously exported artifact
//! docsift deploy search-index.json --collection docs
//!
//! # Show the effective configuration
//! docsift show-config
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docsift::cli::{run, Cli};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docsift=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
