//! CLI command implementations
//!
//! Each command lives in its own module with its own Args struct.

pub mod build;
pub mod completions;
pub mod config;
pub mod deploy;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use deploy::DeployArgs;
