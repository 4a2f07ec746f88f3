//! Core domain logic (adapter-agnostic).
//!
//! Everything under here is usable without the CLI: segmentation,
//! site access, sync, export, configuration and the shared error and
//! data types.

pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod segmenter;
pub mod site;
pub mod sync;
pub mod types;
