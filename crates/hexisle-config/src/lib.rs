//! Configuration for island generation.
//!
//! Settings persist to disk as RON files with forward-compatible defaults,
//! and CLI flags override individual values via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, DecorationConfig, TerrainConfig};
pub use error::ConfigError;
