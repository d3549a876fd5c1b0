//! Command-line argument parsing for the island generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Island generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "hexisle", about = "Hex island terrain generator")]
pub struct CliArgs {
    /// Island radius in tiles.
    #[arg(long)]
    pub size: Option<i32>,

    /// Maximum tile height.
    #[arg(long)]
    pub max_height: Option<f64>,

    /// Noise seed for a reproducible island.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Scatter RNG seed for reproducible decorations.
    #[arg(long)]
    pub scatter_seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(size) = args.size {
            self.terrain.island_size = size;
        }
        if let Some(max_height) = args.max_height {
            self.terrain.max_height = max_height;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = Some(seed);
        }
        if let Some(seed) = args.scatter_seed {
            self.decoration.seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
