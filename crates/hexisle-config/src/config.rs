//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level generation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain shape settings.
    pub terrain: TerrainConfig,
    /// Decoration scatter settings.
    pub decoration: DecorationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain shape configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Island radius in tiles.
    pub island_size: i32,
    /// Maximum tile height.
    pub max_height: f64,
    /// Grid-index-to-noise-coordinate scale.
    pub noise_frequency: f64,
    /// Height remap exponent; above 1 biases toward lowland.
    pub height_exponent: f64,
    /// Noise seed. Unset means a fresh island every run.
    pub seed: Option<u32>,
    /// Stone threshold as a fraction of max height.
    pub stone_level: f64,
    /// Upland dirt threshold.
    pub dirt2_level: f64,
    /// Grass threshold.
    pub grass_level: f64,
    /// Sand threshold; below it tiles classify as plain dirt.
    pub sand_level: f64,
    /// Reserved water line, used for the sea surface height.
    pub water_level: f64,
}

/// Decoration scatter configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecorationConfig {
    /// Gate value; a rock appears when the draw strictly exceeds it.
    pub gate: f64,
    /// Minimum rock radius (inclusive).
    pub radius_min: f64,
    /// Maximum rock radius (exclusive).
    pub radius_max: f64,
    /// Per-axis horizontal jitter upper bound (exclusive).
    pub jitter: f64,
    /// Scatter RNG seed. Unset draws from entropy.
    pub seed: Option<u64>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            island_size: 15,
            max_height: 10.0,
            noise_frequency: 0.1,
            height_exponent: 1.5,
            seed: None,
            stone_level: 0.8,
            dirt2_level: 0.7,
            grass_level: 0.5,
            sand_level: 0.3,
            water_level: 0.2,
        }
    }
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            gate: 0.8,
            radius_min: 0.1,
            radius_max: 0.4,
            jitter: 0.4,
            seed: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Loads config from the given directory, creating a default file if
    /// none exists yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
                path: config_path.clone(),
                source: e,
            })?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Saves config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| ConfigError::Io { path, source }
        };
        std::fs::create_dir_all(config_dir).map_err(io_err(config_dir))?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(io_err(&config_path))?;
        Ok(())
    }
}
