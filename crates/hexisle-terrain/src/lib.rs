//! Island terrain synthesis: noise-driven heights, biome classification,
//! per-tile prism geometry, and per-biome mesh batching.
//!
//! One call to [`IslandGenerator::generate`] runs the whole pipeline —
//! grid traversal, noise sampling, height remap, classification, tile and
//! decoration meshing, batching — and returns the finished per-biome
//! batches for the render layer to skin and draw.

mod batch;
mod biome;
mod error;
mod generator;
mod noise_field;
mod scatter;
mod scenery;

pub use batch::{BatchStats, BiomeBatcher, IslandBatches};
pub use biome::{Biome, BiomeClassifier, BiomeThresholds};
pub use error::TerrainError;
pub use generator::{IslandGenerator, IslandParams};
pub use noise_field::NoiseField;
pub use scatter::{ConstSource, DecorationScatter, RandomSource, ScatterParams};
pub use scenery::{container_wall, floor_slab, sea_surface};
