//! Terrain generation error types.

use hexisle_mesh::MeshError;

/// Errors that abort a generation pass.
///
/// There is no partial-terrain recovery: the caller gets either a complete
/// set of batches or one of these.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// A tile or decoration mesh could not be built.
    #[error("failed to build tile geometry: {0}")]
    Mesh(#[from] MeshError),
}
