//! Mesh construction error types.

/// Errors that can occur when building tile geometry.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// The requested extrusion height is not a finite non-negative number.
    ///
    /// Degenerate geometry is never produced; the caller aborts instead.
    #[error("invalid tile height {0}: must be finite and non-negative")]
    InvalidHeight(f32),
}
