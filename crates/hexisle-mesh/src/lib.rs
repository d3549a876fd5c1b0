//! CPU-side mesh construction for the island terrain.
//!
//! Provides the growable vertex/index buffer ([`MeshData`]) that all terrain
//! geometry accumulates into, plus the primitive builders the island is made
//! of: flat-shaded n-sided prisms for tiles and scenery, and UV spheres for
//! decoration rocks. No GPU types appear here; uploading and material binding
//! belong to the render layer.

mod error;
mod mesh_data;
mod prism;
mod sphere;

pub use error::MeshError;
pub use mesh_data::{MeshData, MeshVertex};
pub use prism::{hex_prism, prism};
pub use sphere::uv_sphere;
