//! Scenery surfaces framing the island: the sea, its container wall, and
//! the floor slab underneath.
//!
//! These are plain geometry like everything else here; the render layer owns
//! the translucent water material and texture binding.

use glam::Vec3;
use hexisle_mesh::{MeshData, prism};

/// Radial resolution of the circular scenery surfaces.
const SCENERY_SEGMENTS: u32 = 50;

/// Sea radius overhang beyond the island tile radius.
const SEA_MARGIN: f32 = 2.0;

/// The wall and floor sit just outside the sea surface.
const CONTAINER_MARGIN: f32 = 2.1;

/// The translucent sea disc around the island.
///
/// Reaches from the floor up to the water line at `0.2 * max_height`, the
/// reserved water threshold.
pub fn sea_surface(island_size: f32, max_height: f32) -> MeshData {
    prism(
        island_size + SEA_MARGIN,
        max_height * 0.2,
        SCENERY_SEGMENTS,
        true,
    )
}

/// The open-ended rim wall holding the sea in.
pub fn container_wall(island_size: f32, max_height: f32) -> MeshData {
    prism(
        island_size + CONTAINER_MARGIN,
        max_height * 0.2,
        SCENERY_SEGMENTS,
        false,
    )
}

/// The solid slab under the island, hanging below `y = 0`.
pub fn floor_slab(island_size: f32, max_height: f32) -> MeshData {
    let height = max_height * 0.1;
    let mut slab = prism(island_size + CONTAINER_MARGIN, height, SCENERY_SEGMENTS, true);
    slab.translate(Vec3::new(0.0, -height, 0.0));
    slab
}
