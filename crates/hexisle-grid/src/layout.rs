//! Offset hex-to-Cartesian transform and island membership test.

use glam::Vec2;

use crate::AxialCoord;

/// Horizontal spacing between tile centers in a row.
///
/// Derived from a flat-top regular hexagon of circumradius 1 (width across
/// flats `sqrt(3) ≈ 1.732`) plus a small visual gap.
pub const H_SPACING: f32 = 1.77;

/// Vertical spacing between rows.
pub const V_SPACING: f32 = 1.535;

/// Maps tile addresses to planar world positions and tests whether a
/// position falls inside the circular island.
///
/// The returned positions are `(x, z)` pairs in the horizontal plane; the
/// vertical axis is owned by the mesh layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct HexLayout;

impl HexLayout {
    /// World position of a tile's center.
    ///
    /// Odd rows are shifted by half a horizontal step, producing the
    /// interlocking hex packing:
    /// `x = (i + (j mod 2) * 0.5) * H_SPACING`, `z = j * V_SPACING`.
    pub fn tile_to_world(&self, axial: AxialCoord) -> Vec2 {
        let row_shift = if axial.odd_row() { 0.5 } else { 0.0 };
        Vec2::new(
            (axial.i as f32 + row_shift) * H_SPACING,
            axial.j as f32 * V_SPACING,
        )
    }

    /// Returns `true` if `world` lies within the island boundary.
    ///
    /// The boundary is a circle of radius `island_radius + 1` around the
    /// origin; the extra unit keeps the outermost ring of tiles from being
    /// starved by radius rounding.
    pub fn inside_island(&self, world: Vec2, island_radius: f32) -> bool {
        world.length() <= island_radius + 1.0
    }
}

// Spacing must stay positive and the horizontal step must exceed the hexagon
// width across flats, or adjacent prisms would interpenetrate.
const _: () = assert!(H_SPACING > 1.732);
const _: () = assert!(V_SPACING > 0.0);

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_origin_maps_to_origin() {
        let p = HexLayout.tile_to_world(AxialCoord::new(0, 0));
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn test_even_row_has_no_shift() {
        let p = HexLayout.tile_to_world(AxialCoord::new(3, 2));
        assert!((p.x - 3.0 * H_SPACING).abs() < EPSILON);
        assert!((p.y - 2.0 * V_SPACING).abs() < EPSILON);
    }

    #[test]
    fn test_odd_row_shifts_half_a_step() {
        let p = HexLayout.tile_to_world(AxialCoord::new(3, 5));
        assert!((p.x - 3.5 * H_SPACING).abs() < EPSILON);
        assert!((p.y - 5.0 * V_SPACING).abs() < EPSILON);
    }

    #[test]
    fn test_negative_odd_row_shifts_like_positive() {
        let neg = HexLayout.tile_to_world(AxialCoord::new(0, -1));
        assert!((neg.x - 0.5 * H_SPACING).abs() < EPSILON);
        assert!((neg.y + V_SPACING).abs() < EPSILON);
    }

    #[test]
    fn test_tile_to_world_is_deterministic() {
        let layout = HexLayout;
        for i in -20..=20 {
            for j in -20..=20 {
                let a = layout.tile_to_world(AxialCoord::new(i, j));
                let b = layout.tile_to_world(AxialCoord::new(i, j));
                assert_eq!(a, b, "layout must be bit-identical for ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_boundary_is_inclusive_with_unit_pad() {
        let layout = HexLayout;
        assert!(layout.inside_island(Vec2::ZERO, 0.0));
        assert!(layout.inside_island(Vec2::new(16.0, 0.0), 15.0));
        assert!(!layout.inside_island(Vec2::new(16.001, 0.0), 15.0));
    }

    #[test]
    fn test_boundary_uses_euclidean_distance() {
        let layout = HexLayout;
        // 3-4-5 triangle: length 5 exactly.
        assert!(layout.inside_island(Vec2::new(3.0, 4.0), 4.0));
        assert!(!layout.inside_island(Vec2::new(3.1, 4.0), 4.0));
    }
}
