//! Flat-shaded n-sided prism builders.
//!
//! The hex tile is the 6-segment case; the sea surface, container wall, and
//! floor slab around the island use higher segment counts of the same shape.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::{MeshData, MeshError};

/// Circumradius of a terrain tile's hexagonal cross-section.
pub const TILE_RADIUS: f32 = 1.0;

const TILE_SEGMENTS: u32 = 6;

/// Builds the solid hexagonal prism for one terrain tile.
///
/// The prism has circumradius [`TILE_RADIUS`], extends from `y = 0` to
/// `y = height`, and is centered at `world` in the horizontal plane
/// (`world.y` maps to the z axis). Hard-edged faceted shading; no bevel.
///
/// # Errors
///
/// Returns [`MeshError::InvalidHeight`] if `height` is not finite or is
/// negative.
pub fn hex_prism(height: f32, world: Vec2) -> Result<MeshData, MeshError> {
    if !height.is_finite() || height < 0.0 {
        return Err(MeshError::InvalidHeight(height));
    }

    let mut mesh = prism(TILE_RADIUS, height, TILE_SEGMENTS, true);
    mesh.translate(Vec3::new(world.x, 0.0, world.y));
    Ok(mesh)
}

/// Builds a flat-shaded regular prism of `segments` sides.
///
/// The cross-section has circumradius `radius` with its first vertex on the
/// +x axis; the solid extends from `y = 0` to `y = height` around the origin.
/// With `caps` set, both ends are closed by triangle fans; without, only the
/// side wall is emitted (an open tube, used for the island container).
///
/// Vertices are duplicated per face so each face carries its own normal;
/// side uvs wrap once around the perimeter, cap uvs project the cross-section
/// into the unit square.
pub fn prism(radius: f32, height: f32, segments: u32, caps: bool) -> MeshData {
    debug_assert!(segments >= 3);
    debug_assert!(radius > 0.0 && height.is_finite());

    let n = segments as usize;
    let side_vertices = n * 4;
    let cap_vertices = if caps { 2 * (n + 1) } else { 0 };
    let side_triangles = n * 2;
    let cap_triangles = if caps { 2 * n } else { 0 };
    let mut mesh = MeshData::with_capacity(
        side_vertices + cap_vertices,
        side_triangles + cap_triangles,
    );

    let ring: Vec<Vec2> = (0..=n)
        .map(|k| {
            let angle = k as f32 / n as f32 * TAU;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();

    // Side wall: one independent quad per segment, flat outward normal.
    for k in 0..n {
        let a = ring[k];
        let b = ring[k + 1];
        let normal = ((a + b) * 0.5).normalize();
        let normal = Vec3::new(normal.x, 0.0, normal.y);
        let u0 = k as f32 / n as f32;
        let u1 = (k + 1) as f32 / n as f32;

        let bl = mesh.push_vertex(Vec3::new(a.x, 0.0, a.y), normal, [u0, 0.0]);
        let br = mesh.push_vertex(Vec3::new(b.x, 0.0, b.y), normal, [u1, 0.0]);
        let tr = mesh.push_vertex(Vec3::new(b.x, height, b.y), normal, [u1, 1.0]);
        let tl = mesh.push_vertex(Vec3::new(a.x, height, a.y), normal, [u0, 1.0]);

        mesh.push_triangle(bl, br, tr);
        mesh.push_triangle(bl, tr, tl);
    }

    if caps {
        cap_fan(&mut mesh, &ring, radius, height, Vec3::Y);
        cap_fan(&mut mesh, &ring, radius, 0.0, Vec3::NEG_Y);
    }

    mesh
}

/// Emits one end cap as a triangle fan around a center vertex.
fn cap_fan(mesh: &mut MeshData, ring: &[Vec2], radius: f32, y: f32, normal: Vec3) {
    let cap_uv = |p: Vec2| [(p.x / radius + 1.0) * 0.5, (p.y / radius + 1.0) * 0.5];
    let n = ring.len() - 1;

    let center = mesh.push_vertex(Vec3::new(0.0, y, 0.0), normal, [0.5, 0.5]);
    let first = mesh.push_vertex(Vec3::new(ring[0].x, y, ring[0].y), normal, cap_uv(ring[0]));

    let mut prev = first;
    for point in &ring[1..n] {
        let next = mesh.push_vertex(Vec3::new(point.x, y, point.y), normal, cap_uv(*point));
        if normal.y > 0.0 {
            mesh.push_triangle(center, next, prev);
        } else {
            mesh.push_triangle(center, prev, next);
        }
        prev = next;
    }
    if normal.y > 0.0 {
        mesh.push_triangle(center, first, prev);
    } else {
        mesh.push_triangle(center, prev, first);
    }
}
