//! UV sphere builder for decoration rocks.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::MeshData;

/// Builds a UV sphere of the given radius centered at the origin.
///
/// `segments` is the longitudinal resolution, `rings` the latitudinal one;
/// decoration rocks use 7×7, coarse enough to read as low-poly rubble.
/// Normals are radial; uvs are the usual latitude/longitude projection with
/// a duplicated seam column.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    debug_assert!(segments >= 3 && rings >= 2);
    debug_assert!(radius > 0.0);

    let segs = segments as usize;
    let lats = rings as usize;
    let mut mesh = MeshData::with_capacity((segs + 1) * (lats + 1), 2 * segs * (lats - 1));

    for ring in 0..=lats {
        let theta = ring as f32 / lats as f32 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        for seg in 0..=segs {
            let phi = seg as f32 / segs as f32 * TAU;
            let normal = Vec3::new(sin_t * phi.cos(), cos_t, sin_t * phi.sin());
            mesh.push_vertex(
                normal * radius,
                normal,
                [seg as f32 / segs as f32, ring as f32 / lats as f32],
            );
        }
    }

    let stride = (segs + 1) as u32;
    for ring in 0..lats as u32 {
        for seg in 0..segs as u32 {
            let a = ring * stride + seg;
            let b = (ring + 1) * stride + seg;
            let c = (ring + 1) * stride + seg + 1;
            let d = ring * stride + seg + 1;

            // Pole rows collapse one triangle of each quad.
            if ring != 0 {
                mesh.push_triangle(a, c, d);
            }
            if ring != lats as u32 - 1 {
                mesh.push_triangle(a, b, c);
            }
        }
    }

    mesh
}
