//! Stochastic decoration scatter: small rock spheres on stone and sand tiles.

use glam::{Vec2, Vec3};
use hexisle_mesh::{MeshData, uv_sphere};

use crate::Biome;

/// Injectable source of uniform randomness for decoration gating.
///
/// A single operation keeps the capability swappable: production passes a
/// seeded or entropy-backed RNG, tests pass [`ConstSource`] to force the
/// gate one way or the other.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

/// A source that returns the same value forever. Test and replay helper.
#[derive(Clone, Copy, Debug)]
pub struct ConstSource(pub f64);

impl RandomSource for ConstSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Tuning knobs for decoration scatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterParams {
    /// A decoration triggers when the drawn value strictly exceeds this.
    /// 0.8 gives roughly one rock per five qualifying tiles.
    pub gate: f64,
    /// Inclusive lower bound of the rock radius.
    pub radius_min: f64,
    /// Exclusive upper bound of the rock radius.
    pub radius_max: f64,
    /// Horizontal jitter is drawn from `[0, jitter)` per planar axis.
    pub jitter: f64,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            gate: 0.8,
            radius_min: 0.1,
            radius_max: 0.4,
            jitter: 0.4,
        }
    }
}

/// Longitudinal/latitudinal resolution of a rock sphere.
const ROCK_SEGMENTS: u32 = 7;

/// Produces decoration rocks for qualifying tiles.
///
/// Only stone and sand tiles are eligible. The produced geometry is always
/// destined for the **stone** batch, even when the triggering tile is sand,
/// so rocks read as stone-colored regardless of the ground under them.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecorationScatter {
    params: ScatterParams,
}

impl DecorationScatter {
    /// Creates a scatter component with the given tuning.
    pub fn new(params: ScatterParams) -> Self {
        Self { params }
    }

    /// Rolls the gate for one tile and, on trigger, builds its rock.
    ///
    /// Draws nothing from `rng` for ineligible biomes. On trigger, the rock
    /// sits on the tile's top surface at `height`, offset by independent
    /// horizontal jitter.
    pub fn maybe_scatter(
        &self,
        biome: Biome,
        height: f32,
        world: Vec2,
        rng: &mut dyn RandomSource,
    ) -> Option<MeshData> {
        if !matches!(biome, Biome::Stone | Biome::Sand) {
            return None;
        }
        if rng.next_unit() <= self.params.gate {
            return None;
        }

        let p = &self.params;
        let jitter_x = rng.next_unit() * p.jitter;
        let jitter_z = rng.next_unit() * p.jitter;
        let radius = p.radius_min + rng.next_unit() * (p.radius_max - p.radius_min);

        let mut rock = uv_sphere(radius as f32, ROCK_SEGMENTS, ROCK_SEGMENTS);
        rock.translate(Vec3::new(
            world.x + jitter_x as f32,
            height,
            world.y + jitter_z as f32,
        ));
        Some(rock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ineligible_biomes_draw_nothing() {
        let scatter = DecorationScatter::default();
        // A source that panics when drawn from.
        struct Panicking;
        impl RandomSource for Panicking {
            fn next_unit(&mut self) -> f64 {
                panic!("ineligible biome must not consume randomness");
            }
        }
        for biome in [Biome::Dirt, Biome::Dirt2, Biome::Grass, Biome::Water] {
            assert!(
                scatter
                    .maybe_scatter(biome, 5.0, Vec2::ZERO, &mut Panicking)
                    .is_none()
            );
        }
    }

    #[test]
    fn test_gate_is_strict() {
        let scatter = DecorationScatter::default();
        assert!(
            scatter
                .maybe_scatter(Biome::Stone, 5.0, Vec2::ZERO, &mut ConstSource(0.8))
                .is_none()
        );
        assert!(
            scatter
                .maybe_scatter(Biome::Stone, 5.0, Vec2::ZERO, &mut ConstSource(0.81))
                .is_some()
        );
    }

    #[test]
    fn test_sand_tiles_also_trigger() {
        let scatter = DecorationScatter::default();
        assert!(
            scatter
                .maybe_scatter(Biome::Sand, 3.0, Vec2::ZERO, &mut ConstSource(0.9))
                .is_some()
        );
    }

    #[test]
    fn test_rock_sits_on_the_tile_top() {
        let scatter = DecorationScatter::default();
        let height = 4.0;
        let world = Vec2::new(2.0, -3.0);
        let rock = scatter
            .maybe_scatter(Biome::Stone, height, world, &mut ConstSource(0.9))
            .unwrap();

        // With a constant source, radius = 0.1 + 0.9 * 0.3 and the center is
        // at height plus jitter on x/z.
        let radius = 0.1 + 0.9 * 0.3;
        for vertex in &rock.vertices {
            assert!((vertex.position[1] - height as f32).abs() <= radius as f32 + 1e-5);
        }
    }

    #[test]
    fn test_rock_jitter_stays_in_range() {
        let scatter = DecorationScatter::default();
        let mut rng = ConstSource(0.999);
        let rock = scatter
            .maybe_scatter(Biome::Stone, 1.0, Vec2::ZERO, &mut rng)
            .unwrap();

        let max_radius = 0.4;
        for vertex in &rock.vertices {
            assert!(vertex.position[0] <= (0.4 + max_radius) as f32 + 1e-5);
            assert!(vertex.position[2] <= (0.4 + max_radius) as f32 + 1e-5);
        }
    }
}
