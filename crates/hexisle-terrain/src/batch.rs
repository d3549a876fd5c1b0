//! Per-biome mesh batching.
//!
//! Tiles of the same biome share one merged mesh so the render layer issues
//! one draw call per biome. Raw per-tile meshes are collected during the
//! traversal and merged exactly once per biome at the end of the pass;
//! nothing is re-merged incrementally.

use hexisle_mesh::MeshData;

use crate::Biome;

/// Size summary of one finished batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchStats {
    /// Which biome the batch belongs to.
    pub biome: Biome,
    /// Total vertices after merging.
    pub vertices: usize,
    /// Total triangles after merging.
    pub triangles: usize,
}

/// Accumulates tile and decoration meshes per biome during one pass.
///
/// Storage is a fixed array indexed by the closed [`Biome`] enumeration, so
/// every biome always has a slot and `add` can never silently drop geometry.
#[derive(Debug, Default)]
pub struct BiomeBatcher {
    pending: [Vec<MeshData>; Biome::COUNT],
}

impl BiomeBatcher {
    /// Creates a batcher with every biome slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one mesh for the given biome's batch.
    pub fn add(&mut self, biome: Biome, mesh: MeshData) {
        self.pending[biome.index()].push(mesh);
    }

    /// Number of meshes queued so far across all biomes.
    pub fn queued(&self) -> usize {
        self.pending.iter().map(Vec::len).sum()
    }

    /// Merges each biome's queued meshes into a single buffer.
    ///
    /// Exactly one merge per biome; biomes that received nothing stay
    /// absent from the result.
    pub fn finish(self) -> IslandBatches {
        let mut merged: [Option<MeshData>; Biome::COUNT] = Default::default();

        for biome in Biome::ALL {
            let pieces = &self.pending[biome.index()];
            if pieces.is_empty() {
                continue;
            }
            let vertices = pieces.iter().map(MeshData::vertex_count).sum();
            let triangles = pieces.iter().map(MeshData::triangle_count).sum();
            let mut batch = MeshData::with_capacity(vertices, triangles);
            for piece in pieces {
                batch.append(piece);
            }
            merged[biome.index()] = Some(batch);
        }

        IslandBatches { merged }
    }
}

/// The finished output of a generation pass: one merged mesh per biome that
/// received content.
///
/// A missing biome means "nothing to render for that biome", never an error;
/// in practice water is always missing.
#[derive(Debug, Default)]
pub struct IslandBatches {
    merged: [Option<MeshData>; Biome::COUNT],
}

impl IslandBatches {
    /// The merged mesh for `biome`, if it received any contribution.
    pub fn get(&self, biome: Biome) -> Option<&MeshData> {
        self.merged[biome.index()].as_ref()
    }

    /// Takes ownership of the merged mesh for `biome`, if present.
    pub fn take(&mut self, biome: Biome) -> Option<MeshData> {
        self.merged[biome.index()].take()
    }

    /// Iterates the non-empty batches in biome declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Biome, &MeshData)> {
        Biome::ALL
            .into_iter()
            .filter_map(|biome| self.get(biome).map(|mesh| (biome, mesh)))
    }

    /// Number of non-empty batches.
    pub fn len(&self) -> usize {
        self.merged.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no biome received any geometry.
    pub fn is_empty(&self) -> bool {
        self.merged.iter().all(Option::is_none)
    }

    /// Total triangle count across all batches.
    pub fn total_triangles(&self) -> usize {
        self.iter().map(|(_, mesh)| mesh.triangle_count()).sum()
    }

    /// Per-batch size summaries, for logging and tests.
    pub fn stats(&self) -> Vec<BatchStats> {
        self.iter()
            .map(|(biome, mesh)| BatchStats {
                biome,
                vertices: mesh.vertex_count(),
                triangles: mesh.triangle_count(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};
    use hexisle_mesh::hex_prism;

    fn tile(height: f32) -> MeshData {
        hex_prism(height, Vec2::ZERO).unwrap()
    }

    #[test]
    fn test_empty_batcher_finishes_empty() {
        let batches = BiomeBatcher::new().finish();
        assert!(batches.is_empty());
        assert_eq!(batches.len(), 0);
        assert_eq!(batches.total_triangles(), 0);
    }

    #[test]
    fn test_untouched_biomes_are_absent() {
        let mut batcher = BiomeBatcher::new();
        batcher.add(Biome::Grass, tile(5.0));
        let batches = batcher.finish();

        assert!(batches.get(Biome::Grass).is_some());
        assert!(batches.get(Biome::Water).is_none());
        assert!(batches.get(Biome::Stone).is_none());
        assert_eq!(batches.len(), 1);
    }

    #[test]
    fn test_merge_conserves_geometry() {
        let mut batcher = BiomeBatcher::new();
        let pieces = [tile(1.0), tile(2.0), tile(3.0)];
        let triangle_sum: usize = pieces.iter().map(MeshData::triangle_count).sum();
        let vertex_sum: usize = pieces.iter().map(MeshData::vertex_count).sum();
        for piece in pieces {
            batcher.add(Biome::Sand, piece);
        }
        assert_eq!(batcher.queued(), 3);

        let batches = batcher.finish();
        let sand = batches.get(Biome::Sand).unwrap();
        assert_eq!(sand.triangle_count(), triangle_sum);
        assert_eq!(sand.vertex_count(), vertex_sum);
    }

    #[test]
    fn test_merged_indices_stay_in_bounds() {
        let mut batcher = BiomeBatcher::new();
        for height in 1..=5 {
            batcher.add(Biome::Dirt, tile(height as f32));
        }
        let batches = batcher.finish();
        let dirt = batches.get(Biome::Dirt).unwrap();
        let limit = dirt.vertex_count() as u32;
        assert!(dirt.indices.iter().all(|&i| i < limit));
    }

    #[test]
    fn test_take_removes_the_batch() {
        let mut batcher = BiomeBatcher::new();
        batcher.add(Biome::Stone, tile(9.0));
        let mut batches = batcher.finish();

        assert!(batches.take(Biome::Stone).is_some());
        assert!(batches.take(Biome::Stone).is_none());
        assert!(batches.is_empty());
    }

    #[test]
    fn test_stats_match_batches() {
        let mut batcher = BiomeBatcher::new();
        batcher.add(Biome::Grass, tile(5.0));
        let mut rock = MeshData::new();
        let a = rock.push_vertex(Vec3::ZERO, Vec3::Y, [0.0, 0.0]);
        let b = rock.push_vertex(Vec3::X, Vec3::Y, [1.0, 0.0]);
        let c = rock.push_vertex(Vec3::Z, Vec3::Y, [0.0, 1.0]);
        rock.push_triangle(a, b, c);
        batcher.add(Biome::Stone, rock);

        let batches = batcher.finish();
        let stats = batches.stats();
        assert_eq!(stats.len(), 2);
        let stone = stats.iter().find(|s| s.biome == Biome::Stone).unwrap();
        assert_eq!(stone.triangles, 1);
        assert_eq!(stone.vertices, 3);
    }
}
