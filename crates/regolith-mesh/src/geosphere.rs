//! Multi-level geosphere construction: one combined mesh carrying every
//! subdivision level as an independent LOD variant.

use crate::{TriangleMesh, icosahedron, spherify_in_place, subdivide_in_place};

/// A geosphere with `subdiv_level_count + 1` levels of detail sharing one
/// combined vertex/index buffer.
///
/// Each level owns its own complete, contiguous vertex range (levels are
/// mutually exclusive LOD variants of the same shape, not refinements of
/// each other), and its indices are pre-offset into that range. The offset
/// tables let a caller slice out exactly one level for rendering.
#[derive(Clone, Debug)]
pub struct Geosphere {
    /// The union of all levels' geometry, spherified onto the unit sphere.
    pub mesh: TriangleMesh,
    /// Index-buffer offsets, one per level plus a sentinel end entry:
    /// level `l` occupies `indices[index_offsets[l]..index_offsets[l + 1]]`.
    /// Length is `subdiv_level_count + 2`.
    pub index_offsets: Vec<u32>,
    /// Vertex-buffer offsets with the same layout as `index_offsets`:
    /// level `l`'s vertices are `positions[vertex_offsets[l]..vertex_offsets[l + 1]]`.
    pub vertex_offsets: Vec<u32>,
}

impl Geosphere {
    /// Build a geosphere with the given number of subdivision levels.
    ///
    /// Starts from the icosahedron (level 0) and subdivides
    /// `subdiv_level_count` times, appending each level's full vertex set and
    /// offset-remapped indices to the combined buffers. The whole combined
    /// vertex set is spherified to radius 1.0 at the end, so every level lies
    /// on the unit sphere. Normals are allocated but left zeroed; consumers
    /// displace vertices first and then recompute them.
    pub fn build(subdiv_level_count: u32) -> Self {
        let mut level = icosahedron();

        let mut positions = level.positions.clone();
        let mut indices = level.indices.clone();
        let mut index_offsets = Vec::with_capacity(subdiv_level_count as usize + 2);
        let mut vertex_offsets = Vec::with_capacity(subdiv_level_count as usize + 2);
        index_offsets.push(0);
        vertex_offsets.push(0);

        for _ in 0..subdiv_level_count {
            index_offsets.push(indices.len() as u32);
            vertex_offsets.push(positions.len() as u32);
            subdivide_in_place(&mut level);

            // Remap this level's indices by the running vertex offset so the
            // combined buffer needs no per-level base-vertex bookkeeping.
            let vertex_offset = positions.len() as u32;
            positions.extend_from_slice(&level.positions);
            indices.extend(level.indices.iter().map(|&i| i + vertex_offset));
        }
        index_offsets.push(indices.len() as u32);
        vertex_offsets.push(positions.len() as u32);

        let mut mesh = TriangleMesh {
            positions,
            normals: Vec::new(),
            uvs: Vec::new(),
            indices,
        };
        spherify_in_place(&mut mesh, 1.0);
        mesh.normals = vec![glam::Vec3::ZERO; mesh.positions.len()];

        Self {
            mesh,
            index_offsets,
            vertex_offsets,
        }
    }

    /// Number of LOD levels stored (`subdiv_level_count + 1`).
    pub fn level_count(&self) -> u32 {
        self.index_offsets.len() as u32 - 1
    }

    /// The combined-buffer index range belonging to `level`.
    ///
    /// # Panics
    ///
    /// Panics if `level` is out of range.
    pub fn level_index_range(&self, level: u32) -> std::ops::Range<usize> {
        assert!(
            level < self.level_count(),
            "level {level} out of range for {} levels",
            self.level_count()
        );
        self.index_offsets[level as usize] as usize
            ..self.index_offsets[level as usize + 1] as usize
    }

    /// The combined-buffer vertex range belonging to `level`.
    ///
    /// # Panics
    ///
    /// Panics if `level` is out of range.
    pub fn level_vertex_range(&self, level: u32) -> std::ops::Range<usize> {
        assert!(
            level < self.level_count(),
            "level {level} out of range for {} levels",
            self.level_count()
        );
        self.vertex_offsets[level as usize] as usize
            ..self.vertex_offsets[level as usize + 1] as usize
    }

    /// Number of triangles in `level`.
    pub fn level_triangle_count(&self, level: u32) -> usize {
        self.level_index_range(level).len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_table_shape() {
        let sphere = Geosphere::build(3);
        assert_eq!(sphere.index_offsets.len(), 5, "levels + 2 entries");
        assert_eq!(sphere.vertex_offsets.len(), 5);
        assert!(
            sphere.index_offsets.windows(2).all(|w| w[0] <= w[1]),
            "offsets are monotonically non-decreasing"
        );
        assert_eq!(
            *sphere.index_offsets.last().unwrap() as usize,
            sphere.mesh.indices.len(),
            "sentinel entry closes the combined index buffer"
        );
    }

    #[test]
    fn test_level_triangle_counts_follow_powers_of_four() {
        let sphere = Geosphere::build(3);
        assert_eq!(sphere.level_triangle_count(0), 20);
        assert_eq!(sphere.level_triangle_count(1), 80);
        assert_eq!(sphere.level_triangle_count(2), 320);
        assert_eq!(sphere.level_triangle_count(3), 1280, "20 * 4^3");
    }

    #[test]
    fn test_level_zero_is_the_icosahedron() {
        let sphere = Geosphere::build(2);
        assert_eq!(sphere.level_vertex_range(0), 0..12);
        assert_eq!(sphere.level_index_range(0), 0..60);
    }

    #[test]
    fn test_level_indices_stay_in_their_vertex_range() {
        let sphere = Geosphere::build(3);
        for level in 0..sphere.level_count() {
            let vertex_range = sphere.level_vertex_range(level);
            let index_range = sphere.level_index_range(level);
            assert!(!index_range.is_empty(), "level {level} is non-empty");
            assert_eq!(index_range.len() % 3, 0, "level {level} is a trilist");
            for &i in &sphere.mesh.indices[index_range] {
                assert!(
                    vertex_range.contains(&(i as usize)),
                    "level {level} index {i} escapes vertex range {vertex_range:?}"
                );
            }
        }
    }

    #[test]
    fn test_all_levels_lie_on_unit_sphere() {
        let sphere = Geosphere::build(2);
        for (i, p) in sphere.mesh.positions.iter().enumerate() {
            assert!(
                (p.length() - 1.0).abs() < 1e-5,
                "combined vertex {i} at distance {}",
                p.length()
            );
        }
    }

    #[test]
    fn test_zero_subdivisions_is_just_the_seed() {
        let sphere = Geosphere::build(0);
        assert_eq!(sphere.level_count(), 1);
        assert_eq!(sphere.mesh.vertex_count(), 12);
        assert_eq!(sphere.mesh.triangle_count(), 20);
        assert_eq!(sphere.index_offsets, vec![0, 60]);
    }

    #[test]
    fn test_combined_mesh_is_structurally_valid() {
        let sphere = Geosphere::build(3);
        sphere.mesh.validate();
    }
}
