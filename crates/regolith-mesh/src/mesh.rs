//! The flat triangle-list mesh type shared by every stage of the pipeline.

use glam::{Vec2, Vec3};

/// An indexed triangle mesh with per-vertex positions, normals, and UVs.
///
/// All attribute arrays are index-aligned: `normals[i]` and `uvs[i]` (when
/// present) belong to `positions[i]`. Indices form a flat triangle list
/// (stride 3) into the position array.
#[derive(Clone, Debug, Default)]
pub struct TriangleMesh {
    /// Object-space vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, same length as `positions` once computed.
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates, same length as `positions` once computed.
    pub uvs: Vec<Vec2>,
    /// Triangle list: three indices per face, each a valid index into `positions`.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    ///
    /// # Panics
    ///
    /// Panics if the index buffer is not a valid triangle list.
    pub fn triangle_count(&self) -> usize {
        assert!(
            self.indices.len() % 3 == 0,
            "index count {} is not a multiple of 3",
            self.indices.len()
        );
        self.indices.len() / 3
    }

    /// Returns `true` if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Remove all vertex and index data.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    /// Assert the structural invariants of the mesh.
    ///
    /// # Panics
    ///
    /// Panics if the index buffer is not a triangle list, if any index is out
    /// of range, or if a populated attribute array is not index-aligned with
    /// the positions.
    pub fn validate(&self) {
        assert!(
            self.indices.len() % 3 == 0,
            "index count {} is not a multiple of 3",
            self.indices.len()
        );
        let vertex_count = self.positions.len() as u32;
        for &index in &self.indices {
            assert!(
                index < vertex_count,
                "index {index} out of range for {vertex_count} vertices"
            );
        }
        if !self.normals.is_empty() {
            assert!(
                self.normals.len() == self.positions.len(),
                "normal count {} does not match vertex count {}",
                self.normals.len(),
                self.positions.len()
            );
        }
        if !self.uvs.is_empty() {
            assert!(
                self.uvs.len() == self.positions.len(),
                "uv count {} does not match vertex count {}",
                self.uvs.len(),
                self.positions.len()
            );
        }
    }
}
