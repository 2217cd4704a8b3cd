//! 1-to-4 triangle subdivision with watertight edge-midpoint deduplication.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::TriangleMesh;

/// An unordered pair of vertex indices identifying a mesh edge.
///
/// Canonicalized on construction (lower index first) so the two triangles
/// sharing an edge resolve to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    v0: u32,
    v1: u32,
}

impl EdgeKey {
    /// Create a canonical edge key from two vertex indices.
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }
}

/// Return the index of the midpoint vertex of `edge`, appending it to the
/// mesh the first time the edge is seen.
///
/// The midpoint is the arithmetic mean of the two endpoints (flat
/// subdivision; spherification happens later as a separate pass). The cache
/// guarantees each shared edge produces exactly one new vertex, keeping the
/// surface free of cracks.
fn edge_midpoint(
    positions: &mut Vec<Vec3>,
    midpoints: &mut FxHashMap<EdgeKey, u32>,
    edge: EdgeKey,
) -> u32 {
    *midpoints.entry(edge).or_insert_with(|| {
        let index = positions.len() as u32;
        let mid = (positions[edge.v0 as usize] + positions[edge.v1 as usize]) * 0.5;
        positions.push(mid);
        index
    })
}

/// Replace every triangle of the mesh with four, splitting each edge at its
/// midpoint.
///
/// Midpoints of shared edges are computed once, so a closed input mesh stays
/// closed: `new_vertex_count == old_vertex_count + unique_edge_count`. The
/// index count exactly quadruples. Runs in O(vertices + triangles) per call;
/// the normal and UV arrays are resized (zero-filled) to the new vertex
/// count, not recomputed.
///
/// # Panics
///
/// Panics if the index buffer is not a valid triangle list.
pub fn subdivide_in_place(mesh: &mut TriangleMesh) {
    assert!(
        mesh.indices.len() % 3 == 0,
        "index count {} is not a multiple of 3",
        mesh.indices.len()
    );

    let mut midpoints: FxHashMap<EdgeKey, u32> = FxHashMap::default();
    let mut new_indices = Vec::with_capacity(mesh.indices.len() * 4);
    mesh.positions.reserve(mesh.positions.len());

    let triangle_count = mesh.indices.len() / 3;
    for t in 0..triangle_count {
        let a = mesh.indices[t * 3];
        let b = mesh.indices[t * 3 + 1];
        let c = mesh.indices[t * 3 + 2];

        let m_ab = edge_midpoint(&mut mesh.positions, &mut midpoints, EdgeKey::new(a, b));
        let m_bc = edge_midpoint(&mut mesh.positions, &mut midpoints, EdgeKey::new(b, c));
        let m_ca = edge_midpoint(&mut mesh.positions, &mut midpoints, EdgeKey::new(c, a));

        // Corner fans plus the center triangle, preserving the parent winding.
        new_indices.extend_from_slice(&[
            a, m_ab, m_ca, //
            m_ab, b, m_bc, //
            m_ab, m_bc, m_ca, //
            m_ca, m_bc, c, //
        ]);
    }

    mesh.indices = new_indices;
    if !mesh.normals.is_empty() {
        mesh.normals.resize(mesh.positions.len(), Vec3::ZERO);
    }
    if !mesh.uvs.is_empty() {
        mesh.uvs.resize(mesh.positions.len(), glam::Vec2::ZERO);
    }
}
