//! Planar UV projection.

use glam::Vec2;

use crate::TriangleMesh;

/// Assign each vertex the UV `(x, y)` of its own position.
///
/// This is a deliberate straight planar projection, kept for output
/// compatibility with the meshes this pipeline replaces. It is not
/// seam-correct: texture coordinates pinch at the Z poles, which downstream
/// renderers accept as a known limitation of the asteroid material.
pub fn planar_uv_map(mesh: &mut TriangleMesh) {
    mesh.uvs.clear();
    mesh.uvs.reserve(mesh.positions.len());
    mesh.uvs
        .extend(mesh.positions.iter().map(|p| Vec2::new(p.x, p.y)));
}
