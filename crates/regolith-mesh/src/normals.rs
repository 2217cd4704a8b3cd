//! Area-weighted smooth normal computation.

use glam::Vec3;

use crate::TriangleMesh;

/// Compute smooth per-vertex normals into `normals`, area-weighted.
///
/// For each triangle the unnormalized cross product of its two edge vectors
/// is accumulated into all three vertex normals. That vector's magnitude is
/// twice the triangle's area, so larger faces pull harder on their shared
/// vertices; normalization happens once at the end. Assumes one consistent
/// (counter-clockwise) winding across the whole index list.
///
/// Operates on raw slices so callers generating many instances in parallel
/// can write disjoint output regions without staging through a mesh object.
///
/// # Panics
///
/// Panics if `indices` is not a valid triangle list, if `normals` is not the
/// same length as `positions`, or if a vertex ends up with a zero normal
/// (every referenced vertex of a closed mesh has at least one incident face,
/// so this indicates degenerate geometry).
pub fn accumulate_area_weighted_normals(
    positions: &[Vec3],
    indices: &[u32],
    normals: &mut [Vec3],
) {
    assert!(
        indices.len() % 3 == 0,
        "index count {} is not a multiple of 3",
        indices.len()
    );
    assert!(
        normals.len() == positions.len(),
        "normal count {} does not match vertex count {}",
        normals.len(),
        positions.len()
    );

    normals.fill(Vec3::ZERO);

    for tri in indices.chunks_exact(3) {
        let a = positions[tri[0] as usize];
        let b = positions[tri[1] as usize];
        let c = positions[tri[2] as usize];

        // Unnormalized on purpose: magnitude carries the area weight.
        let face = (b - a).cross(c - a);

        normals[tri[0] as usize] += face;
        normals[tri[1] as usize] += face;
        normals[tri[2] as usize] += face;
    }

    for (i, n) in normals.iter_mut().enumerate() {
        let length = n.length();
        assert!(
            length > 0.0,
            "vertex {i} accumulated a zero normal; mesh has degenerate or missing faces"
        );
        *n /= length;
    }
}

/// Recompute the mesh's normal array in place, resizing it to the vertex
/// count first.
///
/// # Panics
///
/// Same conditions as [`accumulate_area_weighted_normals`].
pub fn recompute_normals(mesh: &mut TriangleMesh) {
    mesh.normals.resize(mesh.positions.len(), Vec3::ZERO);
    accumulate_area_weighted_normals(&mesh.positions, &mesh.indices, &mut mesh.normals);
}
