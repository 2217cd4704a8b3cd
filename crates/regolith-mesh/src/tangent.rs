//! Tangent-space generation (Lengyel's method) for normal mapping.

use glam::{Vec2, Vec3, Vec4};

use crate::TriangleMesh;

/// Compute per-vertex tangents from positions, normals, UVs, and a triangle
/// list, using Lengyel's UV-gradient method.
///
/// Returns one `Vec4` per vertex: `xyz` is the unit tangent orthogonalized
/// against the vertex normal, `w` is the handedness sign (`+1` or `-1`)
/// obtained by comparing `cross(normal, tangent)` against the accumulated
/// bitangent.
///
/// Triangles with degenerate UVs contribute nothing; vertices that end up
/// with no usable tangent (unreferenced by `indices`, or all contributions
/// degenerate) receive a fallback frame built from the normal alone, so the
/// output is always index-aligned with `positions` and safe to upload.
///
/// # Panics
///
/// Panics if `indices` is not a valid triangle list or if `normals`/`uvs`
/// are not index-aligned with `positions`.
pub fn compute_tangents(
    positions: &[Vec3],
    normals: &[Vec3],
    uvs: &[Vec2],
    indices: &[u32],
) -> Vec<Vec4> {
    assert!(
        indices.len() % 3 == 0,
        "index count {} is not a multiple of 3",
        indices.len()
    );
    assert!(
        normals.len() == positions.len() && uvs.len() == positions.len(),
        "attribute arrays must be index-aligned: {} positions, {} normals, {} uvs",
        positions.len(),
        normals.len(),
        uvs.len()
    );

    let mut tan_u = vec![Vec3::ZERO; positions.len()];
    let mut tan_v = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);

        let e1 = positions[i1] - positions[i0];
        let e2 = positions[i2] - positions[i0];
        let duv1 = uvs[i1] - uvs[i0];
        let duv2 = uvs[i2] - uvs[i0];

        let det = duv1.x * duv2.y - duv2.x * duv1.y;
        if det.abs() < f32::EPSILON {
            // Degenerate UV triangle; no tangent direction to extract.
            continue;
        }
        let r = 1.0 / det;

        let s_dir = (e1 * duv2.y - e2 * duv1.y) * r;
        let t_dir = (e2 * duv1.x - e1 * duv2.x) * r;

        tan_u[i0] += s_dir;
        tan_u[i1] += s_dir;
        tan_u[i2] += s_dir;
        tan_v[i0] += t_dir;
        tan_v[i1] += t_dir;
        tan_v[i2] += t_dir;
    }

    positions
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let n = normals[i];
            let t = tan_u[i];

            // Gram-Schmidt orthogonalize against the normal.
            let projected = t - n * n.dot(t);
            let tangent = if projected.length_squared() > 1e-12 {
                projected.normalize()
            } else {
                fallback_tangent(n)
            };

            let handedness = if n.cross(tangent).dot(tan_v[i]) > 0.0 {
                1.0
            } else {
                -1.0
            };
            Vec4::new(tangent.x, tangent.y, tangent.z, handedness)
        })
        .collect()
}

/// Compute tangents for a mesh whose normals and UVs are already populated.
///
/// # Panics
///
/// Same conditions as [`compute_tangents`].
pub fn mesh_tangents(mesh: &TriangleMesh) -> Vec<Vec4> {
    compute_tangents(&mesh.positions, &mesh.normals, &mesh.uvs, &mesh.indices)
}

/// An arbitrary unit vector orthogonal to `n`, derived from the axis `n` is
/// least aligned with.
fn fallback_tangent(n: Vec3) -> Vec3 {
    let axis = if n.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    n.cross(axis).normalize()
}
