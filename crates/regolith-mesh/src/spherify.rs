//! Radial projection of mesh vertices onto a sphere.

use crate::TriangleMesh;

/// Rescale every vertex along its own direction from the origin so it lies at
/// exactly `radius`.
///
/// # Panics
///
/// Panics if `radius` is not positive and finite, or if any vertex sits at
/// the origin (its direction is undefined). Icosahedron-derived topology
/// never produces a zero-length position, so hitting that assert means the
/// caller handed in foreign geometry.
pub fn spherify_in_place(mesh: &mut TriangleMesh, radius: f32) {
    assert!(
        radius > 0.0 && radius.is_finite(),
        "radius must be positive and finite, got {radius}"
    );
    for (i, p) in mesh.positions.iter_mut().enumerate() {
        let length = p.length();
        assert!(
            length > 0.0,
            "vertex {i} is at the origin; its radial direction is undefined"
        );
        *p *= radius / length;
    }
}
