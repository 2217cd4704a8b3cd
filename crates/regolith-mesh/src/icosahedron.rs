//! The regular icosahedron used as the level-0 seed of every geosphere.

use glam::Vec3;

use crate::TriangleMesh;

/// Index table for the 20 faces of the icosahedron, wound counter-clockwise
/// viewed from outside so the area-weighted normal pass produces
/// outward-facing normals.
const FACES: [u32; 60] = [
    0, 11, 5, //
    0, 5, 1, //
    0, 1, 7, //
    0, 7, 10, //
    0, 10, 11, //
    1, 5, 9, //
    5, 11, 4, //
    11, 10, 2, //
    10, 7, 6, //
    7, 1, 8, //
    3, 9, 4, //
    3, 4, 2, //
    3, 2, 6, //
    3, 6, 8, //
    3, 8, 9, //
    4, 9, 5, //
    2, 4, 11, //
    6, 2, 10, //
    8, 6, 7, //
    9, 8, 1, //
];

/// Build the canonical regular icosahedron: 12 vertices, 20 triangular faces.
///
/// Vertex coordinates are the golden-ratio construction with all vertices on
/// the unit sphere. The normal array is allocated (zeroed) but not computed;
/// callers run [`crate::recompute_normals`] once the final geometry is known.
pub fn icosahedron() -> TriangleMesh {
    // Edge midpoints of a golden rectangle triple, normalized to unit radius.
    let a = (2.0_f32 / (5.0 - 5.0_f32.sqrt())).sqrt();
    let b = (2.0_f32 / (5.0 + 5.0_f32.sqrt())).sqrt();

    let positions = vec![
        Vec3::new(-b, a, 0.0),
        Vec3::new(b, a, 0.0),
        Vec3::new(-b, -a, 0.0),
        Vec3::new(b, -a, 0.0),
        Vec3::new(0.0, -b, a),
        Vec3::new(0.0, b, a),
        Vec3::new(0.0, -b, -a),
        Vec3::new(0.0, b, -a),
        Vec3::new(a, 0.0, -b),
        Vec3::new(a, 0.0, b),
        Vec3::new(-a, 0.0, -b),
        Vec3::new(-a, 0.0, b),
    ];

    let normals = vec![Vec3::ZERO; positions.len()];

    TriangleMesh {
        positions,
        normals,
        uvs: Vec::new(),
        indices: FACES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icosahedron_counts() {
        let mesh = icosahedron();
        assert_eq!(mesh.vertex_count(), 12, "icosahedron has 12 vertices");
        assert_eq!(mesh.triangle_count(), 20, "icosahedron has 20 faces");
        mesh.validate();
    }

    #[test]
    fn test_vertices_lie_on_unit_sphere() {
        let mesh = icosahedron();
        for (i, p) in mesh.positions.iter().enumerate() {
            assert!(
                (p.length() - 1.0).abs() < 1e-6,
                "vertex {i} at distance {} from origin",
                p.length()
            );
        }
    }

    #[test]
    fn test_every_vertex_is_referenced() {
        let mesh = icosahedron();
        let mut seen = [false; 12];
        for &i in &mesh.indices {
            seen[i as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every vertex belongs to a face");
    }

    #[test]
    fn test_closed_surface_edge_count() {
        // A closed triangle mesh has E = 3T/2 unique edges; for the
        // icosahedron that is 30, with every edge shared by exactly 2 faces.
        use std::collections::HashMap;
        let mesh = icosahedron();
        let mut edge_uses: HashMap<(u32, u32), u32> = HashMap::new();
        for tri in mesh.indices.chunks(3) {
            for &(i, j) in &[(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (i.min(j), i.max(j));
                *edge_uses.entry(key).or_insert(0) += 1;
            }
        }
        assert_eq!(edge_uses.len(), 30, "icosahedron has 30 unique edges");
        assert!(
            edge_uses.values().all(|&uses| uses == 2),
            "every edge is shared by exactly two faces"
        );
    }

    #[test]
    fn test_faces_wound_outward() {
        let mesh = icosahedron();
        for tri in mesh.indices.chunks(3) {
            let (a, b, c) = (
                mesh.positions[tri[0] as usize],
                mesh.positions[tri[1] as usize],
                mesh.positions[tri[2] as usize],
            );
            let face_normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                face_normal.dot(centroid) > 0.0,
                "face ({},{},{}) winds inward",
                tri[0],
                tri[1],
                tri[2]
            );
        }
    }
}
