//! Extraction of one instance at one LOD level into upload-ready buffers.

use regolith_field::AsteroidField;
use regolith_mesh::compute_tangents;

use crate::AsteroidVertex;

/// An upload-ready mesh for one asteroid instance at one LOD level.
///
/// Vertices carry the instance's full base vertex set (the shared indices
/// address that whole range, so no rebasing is needed); indices are the
/// level's slice of the shared buffer. Tangents are generated here, after
/// displacement, since they depend on the final positions and normals.
#[derive(Clone, Debug)]
pub struct InstanceMesh {
    /// Interleaved vertex data.
    pub vertices: Vec<AsteroidVertex>,
    /// Triangle list into `vertices`.
    pub indices: Vec<u32>,
}

impl InstanceMesh {
    /// Vertex buffer contents as bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents as bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Package one instance of the field at the given LOD level.
///
/// # Panics
///
/// Panics if `instance` or `level` is out of range for the field.
pub fn package_instance(field: &AsteroidField, instance: u32, level: u32) -> InstanceMesh {
    let positions = field.instance_positions(instance);
    let normals = field.instance_normals(instance);
    let uvs = field.instance_uvs(instance);
    let indices = field.level_indices(level);

    let tangents = compute_tangents(positions, normals, uvs, indices);

    let vertices = positions
        .iter()
        .zip(normals)
        .zip(uvs)
        .zip(&tangents)
        .map(|(((p, n), uv), t)| AsteroidVertex {
            position: p.to_array(),
            normal: n.to_array(),
            tangent: t.to_array(),
            uv: uv.to_array(),
        })
        .collect();

    InstanceMesh {
        vertices,
        indices: indices.to_vec(),
    }
}
