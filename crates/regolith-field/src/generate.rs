//! Field assembly: clone the shared geosphere per instance, displace vertex
//! radii by octave noise, and recompute normals.

use std::time::Instant;

use glam::{DVec4, Vec2, Vec3};
use regolith_mesh::{Geosphere, accumulate_area_weighted_normals};
use regolith_noise::OctaveNoise;
use tracing::{debug, info};

use crate::{FieldParams, InstanceParams, draw_instance_params};

/// A generated asteroid field: per-instance vertex data over one shared
/// index buffer.
///
/// Positions, normals, and UVs are instance-major: instance `m` owns the
/// contiguous range `m * vertex_count_per_mesh ..` of each attribute array.
/// The index buffer and the level offset table are shared by every instance
/// (indices are never duplicated per instance); a renderer picks an LOD by
/// slicing `indices` with [`AsteroidField::level_index_range`].
///
/// The geometry is immutable once generated. Animating an asteroid means
/// transforming the whole instance externally, never re-displacing vertices.
#[derive(Clone, Debug)]
pub struct AsteroidField {
    /// Displaced positions for all instances, instance-major.
    pub positions: Vec<Vec3>,
    /// Recomputed unit normals, index-aligned with `positions`.
    pub normals: Vec<Vec3>,
    /// Planar-projection UVs, index-aligned with `positions`.
    pub uvs: Vec<Vec2>,
    /// Combined multi-level index buffer shared by all instances.
    pub indices: Vec<u32>,
    /// Index offsets per subdivision level plus a sentinel
    /// (`subdiv_level_count + 2` entries).
    pub index_offsets: Vec<u32>,
    /// Vertex count of the shared base mesh; the per-instance stride into
    /// the attribute arrays.
    pub vertex_count_per_mesh: u32,
    /// Number of instances generated.
    pub instance_count: u32,
}

impl AsteroidField {
    /// Generate a field on the calling thread.
    ///
    /// # Panics
    ///
    /// Panics if the parameters fail [`FieldParams::validate`].
    pub fn generate(params: &FieldParams) -> Self {
        Self::generate_impl(params, 1)
    }

    /// Generate a field across one worker thread per available CPU.
    ///
    /// Instance displacement only reads the shared base mesh and writes
    /// disjoint output slices, so threading never changes the result: the
    /// output is bit-identical to [`AsteroidField::generate`].
    ///
    /// # Panics
    ///
    /// Panics if the parameters fail [`FieldParams::validate`].
    pub fn generate_parallel(params: &FieldParams) -> Self {
        Self::generate_impl(params, num_cpus::get().max(1))
    }

    fn generate_impl(params: &FieldParams, worker_count: usize) -> Self {
        params.validate();
        let start = Instant::now();

        let sphere = Geosphere::build(params.subdiv_level_count);
        debug!(
            vertices = sphere.mesh.vertex_count(),
            triangles = sphere.mesh.triangle_count(),
            levels = sphere.level_count(),
            "geosphere built"
        );

        let vertex_count_per_mesh = sphere.mesh.vertex_count();
        let draws = draw_instance_params(params);

        let total_vertices = vertex_count_per_mesh * draws.len();
        let mut positions = vec![Vec3::ZERO; total_vertices];
        let mut normals = vec![Vec3::ZERO; total_vertices];

        if !draws.is_empty() {
            let base = sphere.mesh.positions.as_slice();
            let indices = sphere.mesh.indices.as_slice();

            if worker_count <= 1 || draws.len() == 1 {
                for ((out_pos, out_norm), instance) in positions
                    .chunks_mut(vertex_count_per_mesh)
                    .zip(normals.chunks_mut(vertex_count_per_mesh))
                    .zip(&draws)
                {
                    displace_instance(base, indices, params, instance, out_pos, out_norm);
                }
            } else {
                // Contiguous batches of whole instances per worker; each
                // worker owns a disjoint slice of the output buffers.
                let instances_per_worker = draws.len().div_ceil(worker_count);
                let stride = instances_per_worker * vertex_count_per_mesh;
                std::thread::scope(|scope| {
                    for ((pos_batch, norm_batch), draw_batch) in positions
                        .chunks_mut(stride)
                        .zip(normals.chunks_mut(stride))
                        .zip(draws.chunks(instances_per_worker))
                    {
                        scope.spawn(move || {
                            for ((out_pos, out_norm), instance) in pos_batch
                                .chunks_mut(vertex_count_per_mesh)
                                .zip(norm_batch.chunks_mut(vertex_count_per_mesh))
                                .zip(draw_batch)
                            {
                                displace_instance(
                                    base, indices, params, instance, out_pos, out_norm,
                                );
                            }
                        });
                    }
                });
            }
        }

        let uvs = positions.iter().map(|p| Vec2::new(p.x, p.y)).collect();

        info!(
            instances = draws.len(),
            vertices_per_mesh = vertex_count_per_mesh,
            total_vertices,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "asteroid field generated"
        );

        Self {
            positions,
            normals,
            uvs,
            indices: sphere.mesh.indices,
            index_offsets: sphere.index_offsets,
            vertex_count_per_mesh: vertex_count_per_mesh as u32,
            instance_count: draws.len() as u32,
        }
    }

    /// Number of LOD levels carried by the shared index buffer.
    pub fn level_count(&self) -> u32 {
        self.index_offsets.len() as u32 - 1
    }

    /// The shared index range for one LOD level.
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

    /// The shared indices of one LOD level.
    pub fn level_indices(&self, level: u32) -> &[u32] {
        &self.indices[self.level_index_range(level)]
    }

    /// Positions of one instance.
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn instance_positions(&self, instance: u32) -> &[Vec3] {
        &self.positions[self.instance_vertex_range(instance)]
    }

    /// Normals of one instance.
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn instance_normals(&self, instance: u32) -> &[Vec3] {
        &self.normals[self.instance_vertex_range(instance)]
    }

    /// UVs of one instance.
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn instance_uvs(&self, instance: u32) -> &[Vec2] {
        &self.uvs[self.instance_vertex_range(instance)]
    }

    fn instance_vertex_range(&self, instance: u32) -> std::ops::Range<usize> {
        assert!(
            instance < self.instance_count,
            "instance {instance} out of range for {} instances",
            self.instance_count
        );
        let stride = self.vertex_count_per_mesh as usize;
        instance as usize * stride..(instance as usize + 1) * stride
    }
}

/// Displace one instance's vertices by the noise field and recompute its
/// normals into `out_normals`.
///
/// Each base vertex (on the unit sphere) is scaled by
/// `noise * radius_scale + radius_bias`, where the noise is evaluated at the
/// scaled vertex position plus the instance's fourth-dimension offset.
fn displace_instance(
    base_positions: &[Vec3],
    indices: &[u32],
    params: &FieldParams,
    instance: &InstanceParams,
    out_positions: &mut [Vec3],
    out_normals: &mut [Vec3],
) {
    let noise = OctaveNoise::new(params.seed as u32, instance.persistence);

    for (out, &v) in out_positions.iter_mut().zip(base_positions) {
        let sample = noise.sample(DVec4::new(
            v.x as f64 * params.noise_scale,
            v.y as f64 * params.noise_scale,
            v.z as f64 * params.noise_scale,
            instance.noise_offset,
        ));
        let radius = (sample * params.radius_scale + params.radius_bias) as f32;
        *out = v * radius;
    }

    accumulate_area_weighted_normals(out_positions, indices, out_normals);
}
