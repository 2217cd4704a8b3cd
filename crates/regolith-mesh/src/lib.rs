//! Geosphere meshing: icosahedron subdivision, spherification, normal/UV/tangent
//! generation, and the multi-level geosphere builder.

mod geosphere;
mod icosahedron;
mod mesh;
mod normals;
mod spherify;
mod subdivide;
mod tangent;
mod uv;

pub use geosphere::Geosphere;
pub use icosahedron::icosahedron;
pub use mesh::TriangleMesh;
pub use normals::{accumulate_area_weighted_normals, recompute_normals};
pub use spherify::spherify_in_place;
pub use subdivide::{EdgeKey, subdivide_in_place};
pub use tangent::{compute_tangents, mesh_tangents};
pub use uv::planar_uv_map;
