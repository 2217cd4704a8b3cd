//! GPU-facing buffer packaging for asteroid fields: the canonical vertex
//! layout and per-instance/per-LOD mesh extraction.
//!
//! This crate describes layouts and assembles CPU-side buffers; it performs
//! no device work. Uploading the produced byte slices is the host renderer's
//! job.

mod packaging;
mod vertex;

pub use packaging::{InstanceMesh, package_instance};
pub use vertex::{ASTEROID_VERTEX_ATTRIBUTES, ASTEROID_VERTEX_LAYOUT, AsteroidVertex};
