//! Canonical `wgpu::VertexBufferLayout` for asteroid mesh rendering.
//!
//! Every pipeline that draws asteroids references [`ASTEROID_VERTEX_LAYOUT`]
//! to avoid layout drift bugs.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Fields                      |
//! |----------|--------|-----------|-----------------------------|
//! | 0        | 0      | Float32x3 | position xyz                |
//! | 1        | 12     | Float32x3 | normal xyz (unit length)    |
//! | 2        | 24     | Float32x4 | tangent xyz + handedness w  |
//! | 3        | 40     | Float32x2 | uv                          |

use std::mem;

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

/// One interleaved asteroid vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct AsteroidVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Tangent xyz plus handedness sign (`±1`) in w.
    pub tangent: [f32; 4],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

/// Vertex attributes for the asteroid vertex format.
pub const ASTEROID_VERTEX_ATTRIBUTES: [VertexAttribute; 4] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 24,
        shader_location: 2,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: 40,
        shader_location: 3,
    },
];

/// The vertex buffer layout for all asteroid render pipelines.
pub const ASTEROID_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<AsteroidVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &ASTEROID_VERTEX_ATTRIBUTES,
};

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

const_assert_eq!(mem::size_of::<AsteroidVertex>(), 48);
const_assert_eq!(mem::offset_of!(AsteroidVertex, position), 0);
const_assert_eq!(mem::offset_of!(AsteroidVertex, normal), 12);
const_assert_eq!(mem::offset_of!(AsteroidVertex, tangent), 24);
const_assert_eq!(mem::offset_of!(AsteroidVertex, uv), 40);
