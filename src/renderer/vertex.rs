use crate::gfx::{VertexAttribute, VertexFormat, VertexLayout, VertexSemantic};
use bytemuck::{Pod, Zeroable};
use std::mem;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const ATTRS: [VertexAttribute; 3] = [
        VertexAttribute {
            semantic: VertexSemantic::Position,
            format: VertexFormat::Float32x3,
            offset: 0,
        },
        VertexAttribute {
            semantic: VertexSemantic::Normal,
            format: VertexFormat::Float32x3,
            offset: 12,
        },
        VertexAttribute {
            semantic: VertexSemantic::TexCoord,
            format: VertexFormat::Float32x2,
            offset: 24,
        },
    ];

    pub fn layout<'a>() -> VertexLayout<'a> {
        VertexLayout {
            stride: mem::size_of::<Vertex>() as u32,
            attributes: &Self::ATTRS,
        }
    }
}
