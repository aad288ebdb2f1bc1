use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Per-frame transform state, written into every light pass.
#[derive(Clone, Copy, Debug)]
pub struct Matrices {
    pub projection: Mat4,
    pub view: Mat4,
    pub model: Mat4,
    pub eye_position: Vec3,
}

impl Default for Matrices {
    fn default() -> Self {
        Self {
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            model: Mat4::IDENTITY,
            eye_position: Vec3::ZERO,
        }
    }
}

/// std140 mirror of the `_matrices` uniform block.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct MatricesRaw {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub eye_position: [f32; 3],
    pub _padding: f32,
}

impl MatricesRaw {
    pub fn from_data(data: &Matrices) -> Self {
        Self {
            projection: data.projection.to_cols_array_2d(),
            view: data.view.to_cols_array_2d(),
            model: data.model.to_cols_array_2d(),
            eye_position: data.eye_position.to_array(),
            _padding: 0.0,
        }
    }
}
