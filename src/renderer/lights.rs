use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// The one directional light of the opaque base pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

/// One additively composited point light.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub constant_attenuation: f32,
    pub linear_attenuation: f32,
    pub quadratic_attenuation: f32,
    pub shininess: f32,
}

/// std140 mirror of the directional `_light` uniform block.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct DirectionalLightRaw {
    pub direction: [f32; 3],
    pub _pad0: f32,
    pub ambient: [f32; 3],
    pub _pad1: f32,
    pub diffuse: [f32; 3],
    pub _pad2: f32,
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl DirectionalLightRaw {
    pub fn from_data(data: &DirectionalLight) -> Self {
        Self {
            direction: data.direction.to_array(),
            _pad0: 0.0,
            ambient: data.ambient.to_array(),
            _pad1: 0.0,
            diffuse: data.diffuse.to_array(),
            _pad2: 0.0,
            specular: data.specular.to_array(),
            shininess: data.shininess,
        }
    }
}

/// std140 mirror of the point `_light` uniform block. The three attenuation
/// factors pack into the slots after `specular`, no padding between them.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct PointLightRaw {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub ambient: [f32; 3],
    pub _pad1: f32,
    pub diffuse: [f32; 3],
    pub _pad2: f32,
    pub specular: [f32; 3],
    pub constant_attenuation: f32,
    pub linear_attenuation: f32,
    pub quadratic_attenuation: f32,
    pub shininess: f32,
    pub _pad3: f32,
}

impl PointLightRaw {
    pub fn from_data(data: &PointLight) -> Self {
        Self {
            position: data.position.to_array(),
            _pad0: 0.0,
            ambient: data.ambient.to_array(),
            _pad1: 0.0,
            diffuse: data.diffuse.to_array(),
            _pad2: 0.0,
            specular: data.specular.to_array(),
            constant_attenuation: data.constant_attenuation,
            linear_attenuation: data.linear_attenuation,
            quadratic_attenuation: data.quadratic_attenuation,
            shininess: data.shininess,
            _pad3: 0.0,
        }
    }
}
