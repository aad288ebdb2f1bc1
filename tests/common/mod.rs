//! Shared test fixtures: an instrumented device and hand-built glTF scenes.
#![allow(dead_code)]

use std::collections::HashMap;

use gltf_forward::gfx::{
    AddressMode, BlendMode, BufferId, CullMode, DepthMode, Device, Filter, IndexFormat, ShaderId,
    TextureFormat, TextureId, Topology, VertexLayout,
};
use serde_json::{json, Value};

/// Everything the renderer asked the device to do, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetShader(ShaderId),
    SetUniformBuffer { slot: u32, data: Vec<u8> },
    SetTexture { slot: u32, texture: TextureId },
    SetTopology(Topology),
    SetIndexBuffer(BufferId),
    SetVertexBuffer(BufferId),
    SetDepthMode(DepthMode),
    SetCullMode(CullMode),
    SetSampler(Filter),
    SetAddressMode(AddressMode),
    SetBlendMode(BlendMode),
    DrawIndexed { count: u32, offset: u32 },
}

/// One recorded draw plus the state that was current when it was issued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRecord {
    pub count: u32,
    pub offset: u32,
    pub blend: Option<BlendMode>,
    pub shader: Option<ShaderId>,
}

#[derive(Debug, Clone)]
pub struct ShaderRecord {
    pub id: ShaderId,
    pub defines: Vec<String>,
}

/// A `Device` that records instead of rendering.
#[derive(Default)]
pub struct RecordingDevice {
    pub calls: Vec<Call>,
    pub draws: Vec<DrawRecord>,
    pub texture_uploads: usize,
    pub shaders: Vec<ShaderRecord>,
    pub vertex_buffers: HashMap<BufferId, Vec<u8>>,
    pub index_buffers: HashMap<BufferId, (Vec<u8>, IndexFormat)>,
    current_blend: Option<BlendMode>,
    current_shader: Option<ShaderId>,
    next_id: u32,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Index of the first call matching `predicate`, or a panic naming the
    /// missing call.
    pub fn position_of(&self, what: &str, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls
            .iter()
            .position(predicate)
            .unwrap_or_else(|| panic!("no {} call recorded", what))
    }
}

impl Device for RecordingDevice {
    fn create_texture(
        &mut self,
        _width: u32,
        _height: u32,
        _format: TextureFormat,
        _pixels: &[u8],
        _generate_mips: bool,
    ) -> TextureId {
        self.texture_uploads += 1;
        TextureId(self.fresh_id())
    }

    fn create_vertex_buffer(&mut self, data: &[u8]) -> BufferId {
        let id = BufferId(self.fresh_id());
        self.vertex_buffers.insert(id, data.to_vec());
        id
    }

    fn create_index_buffer(&mut self, data: &[u8], format: IndexFormat) -> BufferId {
        let id = BufferId(self.fresh_id());
        self.index_buffers.insert(id, (data.to_vec(), format));
        id
    }

    fn create_shader(
        &mut self,
        _layout: &VertexLayout,
        _vertex_src: &str,
        _fragment_src: &str,
        defines: &[String],
    ) -> ShaderId {
        let id = ShaderId(self.fresh_id());
        self.shaders.push(ShaderRecord {
            id,
            defines: defines.to_vec(),
        });
        id
    }

    fn set_shader(&mut self, shader: ShaderId) {
        self.current_shader = Some(shader);
        self.calls.push(Call::SetShader(shader));
    }

    fn set_uniform_buffer(&mut self, slot: u32, data: &[u8]) {
        self.calls.push(Call::SetUniformBuffer {
            slot,
            data: data.to_vec(),
        });
    }

    fn set_texture(&mut self, slot: u32, texture: TextureId) {
        self.calls.push(Call::SetTexture { slot, texture });
    }

    fn set_topology(&mut self, topology: Topology) {
        self.calls.push(Call::SetTopology(topology));
    }

    fn set_index_buffer(&mut self, buffer: BufferId) {
        self.calls.push(Call::SetIndexBuffer(buffer));
    }

    fn set_vertex_buffer(&mut self, buffer: BufferId) {
        self.calls.push(Call::SetVertexBuffer(buffer));
    }

    fn set_depth_mode(&mut self, mode: DepthMode) {
        self.calls.push(Call::SetDepthMode(mode));
    }

    fn set_cull_mode(&mut self, mode: CullMode) {
        self.calls.push(Call::SetCullMode(mode));
    }

    fn set_sampler(&mut self, filter: Filter) {
        self.calls.push(Call::SetSampler(filter));
    }

    fn set_address_mode(&mut self, mode: AddressMode) {
        self.calls.push(Call::SetAddressMode(mode));
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.current_blend = Some(mode);
        self.calls.push(Call::SetBlendMode(mode));
    }

    fn draw_indexed(&mut self, index_count: u32, index_offset: u32) {
        self.draws.push(DrawRecord {
            count: index_count,
            offset: index_offset,
            blend: self.current_blend,
            shader: self.current_shader,
        });
        self.calls.push(Call::DrawIndexed {
            count: index_count,
            offset: index_offset,
        });
    }
}

/// Decodes packed little-endian index bytes the way the device would.
pub fn decode_indices(bytes: &[u8], format: IndexFormat) -> Vec<u32> {
    match format {
        IndexFormat::Uint16 => bytes
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]) as u32)
            .collect(),
        IndexFormat::Uint32 => bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    }
}

/// One triangle primitive of a generated test scene.
#[derive(Debug, Clone, Copy)]
pub struct PrimDesc {
    pub color_image: Option<usize>,
    pub normal_image: Option<usize>,
    pub wide_indices: bool,
}

impl PrimDesc {
    pub fn textured(color_image: usize, normal_image: usize) -> Self {
        Self {
            color_image: Some(color_image),
            normal_image: Some(normal_image),
            wide_indices: false,
        }
    }

    pub fn untextured() -> Self {
        Self {
            color_image: None,
            normal_image: None,
            wide_indices: false,
        }
    }

    pub fn wide(mut self) -> Self {
        self.wide_indices = true;
        self
    }
}

/// Builds a single-mesh scene with one triangle per descriptor and
/// `image_count` 2x2 RGBA images. Textures map 1:1 onto images, so a
/// descriptor's image index is also its texture index.
pub fn triangle_scene(
    descs: &[PrimDesc],
    image_count: usize,
) -> (gltf::Document, Vec<gltf::buffer::Data>, Vec<gltf::image::Data>) {
    let root = triangle_scene_json(descs, image_count);
    (
        document_from_json(&root),
        triangle_buffers(descs),
        test_images(image_count),
    )
}

/// The JSON root of `triangle_scene`, for tests that bend the scene out of
/// shape before parsing it.
pub fn triangle_scene_json(descs: &[PrimDesc], image_count: usize) -> Value {
    let mut buffers = Vec::new();
    let mut views = Vec::new();
    let mut accessors = Vec::new();
    let mut materials = Vec::new();
    let mut primitives = Vec::new();

    for (i, desc) in descs.iter().enumerate() {
        let view_base = views.len();
        let accessor_base = accessors.len();
        let index_type = if desc.wide_indices { 5125 } else { 5123 };
        let index_bytes = if desc.wide_indices { 12 } else { 6 };

        buffers.push(json!({ "byteLength": 96 + index_bytes }));
        views.push(json!({ "buffer": i, "byteOffset": 0, "byteLength": 36 }));
        views.push(json!({ "buffer": i, "byteOffset": 36, "byteLength": 36 }));
        views.push(json!({ "buffer": i, "byteOffset": 72, "byteLength": 24 }));
        views.push(json!({ "buffer": i, "byteOffset": 96, "byteLength": index_bytes }));

        accessors.push(json!({
            "bufferView": view_base, "componentType": 5126, "count": 3, "type": "VEC3",
            "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
        }));
        accessors.push(json!({
            "bufferView": view_base + 1, "componentType": 5126, "count": 3, "type": "VEC3"
        }));
        accessors.push(json!({
            "bufferView": view_base + 2, "componentType": 5126, "count": 3, "type": "VEC2"
        }));
        accessors.push(json!({
            "bufferView": view_base + 3, "componentType": index_type, "count": 3, "type": "SCALAR"
        }));

        materials.push(material_json(desc.color_image, desc.normal_image));
        primitives.push(json!({
            "attributes": {
                "POSITION": accessor_base,
                "NORMAL": accessor_base + 1,
                "TEXCOORD_0": accessor_base + 2
            },
            "indices": accessor_base + 3,
            "material": i
        }));
    }

    let mut root = json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0 }],
        "meshes": [{ "primitives": primitives }],
        "materials": materials,
        "buffers": buffers,
        "bufferViews": views,
        "accessors": accessors,
    });

    if image_count > 0 {
        let textures: Vec<Value> = (0..image_count).map(|i| json!({ "source": i })).collect();
        let images: Vec<Value> = (0..image_count)
            .map(|i| json!({ "uri": format!("image{}.png", i) }))
            .collect();
        root["textures"] = Value::Array(textures);
        root["images"] = Value::Array(images);
    }

    root
}

pub fn triangle_buffers(descs: &[PrimDesc]) -> Vec<gltf::buffer::Data> {
    descs
        .iter()
        .map(|desc| gltf::buffer::Data(triangle_buffer(desc.wide_indices)))
        .collect()
}

pub fn material_json(color_texture: Option<usize>, normal_texture: Option<usize>) -> Value {
    let mut material = json!({});
    if let Some(index) = color_texture {
        material["pbrMetallicRoughness"] = json!({ "baseColorTexture": { "index": index } });
    }
    if let Some(index) = normal_texture {
        material["normalTexture"] = json!({ "index": index });
    }
    material
}

/// Packed triangle geometry: positions at 0, normals at 36, texcoords at 72,
/// indices at 96. Everything little endian, as glTF requires.
pub fn triangle_buffer(wide_indices: bool) -> Vec<u8> {
    let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let normals: [f32; 9] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    let uvs: [f32; 6] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];

    let mut bytes = Vec::new();
    for value in positions.iter().chain(&normals).chain(&uvs) {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    if wide_indices {
        for index in [0u32, 1, 2] {
            bytes.extend_from_slice(&index.to_le_bytes());
        }
    } else {
        for index in [0u16, 1, 2] {
            bytes.extend_from_slice(&index.to_le_bytes());
        }
    }
    bytes
}

pub fn document_from_json(root: &Value) -> gltf::Document {
    let bytes = serde_json::to_vec(root).expect("serialize test scene");
    gltf::Gltf::from_slice(&bytes)
        .expect("test scene json should validate")
        .document
}

pub fn test_images(count: usize) -> Vec<gltf::image::Data> {
    (0..count)
        .map(|i| gltf::image::Data {
            pixels: vec![i as u8; 16],
            format: gltf::image::Format::R8G8B8A8,
            width: 2,
            height: 2,
        })
        .collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
