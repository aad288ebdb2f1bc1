use super::layout::VertexLayout;
use super::resources::{BufferId, IndexFormat, ShaderId, TextureFormat, TextureId};
use super::state::{AddressMode, BlendMode, CullMode, DepthMode, Filter, Topology};

/// The graphics backend the renderer runs against.
///
/// Implementations own every GPU object and all pipeline state; creation
/// returns plain ids that stay valid for the lifetime of the device. All
/// `set_*` state is global and sticky: nothing here resets it, callers
/// specify what they depend on before drawing.
///
/// `defines` entries are `"NAME value"` strings the implementation turns into
/// `#define` lines before compiling shader source.
pub trait Device {
    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        format: TextureFormat,
        pixels: &[u8],
        generate_mips: bool,
    ) -> TextureId;

    fn create_vertex_buffer(&mut self, data: &[u8]) -> BufferId;

    /// `data` keeps its native stride; `format` tells the device how wide one
    /// index is.
    fn create_index_buffer(&mut self, data: &[u8], format: IndexFormat) -> BufferId;

    fn create_shader(
        &mut self,
        layout: &VertexLayout,
        vertex_src: &str,
        fragment_src: &str,
        defines: &[String],
    ) -> ShaderId;

    fn set_shader(&mut self, shader: ShaderId);

    /// Writes `data` and binds it as the uniform block at `slot` for the
    /// currently bound shader.
    fn set_uniform_buffer(&mut self, slot: u32, data: &[u8]);

    fn set_texture(&mut self, slot: u32, texture: TextureId);

    fn set_topology(&mut self, topology: Topology);

    fn set_index_buffer(&mut self, buffer: BufferId);

    fn set_vertex_buffer(&mut self, buffer: BufferId);

    fn set_depth_mode(&mut self, mode: DepthMode);

    fn set_cull_mode(&mut self, mode: CullMode);

    fn set_sampler(&mut self, filter: Filter);

    fn set_address_mode(&mut self, mode: AddressMode);

    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Draws `index_count` indices starting at `index_offset` from the bound
    /// buffers.
    fn draw_indexed(&mut self, index_count: u32, index_offset: u32);
}
