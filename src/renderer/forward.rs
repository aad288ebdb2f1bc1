use crate::gfx::{
    AddressMode, BlendMode, CompareFunc, CullMode, DepthMode, Device, Filter, ShaderId,
    VertexLayout,
};
use crate::settings::RenderSettings;

use super::bindings::{BindingPoint, BindingTable, DIRECTIONAL_BINDINGS, POINT_BINDINGS};
use super::lights::{DirectionalLight, DirectionalLightRaw, PointLight, PointLightRaw};
use super::uniforms::{Matrices, MatricesRaw};

const VERTEX_SHADER: &str = include_str!("../shader/forward.vert");
const DIRECTIONAL_FRAGMENT_SHADER: &str = include_str!("../shader/directional_light.frag");
const POINT_FRAGMENT_SHADER: &str = include_str!("../shader/point_light.frag");

/// A compiled light shader together with the binding table it was compiled
/// against. Directional and point passes differ only in this pairing and in
/// the uniform payload they carry.
#[derive(Debug, Clone, Copy)]
struct LightPass {
    shader: ShaderId,
    bindings: BindingTable,
    light_binding: BindingPoint,
}

impl LightPass {
    fn run<D: Device>(
        &self,
        device: &mut D,
        draw_geometry: &mut impl FnMut(&mut D, u32, u32),
        matrices: &MatricesRaw,
        light: &[u8],
    ) {
        device.set_shader(self.shader);
        device.set_uniform_buffer(
            self.bindings.slot(BindingPoint::MatricesUniform),
            bytemuck::bytes_of(matrices),
        );
        device.set_uniform_buffer(self.bindings.slot(self.light_binding), light);

        draw_geometry(
            device,
            self.bindings.slot(BindingPoint::ColorTexture),
            self.bindings.slot(BindingPoint::NormalTexture),
        );
    }
}

/// Multi-pass forward lighting driver.
///
/// Each frame renders the scene once per light: an opaque pass for the single
/// directional light, then one additive pass per point light. The caller
/// supplies the geometry callback that issues the actual batch draws; the
/// driver owns shader selection, uniform updates and pipeline state.
pub struct ForwardRenderer {
    directional: LightPass,
    point: LightPass,
}

impl ForwardRenderer {
    pub fn new<D: Device>(
        device: &mut D,
        layout: &VertexLayout,
        settings: &RenderSettings,
    ) -> Self {
        let directional = LightPass {
            shader: compile_light_shader(
                device,
                layout,
                DIRECTIONAL_FRAGMENT_SHADER,
                &DIRECTIONAL_BINDINGS,
                settings,
            ),
            bindings: DIRECTIONAL_BINDINGS,
            light_binding: BindingPoint::DirectionalLightUniform,
        };

        let point = LightPass {
            shader: compile_light_shader(
                device,
                layout,
                POINT_FRAGMENT_SHADER,
                &POINT_BINDINGS,
                settings,
            ),
            bindings: POINT_BINDINGS,
            light_binding: BindingPoint::PointLightUniform,
        };

        log::info!(
            "Compiled forward light shaders (flip_texcoord_y: {})",
            settings.flip_texcoord_y
        );

        Self { directional, point }
    }

    /// Draws one frame.
    ///
    /// `draw_geometry` is invoked once per pass with the color and normal
    /// texture slots of the shader bound for that pass; it must draw every
    /// batch. Cost is O(lights x batches). The driver sets every piece of
    /// state it depends on, so callers interleaving other rendering only need
    /// to restore state they clobber mid-frame, not between frames.
    pub fn draw<D: Device>(
        &self,
        device: &mut D,
        mut draw_geometry: impl FnMut(&mut D, u32, u32),
        matrices: &Matrices,
        directional_light: &DirectionalLight,
        point_lights: &[PointLight],
    ) {
        let matrices_raw = MatricesRaw::from_data(matrices);
        let directional_raw = DirectionalLightRaw::from_data(directional_light);

        device.set_depth_mode(DepthMode {
            compare: CompareFunc::LessEqual,
        });
        device.set_cull_mode(CullMode::Front);
        device.set_sampler(Filter::Linear);
        device.set_address_mode(AddressMode::Wrap);
        device.set_blend_mode(BlendMode::Opaque);

        self.directional.run(
            device,
            &mut draw_geometry,
            &matrices_raw,
            bytemuck::bytes_of(&directional_raw),
        );

        // Additive from here on, whether or not any point light follows.
        device.set_blend_mode(BlendMode::Additive);

        for light in point_lights {
            let light_raw = PointLightRaw::from_data(light);
            self.point.run(
                device,
                &mut draw_geometry,
                &matrices_raw,
                bytemuck::bytes_of(&light_raw),
            );
        }
    }
}

fn compile_light_shader<D: Device>(
    device: &mut D,
    layout: &VertexLayout,
    fragment_src: &str,
    bindings: &BindingTable,
    settings: &RenderSettings,
) -> ShaderId {
    let mut defines = layout.location_defines();
    defines.extend(bindings.defines());
    if settings.flip_texcoord_y {
        defines.push("FLIP_TEXCOORD_Y 1".to_string());
    }

    device.create_shader(layout, VERTEX_SHADER, fragment_src, &defines)
}
