//! Shader binding slots.
//!
//! Each shader declares an ordered table of binding points; a point's position
//! in the table is its slot. The same table produces the preprocessor defines
//! compiled into the shader and answers the host's slot lookups, so shader
//! text and host code cannot disagree about slot numbers. The two light
//! shaders deliberately keep separate tables: nothing guarantees a slot means
//! the same thing under both.

/// Semantic name for one bound resource of a light shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingPoint {
    ColorTexture,
    NormalTexture,
    MatricesUniform,
    DirectionalLightUniform,
    PointLightUniform,
}

impl BindingPoint {
    pub fn define_name(self) -> &'static str {
        match self {
            BindingPoint::ColorTexture => "COLOR_TEXTURE_BINDING",
            BindingPoint::NormalTexture => "NORMAL_TEXTURE_BINDING",
            BindingPoint::MatricesUniform => "MATRICES_UNIFORM_BINDING",
            BindingPoint::DirectionalLightUniform => "DIRECTIONAL_LIGHT_UNIFORM_BINDING",
            BindingPoint::PointLightUniform => "POINT_LIGHT_UNIFORM_BINDING",
        }
    }
}

/// Ordered binding points of one shader.
#[derive(Debug, Clone, Copy)]
pub struct BindingTable {
    points: &'static [BindingPoint],
}

pub const DIRECTIONAL_BINDINGS: BindingTable = BindingTable {
    points: &[
        BindingPoint::ColorTexture,
        BindingPoint::NormalTexture,
        BindingPoint::MatricesUniform,
        BindingPoint::DirectionalLightUniform,
    ],
};

pub const POINT_BINDINGS: BindingTable = BindingTable {
    points: &[
        BindingPoint::ColorTexture,
        BindingPoint::NormalTexture,
        BindingPoint::MatricesUniform,
        BindingPoint::PointLightUniform,
    ],
};

impl BindingTable {
    /// Slot of `point` in this table. Asking for a point the table does not
    /// contain is a table-construction bug.
    pub fn slot(&self, point: BindingPoint) -> u32 {
        self.points
            .iter()
            .position(|p| *p == point)
            .unwrap_or_else(|| panic!("binding table has no {:?}", point)) as u32
    }

    /// `"<NAME> <slot>"` defines for shader compilation.
    pub fn defines(&self) -> Vec<String> {
        self.points
            .iter()
            .enumerate()
            .map(|(slot, point)| format!("{} {}", point.define_name(), slot))
            .collect()
    }
}
