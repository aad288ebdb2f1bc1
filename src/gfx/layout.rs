/// Meaning of one vertex attribute. Shader sources address attributes through
/// the matching `*_LOCATION` define rather than hard-coded locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexSemantic {
    Position,
    Normal,
    TexCoord,
}

impl VertexSemantic {
    pub fn define_name(self) -> &'static str {
        match self {
            VertexSemantic::Position => "POSITION_LOCATION",
            VertexSemantic::Normal => "NORMAL_LOCATION",
            VertexSemantic::TexCoord => "TEXCOORD_LOCATION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFormat {
    Float32x2,
    Float32x3,
}

impl VertexFormat {
    /// Size of one attribute value in bytes.
    pub fn size(self) -> u32 {
        match self {
            VertexFormat::Float32x2 => 8,
            VertexFormat::Float32x3 => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub semantic: VertexSemantic,
    pub format: VertexFormat,
    pub offset: u32,
}

/// Describes one interleaved vertex buffer. Attribute order assigns shader
/// locations: attribute `i` lives at location `i`.
#[derive(Debug, Clone)]
pub struct VertexLayout<'a> {
    pub stride: u32,
    pub attributes: &'a [VertexAttribute],
}

impl VertexLayout<'_> {
    /// One `"<NAME> <location>"` define per attribute, handed to shader
    /// compilation so source and layout cannot drift apart.
    pub fn location_defines(&self) -> Vec<String> {
        self.attributes
            .iter()
            .enumerate()
            .map(|(location, attr)| format!("{} {}", attr.semantic.define_name(), location))
            .collect()
    }
}
