use std::fmt;

/// Fatal scene-load failures. Loading is one-shot: the first error aborts the
/// whole build and nothing renders. The one non-error case worth knowing
/// about is a primitive without a base color texture, which is skipped with
/// a debug log rather than reported as a failure.
#[derive(Debug)]
pub enum SceneError {
    /// The glTF importer itself failed.
    Gltf(gltf::Error),
    /// A referenced accessor, buffer view, buffer, attribute or topology
    /// cannot be resolved against the source scene.
    MalformedScene(String),
    /// Index accessor uses a component type other than u16 or u32.
    UnsupportedIndexWidth(gltf::accessor::DataType),
    /// Image index out of range of the imported image table.
    InvalidTextureReference { index: usize, image_count: usize },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Gltf(err) => write!(f, "glTF import failed: {}", err),
            SceneError::MalformedScene(detail) => write!(f, "malformed scene: {}", detail),
            SceneError::UnsupportedIndexWidth(data_type) => {
                write!(f, "unsupported index component type {:?}", data_type)
            }
            SceneError::InvalidTextureReference { index, image_count } => {
                write!(
                    f,
                    "image index {} out of range ({} images in scene)",
                    index, image_count
                )
            }
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Gltf(err) => Some(err),
            _ => None,
        }
    }
}

impl From<gltf::Error> for SceneError {
    fn from(err: gltf::Error) -> Self {
        SceneError::Gltf(err)
    }
}
