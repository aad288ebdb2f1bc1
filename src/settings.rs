use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Multiplier applied to vertex positions at load time.
    #[serde(default = "RenderSettings::default_scene_scale")]
    pub scene_scale: f32,
    /// Flips texture coordinates vertically in the vertex stage, for sources
    /// authored with the origin at the bottom left.
    #[serde(default)]
    pub flip_texcoord_y: bool,
    #[serde(default = "RenderSettings::default_generate_mipmaps")]
    pub generate_mipmaps: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scene_scale: Self::default_scene_scale(),
            flip_texcoord_y: false,
            generate_mipmaps: Self::default_generate_mipmaps(),
        }
    }
}

impl RenderSettings {
    pub fn load() -> Self {
        Self::load_from_path("settings.json")
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Self {
        use std::fs;

        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RenderSettings>(&contents) {
                Ok(settings) => {
                    info!("Loaded render settings from {:?}", path);
                    settings.validate()
                }
                Err(err) => {
                    warn!(
                        "Failed to parse {:?} ({}). Falling back to default render settings.",
                        path, err
                    );
                    RenderSettings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Render settings file {:?} not found. Using default settings.",
                    path
                );
                RenderSettings::default()
            }
            Err(err) => {
                warn!(
                    "Failed to read {:?} ({}). Falling back to default render settings.",
                    path, err
                );
                RenderSettings::default()
            }
        }
    }

    fn validate(mut self) -> Self {
        if !self.scene_scale.is_finite() || self.scene_scale <= 0.0 {
            warn!("Scene scale must be finite and positive. Using 1.0 instead.");
            self.scene_scale = Self::default_scene_scale();
        }

        self
    }

    const fn default_scene_scale() -> f32 {
        1.0
    }

    const fn default_generate_mipmaps() -> bool {
        true
    }
}
