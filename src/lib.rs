pub mod gfx;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use gfx::Device;
pub use renderer::{DirectionalLight, ForwardRenderer, Matrices, PointLight, Vertex};
pub use scene::{Batch, RenderBuffer, SceneError, TextureBundle};
pub use settings::RenderSettings;
