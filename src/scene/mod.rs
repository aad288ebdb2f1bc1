mod accessor;
pub mod batch;
pub mod builder;
pub mod error;
pub mod texture;

pub use batch::{Batch, RenderBuffer, TextureBundle};
pub use builder::{build, load};
pub use error::SceneError;
pub use texture::TextureCache;
