// gfx/mod.rs - the consumed graphics backend interface

pub mod device;
pub mod layout;
pub mod resources;
pub mod state;

pub use device::Device;
pub use layout::{VertexAttribute, VertexFormat, VertexLayout, VertexSemantic};
pub use resources::{BufferId, IndexFormat, ShaderId, TextureFormat, TextureId};
pub use state::{AddressMode, BlendMode, CompareFunc, CullMode, DepthMode, Filter, Topology};
