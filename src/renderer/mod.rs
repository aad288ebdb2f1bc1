pub mod bindings;
pub mod forward;
pub mod lights;
pub mod uniforms;
pub mod vertex;

pub use bindings::{BindingPoint, BindingTable, DIRECTIONAL_BINDINGS, POINT_BINDINGS};
pub use forward::ForwardRenderer;
pub use lights::{DirectionalLight, PointLight};
pub use uniforms::Matrices;
pub use vertex::Vertex;
