//! WebGPU rendering module
//!
//! The scene is rebuilt as a flat list of colored quads every frame and
//! drawn in a single pass through a perspective camera, lit per fragment
//! by one point light.

pub mod light;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use light::{Light, SceneUniform};
pub use pipeline::RenderState;
pub use shapes::{FOOD_STYLES, FoodStyle, build_scene};
pub use vertex::Vertex;
