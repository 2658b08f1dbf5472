//! Render module: meshes, built-in primitives and the render context.

pub mod mesh;
pub mod primitives;
pub mod render_context;

pub use mesh::{model_matrix, Mesh, MeshInstance, MeshKey};
pub use primitives::Geometry;
pub use render_context::{
    default_shader_desc, RenderContext, DEFAULT_RENDER_COLOR, DEFAULT_SHADER_NAME,
};
