/// GraphicsDevice trait - the boundary to the graphics driver
///
/// A device wraps one current graphics context (an OpenGL context in the
/// reference backend). It is not `Send`: every call must come from the thread
/// that owns the context, which `RenderContext` enforces by owning the device
/// behind `&mut self`.

use std::sync::Arc;
use bitflags::bitflags;
use crate::error::Pr3dResult;
use super::{
    Buffer, BufferDesc, IndexType,
    VertexArray, VertexLayout,
    Texture, TextureDesc,
    Shader, ShaderDesc, UniformValue,
};

bitflags! {
    /// Framebuffer planes cleared by `GraphicsDevice::clear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Graphics driver interface
///
/// Resource factories return shared handles; the backend releases the GPU
/// object when the last handle is dropped.
pub trait GraphicsDevice {
    /// Create a buffer and upload `data` into it
    ///
    /// `data.len()` must equal `desc.size`.
    fn create_buffer(&mut self, desc: BufferDesc, data: &[u8]) -> Pr3dResult<Arc<dyn Buffer>>;

    /// Create a vertex array describing how `vertex_buffer` is read
    fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        vertex_buffer: &Arc<dyn Buffer>,
        index_buffer: Option<&Arc<dyn Buffer>>,
    ) -> Pr3dResult<Arc<dyn VertexArray>>;

    /// Create a 2D texture from tightly packed pixel rows
    fn create_texture(&mut self, desc: TextureDesc, pixels: &[u8]) -> Pr3dResult<Arc<dyn Texture>>;

    /// Compile and link a shader program
    fn create_shader(&mut self, desc: ShaderDesc) -> Pr3dResult<Arc<dyn Shader>>;

    /// Make `shader` the program used by subsequent draws
    fn use_shader(&mut self, shader: &Arc<dyn Shader>) -> Pr3dResult<()>;

    /// Write a uniform of `shader`
    ///
    /// Unknown uniform names are ignored, matching GL's location -1 behavior.
    fn set_uniform(&mut self, shader: &Arc<dyn Shader>, name: &str, value: UniformValue) -> Pr3dResult<()>;

    /// Bind (or unbind with `None`) a texture on a texture unit
    fn bind_texture(&mut self, unit: u32, texture: Option<&Arc<dyn Texture>>) -> Pr3dResult<()>;

    /// Clear the selected planes of the current framebuffer
    fn clear(&mut self, color: [f32; 4], flags: ClearFlags) -> Pr3dResult<()>;

    /// Draw `vertex_count` vertices starting at `first_vertex` as a triangle list
    fn draw(&mut self, vertex_array: &Arc<dyn VertexArray>, first_vertex: u32, vertex_count: u32) -> Pr3dResult<()>;

    /// Draw `index_count` indices from the attached index buffer as a triangle list
    fn draw_indexed(
        &mut self,
        vertex_array: &Arc<dyn VertexArray>,
        index_type: IndexType,
        index_count: u32,
    ) -> Pr3dResult<()>;
}
