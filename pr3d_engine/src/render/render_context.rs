/// RenderContext - explicit owner of all rendering state.
///
/// Holds the graphics device, the mesh arena, the built-in default shader
/// and whichever shader is currently active. Every draw goes through
/// `&mut self`, so there is no hidden global GL state to fall out of sync.

use std::sync::Arc;
use glam::{Mat4, Vec3, Vec4};
use slotmap::SlotMap;
use crate::camera::Camera;
use crate::error::Pr3dResult;
use crate::graphics_device::{
    BufferDesc, BufferUsage, ClearFlags, GraphicsDevice, IndexType,
    Shader, ShaderDesc, Texture, TextureDesc, UniformValue, VertexArray, ATTRIB_COLOR,
};
use crate::{engine_bail, engine_debug, engine_err, engine_info, engine_trace};
use super::mesh::{model_matrix, Mesh, MeshInstance, MeshKey};
use super::primitives::{self, Geometry};

const SOURCE: &str = "pr3d::Render";

/// Name given to the built-in shader
pub const DEFAULT_SHADER_NAME: &str = "pr3d_default";

/// Render color in effect after `RenderContext::new`
pub const DEFAULT_RENDER_COLOR: Vec4 = Vec4::ONE;

const DEFAULT_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 a_position;
layout (location = 1) in vec4 a_color;
layout (location = 2) in vec2 a_uv;

uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;

out vec4 v_color;
out vec2 v_uv;

void main()
{
    gl_Position = projection * view * model * vec4(a_position, 1.0);
    v_color = a_color;
    v_uv = a_uv;
}
"#;

const DEFAULT_FRAGMENT_SHADER: &str = r#"#version 330 core
in vec4 v_color;
in vec2 v_uv;

uniform vec4 u_color;
uniform bool u_use_vertex_color;
uniform bool u_use_texture;
uniform sampler2D u_texture;

out vec4 frag_color;

void main()
{
    vec4 color = u_use_vertex_color ? v_color : u_color;
    if (u_use_texture)
        color *= texture(u_texture, v_uv);
    frag_color = color;
}
"#;

/// Shader sources of the built-in shader, for callers deriving their own
pub fn default_shader_desc() -> ShaderDesc {
    ShaderDesc {
        name: DEFAULT_SHADER_NAME.to_string(),
        vertex_source: DEFAULT_VERTEX_SHADER.to_string(),
        fragment_source: DEFAULT_FRAGMENT_SHADER.to_string(),
    }
}

/// Rendering state bound to one graphics device
pub struct RenderContext {
    device: Box<dyn GraphicsDevice>,
    meshes: SlotMap<MeshKey, Mesh>,
    default_shader: Arc<dyn Shader>,
    /// `None` while the default shader is active
    custom_shader: Option<Arc<dyn Shader>>,
    render_color: Vec4,
}

impl RenderContext {
    /// Build the default shader on `device` and make it active
    pub fn new(mut device: Box<dyn GraphicsDevice>) -> Pr3dResult<Self> {
        let default_shader = device
            .create_shader(default_shader_desc())
            .map_err(|e| engine_err!(SOURCE, InitializationFailed;
                "Failed to build default shader: {}", e))?;

        device.use_shader(&default_shader)?;
        device.set_uniform(&default_shader, "u_color", UniformValue::Vec4(DEFAULT_RENDER_COLOR))?;
        device.set_uniform(&default_shader, "u_texture", UniformValue::Int(0))?;

        engine_info!(SOURCE, "Render context ready (default shader '{}')", default_shader.name());

        Ok(Self {
            device,
            meshes: SlotMap::with_key(),
            default_shader,
            custom_shader: None,
            render_color: DEFAULT_RENDER_COLOR,
        })
    }

    // ===== SCREEN =====

    /// Clear color and depth with the given color (components in 0..=1)
    pub fn clear_screen(&mut self, r: f32, g: f32, b: f32, a: f32) -> Pr3dResult<()> {
        self.device.clear([r, g, b, a], ClearFlags::COLOR | ClearFlags::DEPTH)
    }

    /// Set the flat color used by the default shader
    ///
    /// Fails with `ShaderMismatch` while a custom shader is active, since its
    /// uniforms are unknown.
    pub fn set_render_color(&mut self, r: f32, g: f32, b: f32, a: f32) -> Pr3dResult<()> {
        if let Some(shader) = &self.custom_shader {
            engine_bail!(SOURCE, ShaderMismatch;
                "set_render_color requires the default shader, '{}' is active", shader.name());
        }
        let color = Vec4::new(r, g, b, a);
        self.device.set_uniform(&self.default_shader, "u_color", UniformValue::Vec4(color))?;
        self.render_color = color;
        Ok(())
    }

    pub fn render_color(&self) -> Vec4 {
        self.render_color
    }

    // ===== SHADERS =====

    /// Compile a shader program on the device
    pub fn create_shader(&mut self, desc: ShaderDesc) -> Pr3dResult<Arc<dyn Shader>> {
        let name = desc.name.clone();
        let shader = self.device.create_shader(desc)?;
        engine_debug!(SOURCE, "Created shader '{}'", name);
        Ok(shader)
    }

    /// Make `shader` active for subsequent draws
    ///
    /// Passing the context's own default shader is the same as
    /// `use_default_shader`.
    pub fn use_shader(&mut self, shader: Arc<dyn Shader>) -> Pr3dResult<()> {
        if Arc::ptr_eq(&shader, &self.default_shader) {
            return self.use_default_shader();
        }
        self.device.use_shader(&shader)?;
        engine_trace!(SOURCE, "Using shader '{}'", shader.name());
        self.custom_shader = Some(shader);
        Ok(())
    }

    /// Switch back to the built-in shader
    pub fn use_default_shader(&mut self) -> Pr3dResult<()> {
        self.device.use_shader(&self.default_shader)?;
        self.custom_shader = None;
        Ok(())
    }

    pub fn is_default_shader_active(&self) -> bool {
        self.custom_shader.is_none()
    }

    pub fn default_shader(&self) -> &Arc<dyn Shader> {
        &self.default_shader
    }

    pub fn active_shader(&self) -> &Arc<dyn Shader> {
        self.custom_shader.as_ref().unwrap_or(&self.default_shader)
    }

    // ===== MESH CREATION =====

    /// Triangle with the given corner positions
    pub fn create_triangle(&mut self, vertices: [Vec3; 3]) -> Pr3dResult<MeshKey> {
        self.upload("triangle", primitives::triangle(vertices))
    }

    /// Triangle with a per-vertex RGB color
    pub fn create_triangle_vertex_color(&mut self, vertices: [Vec3; 3], colors: [Vec3; 3]) -> Pr3dResult<MeshKey> {
        self.upload("triangle_vertex_color", primitives::triangle_vertex_color(vertices, colors))
    }

    /// Unit quad with texture coordinates; attach a texture before drawing
    pub fn create_rectangle(&mut self) -> Pr3dResult<MeshKey> {
        self.upload("rectangle", primitives::rectangle())
    }

    /// Unit quad with per-corner RGBA colors
    pub fn create_rectangle_vertex_color(&mut self, colors: [Vec4; 4]) -> Pr3dResult<MeshKey> {
        self.upload("rectangle_vertex_color", primitives::rectangle_vertex_color(colors))
    }

    /// Unit cube with texture coordinates; attach a texture before drawing
    pub fn create_cube(&mut self) -> Pr3dResult<MeshKey> {
        self.upload("cube", primitives::cube())
    }

    fn upload(&mut self, name: &str, geometry: Geometry) -> Pr3dResult<MeshKey> {
        let vertex_bytes = geometry.vertex_bytes();
        let vertex_buffer = self.device.create_buffer(
            BufferDesc { size: vertex_bytes.len() as u64, usage: BufferUsage::Vertex },
            vertex_bytes,
        )?;

        let index_buffer = match geometry.index_bytes() {
            Some(bytes) => Some(self.device.create_buffer(
                BufferDesc { size: bytes.len() as u64, usage: BufferUsage::Index },
                bytes,
            )?),
            None => None,
        };

        let vertex_array = self.device.create_vertex_array(
            &geometry.layout,
            &vertex_buffer,
            index_buffer.as_ref(),
        )?;

        let key = self.meshes.insert(Mesh {
            vertex_count: geometry.vertex_count(),
            index_count: geometry.index_count(),
            vertex_buffer,
            vertex_array,
            index_buffer,
            texture: None,
        });

        engine_debug!(SOURCE, "Created {} mesh {:?} ({} vertices, {} indices)",
            name, key, geometry.vertex_count(), geometry.index_count());
        Ok(key)
    }

    // ===== TEXTURES =====

    /// Upload a 2D texture; `pixels` must hold exactly `desc.data_size()` bytes
    pub fn create_texture(&mut self, desc: TextureDesc, pixels: &[u8]) -> Pr3dResult<Arc<dyn Texture>> {
        if desc.width == 0 || desc.height == 0 {
            engine_bail!(SOURCE, InvalidParameter;
                "Texture size {}x{} must be non-zero", desc.width, desc.height);
        }
        if pixels.len() as u64 != desc.data_size() {
            engine_bail!(SOURCE, InvalidParameter;
                "Texture {}x{} {:?} needs {} bytes, got {}",
                desc.width, desc.height, desc.format, desc.data_size(), pixels.len());
        }
        self.device.create_texture(desc, pixels)
    }

    /// Attach `texture` to a mesh, replacing any previous one
    pub fn attach_texture(&mut self, key: MeshKey, texture: Arc<dyn Texture>) -> Pr3dResult<()> {
        let mesh = self.mesh_mut(key)?;
        mesh.texture = Some(texture);
        Ok(())
    }

    /// Remove the texture from a mesh, returning it
    pub fn detach_texture(&mut self, key: MeshKey) -> Pr3dResult<Option<Arc<dyn Texture>>> {
        Ok(self.mesh_mut(key)?.texture.take())
    }

    // ===== MESH ACCESS / DELETION =====

    pub fn mesh(&self, key: MeshKey) -> Option<&Mesh> {
        self.meshes.get(key)
    }

    pub fn contains_mesh(&self, key: MeshKey) -> bool {
        self.meshes.contains_key(key)
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Delete a mesh and release its GPU objects
    ///
    /// The key (and any copy of it) is invalid afterwards.
    pub fn delete_mesh(&mut self, key: MeshKey) -> Pr3dResult<()> {
        match self.meshes.remove(key) {
            Some(mesh) => {
                engine_debug!(SOURCE, "Deleted mesh {:?}", key);
                drop(mesh);
                Ok(())
            }
            None => engine_bail!(SOURCE, InvalidResource; "Mesh {:?} does not exist", key),
        }
    }

    fn mesh_mut(&mut self, key: MeshKey) -> Pr3dResult<&mut Mesh> {
        self.meshes
            .get_mut(key)
            .ok_or_else(|| engine_err!(SOURCE, InvalidResource; "Mesh {:?} does not exist", key))
    }

    // ===== DRAWING =====

    /// Draw a mesh at `position`, rotated `degrees` about `rotation_axis`, then scaled
    pub fn render_mesh(
        &mut self,
        camera: &Camera,
        key: MeshKey,
        position: Vec3,
        rotation_axis: Vec3,
        degrees: f32,
        scale: Vec3,
    ) -> Pr3dResult<()> {
        let model = model_matrix(position, rotation_axis, degrees, scale)?;
        self.draw(camera, key, &model)
    }

    /// Draw a placed instance with its own transform
    pub fn render_instance(&mut self, camera: &Camera, instance: &MeshInstance) -> Pr3dResult<()> {
        self.draw(camera, instance.mesh, &instance.transform)
    }

    fn draw(&mut self, camera: &Camera, key: MeshKey, model: &Mat4) -> Pr3dResult<()> {
        let Some(mesh) = self.meshes.get(key) else {
            engine_bail!(SOURCE, InvalidResource; "Cannot draw mesh {:?}: it does not exist", key);
        };
        let shader = self.custom_shader.as_ref().unwrap_or(&self.default_shader);
        let device = &mut self.device;

        device.set_uniform(shader, "model", UniformValue::Mat4(*model))?;
        device.set_uniform(shader, "view", UniformValue::Mat4(*camera.view_matrix()))?;
        device.set_uniform(shader, "projection", UniformValue::Mat4(*camera.projection_matrix()))?;

        if self.custom_shader.is_none() {
            let vertex_color = mesh.vertex_array.layout().has_attribute(ATTRIB_COLOR);
            device.set_uniform(shader, "u_use_vertex_color", UniformValue::Bool(vertex_color))?;
            device.set_uniform(shader, "u_use_texture", UniformValue::Bool(mesh.texture.is_some()))?;
        }
        device.bind_texture(0, mesh.texture.as_ref())?;

        if mesh.index_buffer.is_some() {
            device.draw_indexed(&mesh.vertex_array, IndexType::U32, mesh.index_count)
        } else {
            device.draw(&mesh.vertex_array, 0, mesh.vertex_count)
        }
    }
}

#[cfg(test)]
#[path = "render_context_tests.rs"]
mod tests;
