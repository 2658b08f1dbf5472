/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Records every state-changing call as a string command and counts live
/// GPU objects, so tests can check both what was drawn and what was freed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::engine_bail;
use crate::error::{Pr3dError, Pr3dResult};
use crate::graphics_device::{
    Buffer, BufferDesc, BufferUsage, ClearFlags, GraphicsDevice, IndexType,
    Shader, ShaderDesc, Texture, TextureDesc, UniformValue, VertexArray, VertexLayout,
};

// ============================================================================
// Live object tracking
// ============================================================================

/// Increments a shared counter on creation, decrements it on drop.
///
/// Tokens of objects with a data store also hand their bytes back to the
/// device's allocation total when dropped.
#[derive(Debug)]
pub struct LiveToken {
    counter: Arc<AtomicUsize>,
    allocation: Option<(Arc<AtomicUsize>, usize)>,
}

impl LiveToken {
    fn new(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter: counter.clone(), allocation: None }
    }

    fn with_bytes(counter: &Arc<AtomicUsize>, allocated: &Arc<AtomicUsize>, bytes: usize) -> Self {
        let mut token = Self::new(counter);
        token.allocation = Some((allocated.clone(), bytes));
        token
    }
}

impl Drop for LiveToken {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
        if let Some((allocated, bytes)) = &self.allocation {
            allocated.fetch_sub(*bytes, Ordering::SeqCst);
        }
    }
}

// ============================================================================
// Mock resources
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub size: u64,
    pub usage: BufferUsage,
    pub data: Vec<u8>,
    _live: LiveToken,
}

impl Buffer for MockBuffer {
    fn size(&self) -> u64 {
        self.size
    }

    fn usage(&self) -> BufferUsage {
        self.usage
    }
}

#[derive(Debug)]
pub struct MockVertexArray {
    pub layout: VertexLayout,
    pub indexed: bool,
    _live: LiveToken,
}

impl VertexArray for MockVertexArray {
    fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    fn is_indexed(&self) -> bool {
        self.indexed
    }
}

#[derive(Debug)]
pub struct MockTexture {
    pub desc: TextureDesc,
    _live: LiveToken,
}

impl Texture for MockTexture {
    fn desc(&self) -> &TextureDesc {
        &self.desc
    }
}

#[derive(Debug)]
pub struct MockShader {
    pub name: String,
    _live: LiveToken,
}

impl Shader for MockShader {
    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that tracks commands and live objects without a GPU
#[derive(Debug, Clone)]
pub struct MockGraphicsDevice {
    /// Recorded commands, in call order
    pub commands: Arc<Mutex<Vec<String>>>,
    /// Number of buffers, vertex arrays, textures and shaders still alive
    pub live_objects: Arc<AtomicUsize>,
    /// Bytes of buffer and texture data held by live objects
    pub allocated_bytes: Arc<AtomicUsize>,
    /// Allocation fails with `OutOfMemory` past this many bytes
    pub memory_limit: Option<usize>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            live_objects: Arc::new(AtomicUsize::new(0)),
            allocated_bytes: Arc::new(AtomicUsize::new(0)),
            memory_limit: None,
        }
    }

    /// A device that refuses allocations beyond `bytes`
    pub fn with_memory_limit(bytes: usize) -> Self {
        Self { memory_limit: Some(bytes), ..Self::new() }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub fn clear_commands(&self) {
        self.commands.lock().unwrap().clear();
    }

    /// Number of recorded commands starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.commands.lock().unwrap().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn live_objects(&self) -> usize {
        self.live_objects.load(Ordering::SeqCst)
    }

    pub fn allocated_bytes(&self) -> usize {
        self.allocated_bytes.load(Ordering::SeqCst)
    }

    fn record(&self, command: String) {
        self.commands.lock().unwrap().push(command);
    }

    fn reserve(&self, bytes: usize) -> Pr3dResult<()> {
        let total = self.allocated_bytes.load(Ordering::SeqCst) + bytes;
        if let Some(limit) = self.memory_limit {
            if total > limit {
                return Err(Pr3dError::OutOfMemory);
            }
        }
        self.allocated_bytes.store(total, Ordering::SeqCst);
        Ok(())
    }
}

impl Default for MockGraphicsDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_buffer(&mut self, desc: BufferDesc, data: &[u8]) -> Pr3dResult<Arc<dyn Buffer>> {
        if data.len() as u64 != desc.size {
            engine_bail!("pr3d::mock",
                "create_buffer: data length {} does not match size {}", data.len(), desc.size);
        }
        self.reserve(data.len())?;
        self.record(format!("create_buffer {:?} {}", desc.usage, desc.size));
        Ok(Arc::new(MockBuffer {
            size: desc.size,
            usage: desc.usage,
            data: data.to_vec(),
            _live: LiveToken::with_bytes(&self.live_objects, &self.allocated_bytes, data.len()),
        }))
    }

    fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        vertex_buffer: &Arc<dyn Buffer>,
        index_buffer: Option<&Arc<dyn Buffer>>,
    ) -> Pr3dResult<Arc<dyn VertexArray>> {
        if vertex_buffer.usage() != BufferUsage::Vertex {
            engine_bail!("pr3d::mock", "create_vertex_array: vertex buffer has usage {:?}",
                vertex_buffer.usage());
        }
        if let Some(index_buffer) = index_buffer {
            if index_buffer.usage() != BufferUsage::Index {
                engine_bail!("pr3d::mock", "create_vertex_array: index buffer has usage {:?}",
                    index_buffer.usage());
            }
        }
        self.record(format!("create_vertex_array stride={} indexed={}",
            layout.stride, index_buffer.is_some()));
        Ok(Arc::new(MockVertexArray {
            layout: layout.clone(),
            indexed: index_buffer.is_some(),
            _live: LiveToken::new(&self.live_objects),
        }))
    }

    fn create_texture(&mut self, desc: TextureDesc, pixels: &[u8]) -> Pr3dResult<Arc<dyn Texture>> {
        self.reserve(pixels.len())?;
        self.record(format!("create_texture {}x{}", desc.width, desc.height));
        Ok(Arc::new(MockTexture {
            desc,
            _live: LiveToken::with_bytes(&self.live_objects, &self.allocated_bytes, pixels.len()),
        }))
    }

    fn create_shader(&mut self, desc: ShaderDesc) -> Pr3dResult<Arc<dyn Shader>> {
        if desc.vertex_source.is_empty() || desc.fragment_source.is_empty() {
            engine_bail!("pr3d::mock", "create_shader: '{}' has an empty stage", desc.name);
        }
        self.record(format!("create_shader {}", desc.name));
        Ok(Arc::new(MockShader {
            name: desc.name,
            _live: LiveToken::new(&self.live_objects),
        }))
    }

    fn use_shader(&mut self, shader: &Arc<dyn Shader>) -> Pr3dResult<()> {
        self.record(format!("use_shader {}", shader.name()));
        Ok(())
    }

    fn set_uniform(&mut self, shader: &Arc<dyn Shader>, name: &str, value: UniformValue) -> Pr3dResult<()> {
        let kind = match value {
            UniformValue::Bool(v) => format!("bool {}", v),
            UniformValue::Int(v) => format!("int {}", v),
            UniformValue::Vec4(v) => format!("vec4 {:?}", v.to_array()),
            UniformValue::Mat4(_) => "mat4".to_string(),
        };
        self.record(format!("set_uniform {} {} {}", shader.name(), name, kind));
        Ok(())
    }

    fn bind_texture(&mut self, unit: u32, texture: Option<&Arc<dyn Texture>>) -> Pr3dResult<()> {
        match texture {
            Some(t) => self.record(format!("bind_texture {} {}x{}", unit, t.desc().width, t.desc().height)),
            None => self.record(format!("bind_texture {} none", unit)),
        }
        Ok(())
    }

    fn clear(&mut self, color: [f32; 4], flags: ClearFlags) -> Pr3dResult<()> {
        self.record(format!("clear {:?} {:?}", color, flags));
        Ok(())
    }

    fn draw(&mut self, _vertex_array: &Arc<dyn VertexArray>, first_vertex: u32, vertex_count: u32) -> Pr3dResult<()> {
        self.record(format!("draw {} {}", first_vertex, vertex_count));
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        vertex_array: &Arc<dyn VertexArray>,
        index_type: IndexType,
        index_count: u32,
    ) -> Pr3dResult<()> {
        if !vertex_array.is_indexed() {
            engine_bail!("pr3d::mock", "draw_indexed on a vertex array without index buffer");
        }
        self.record(format!("draw_indexed {:?} {}", index_type, index_count));
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
