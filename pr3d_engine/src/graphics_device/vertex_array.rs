/// Vertex layouts and the vertex array (VAO) trait
///
/// All layouts are single interleaved buffers. Attribute locations are fixed
/// so that every layout works with the default shader:
///
/// | location | attribute |
/// |----------|-----------|
/// | 0        | position  |
/// | 1        | color     |
/// | 2        | uv        |

use super::buffer::BufferFormat;

/// Shader location of the position attribute
pub const ATTRIB_POSITION: u32 = 0;
/// Shader location of the per-vertex color attribute
pub const ATTRIB_COLOR: u32 = 1;
/// Shader location of the texture coordinate attribute
pub const ATTRIB_UV: u32 = 2;

/// Vertex attribute description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute location in shader
    pub location: u32,
    /// Format of the attribute (component count)
    pub format: BufferFormat,
    /// Offset in bytes from the start of the vertex
    pub offset: u32,
}

/// Interleaved vertex layout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexLayout {
    /// Stride in bytes between consecutive vertices
    pub stride: u32,
    /// Vertex attributes
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Build a tightly packed layout from `(location, format)` pairs.
    pub fn packed(attributes: &[(u32, BufferFormat)]) -> Self {
        let mut offset = 0;
        let attributes = attributes
            .iter()
            .map(|&(location, format)| {
                let attribute = VertexAttribute { location, format, offset };
                offset += format.size_bytes();
                attribute
            })
            .collect();
        Self { stride: offset, attributes }
    }

    /// `vec3 position`
    pub fn position() -> Self {
        Self::packed(&[(ATTRIB_POSITION, BufferFormat::R32G32B32_SFLOAT)])
    }

    /// `vec3 position, vec3 color`
    pub fn position_color() -> Self {
        Self::packed(&[
            (ATTRIB_POSITION, BufferFormat::R32G32B32_SFLOAT),
            (ATTRIB_COLOR, BufferFormat::R32G32B32_SFLOAT),
        ])
    }

    /// `vec3 position, vec2 uv`
    pub fn position_uv() -> Self {
        Self::packed(&[
            (ATTRIB_POSITION, BufferFormat::R32G32B32_SFLOAT),
            (ATTRIB_UV, BufferFormat::R32G32_SFLOAT),
        ])
    }

    /// `vec3 position, vec4 color, vec2 uv`
    pub fn position_color_uv() -> Self {
        Self::packed(&[
            (ATTRIB_POSITION, BufferFormat::R32G32B32_SFLOAT),
            (ATTRIB_COLOR, BufferFormat::R32G32B32A32_SFLOAT),
            (ATTRIB_UV, BufferFormat::R32G32_SFLOAT),
        ])
    }

    /// Whether an attribute is bound at `location`
    pub fn has_attribute(&self, location: u32) -> bool {
        self.attributes.iter().any(|a| a.location == location)
    }
}

/// Vertex array object: a vertex buffer, its layout and an optional index buffer.
pub trait VertexArray: Send + Sync {
    /// Layout the array was created with
    fn layout(&self) -> &VertexLayout;

    /// Whether an index buffer is attached
    fn is_indexed(&self) -> bool;
}

#[cfg(test)]
#[path = "vertex_array_tests.rs"]
mod tests;
