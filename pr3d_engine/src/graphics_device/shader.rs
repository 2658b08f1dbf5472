/// Shader program trait, descriptor and uniform values

use glam::{Mat4, Vec4};

/// Descriptor for creating a linked shader program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderDesc {
    /// Debug name
    pub name: String,
    /// Vertex stage source
    pub vertex_source: String,
    /// Fragment stage source
    pub fragment_source: String,
}

/// A value written to a named uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Vec4(Vec4),
    Mat4(Mat4),
}

/// Linked shader program
pub trait Shader: Send + Sync {
    /// Debug name from the descriptor
    fn name(&self) -> &str;
}
