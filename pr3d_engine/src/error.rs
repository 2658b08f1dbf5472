//! Error types for the PR3D engine
//!
//! Every fallible operation (camera parameters, mesh lookups, shader state,
//! backend calls) reports through this single error type.

use std::fmt;

/// Result type for PR3D engine operations
pub type Pr3dResult<T> = Result<T, Pr3dError>;

/// PR3D engine errors
#[derive(Debug, Clone)]
pub enum Pr3dError {
    /// Backend-specific error (graphics driver, windowing system)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (stale mesh key, deleted mesh, malformed texture data)
    InvalidResource(String),

    /// A parameter was outside its valid range (fov, aspect ratio, axis)
    InvalidParameter(String),

    /// An operation required the default shader while another shader was active
    ShaderMismatch(String),

    /// Initialization failed (render context, default shader)
    InitializationFailed(String),
}

impl fmt::Display for Pr3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pr3dError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Pr3dError::OutOfMemory => write!(f, "Out of GPU memory"),
            Pr3dError::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Pr3dError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Pr3dError::ShaderMismatch(msg) => write!(f, "Shader mismatch: {}", msg),
            Pr3dError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Pr3dError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
