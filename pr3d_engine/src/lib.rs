/*!
# PR3D Engine

A small 3D rendering engine: a fly camera, keyboard and cursor input, and
mesh rendering over a pluggable graphics device.

All rendering state lives in an explicit [`pr3d::render::RenderContext`]
owned by the application; the device behind it implements
[`pr3d::device::GraphicsDevice`] (an OpenGL 3.3 context in the reference
backend). Input is read through an [`pr3d::input::InputBackend`], with a
winit-driven implementation provided.

## Architecture

- **Camera**: Yaw/pitch fly camera producing view and projection matrices
- **Input**: `Key` table, capture modes, polling queries and look deltas
- **GraphicsDevice**: Driver-facing trait for buffers, textures, shaders, draws
- **RenderContext**: Mesh arena, built-in primitives, default shader, drawing
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod input;
pub mod graphics_device;
pub mod render;

// Main pr3d namespace module
pub mod pr3d {
    // Error types
    pub use crate::error::{Pr3dError, Pr3dResult};

    // Process-wide services (logging)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }

    // Graphics device traits and descriptors
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Meshes and the render context
    pub mod render {
        pub use crate::render::*;
    }
}

// Re-export math library at crate root
pub use glam;
