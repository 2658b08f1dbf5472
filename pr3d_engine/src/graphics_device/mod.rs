/// Graphics device module - the driver-facing traits and descriptors

// Module declarations
pub mod graphics_device;
pub mod buffer;
pub mod vertex_array;
pub mod texture;
pub mod shader;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use buffer::*;
pub use vertex_array::*;
pub use texture::*;
pub use shader::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
