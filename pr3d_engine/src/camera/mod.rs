//! Camera module: the fly camera and its construction parameters.
//!
//! The engine does NOT store or manage cameras. They are values owned and
//! driven by the caller, then handed to the render context when drawing.

mod camera;

pub use camera::{Camera, CameraConfig, CameraMoveDirection};
