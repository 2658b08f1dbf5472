//! Input module: keyboard keys, cursor queries and the winit-backed source.

mod key;
mod input;
mod winit_input;

pub use key::Key;
pub use input::{key_pressed, mouse_position, CursorTracker, InputBackend, MouseCaptureMode};
pub use winit_input::WinitInput;
