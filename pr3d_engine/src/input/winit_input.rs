/// InputBackend fed by winit events.
///
/// The application forwards its `WindowEvent`s and `DeviceEvent`s here and
/// polls the result through `key_pressed` / `mouse_position`. In `Disabled`
/// mode the cursor is locked, so window cursor events stop and raw mouse
/// motion is accumulated into an unbounded virtual position instead.

use rustc_hash::FxHashSet;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window};

use super::{InputBackend, Key, MouseCaptureMode};
use crate::error::Pr3dResult;
use crate::{engine_err, engine_debug, engine_trace};

const SOURCE: &str = "pr3d::Input";

/// Keyboard and cursor state tracked from winit events
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    pressed: FxHashSet<Key>,
    cursor: (f64, f64),
    mode: MouseCaptureMode,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update state from a window event; returns true if the event was consumed
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key_code) = event.physical_key else {
                    return false;
                };
                let Some(key) = Key::from_key_code(key_code) else {
                    engine_trace!(SOURCE, "Ignoring unmapped key {:?}", key_code);
                    return false;
                };
                match event.state {
                    ElementState::Pressed => self.press_key(key),
                    ElementState::Released => self.release_key(key),
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mode == MouseCaptureMode::Disabled {
                    return false;
                }
                self.move_cursor(position.x, position.y);
                true
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }
            _ => false,
        }
    }

    /// Update state from a raw device event; returns true if it was consumed
    pub fn handle_device_event(&mut self, event: &DeviceEvent) -> bool {
        match event {
            DeviceEvent::MouseMotion { delta } if self.mode == MouseCaptureMode::Disabled => {
                self.add_raw_motion(delta.0, delta.1);
                true
            }
            _ => false,
        }
    }

    pub fn press_key(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    /// Release every held key (focus loss never delivers the key-up events)
    pub fn release_all(&mut self) {
        if !self.pressed.is_empty() {
            engine_debug!(SOURCE, "Releasing {} held keys", self.pressed.len());
        }
        self.pressed.clear();
    }

    /// Set the absolute cursor position in window coordinates
    pub fn move_cursor(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    /// Accumulate relative mouse motion into the virtual cursor
    pub fn add_raw_motion(&mut self, dx: f64, dy: f64) {
        self.cursor.0 += dx;
        self.cursor.1 += dy;
    }

    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.pressed.iter().copied()
    }

    /// Record a new capture mode without touching any window
    pub fn set_capture_mode(&mut self, mode: MouseCaptureMode) {
        if self.mode != mode {
            engine_debug!(SOURCE, "Mouse capture mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Apply `mode` to `window` and record it
    ///
    /// `Disabled` prefers a locked cursor and falls back to a confined one on
    /// platforms without pointer lock.
    pub fn apply_capture_mode(&mut self, window: &Window, mode: MouseCaptureMode) -> Pr3dResult<()> {
        let result = match mode {
            MouseCaptureMode::Normal => window.set_cursor_grab(CursorGrabMode::None),
            MouseCaptureMode::Captured => window.set_cursor_grab(CursorGrabMode::Confined),
            MouseCaptureMode::Disabled => window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined)),
        };
        result.map_err(|e| engine_err!(SOURCE, "Failed to set cursor grab {:?}: {}", mode, e))?;
        window.set_cursor_visible(mode != MouseCaptureMode::Disabled);
        self.set_capture_mode(mode);
        Ok(())
    }
}

impl InputBackend for WinitInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    fn capture_mode(&self) -> MouseCaptureMode {
        self.mode
    }
}

#[cfg(test)]
#[path = "winit_input_tests.rs"]
mod tests;
