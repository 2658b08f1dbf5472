/// Input queries over a pluggable window-system backend.
///
/// The engine never talks to the window system directly. A backend reports
/// key state and the cursor; `key_pressed` and `mouse_position` are the
/// polling entry points used once per frame.

use super::Key;

/// How the cursor is bound to the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseCaptureMode {
    /// Visible, free to leave the window
    #[default]
    Normal,
    /// Visible, confined to the window
    Captured,
    /// Hidden and locked; position becomes unbounded virtual motion
    Disabled,
}

/// Source of keyboard and cursor state
pub trait InputBackend {
    /// Whether `key` is currently held
    fn is_key_down(&self, key: Key) -> bool;

    /// Cursor position
    ///
    /// Screen coordinates with a top-left origin in `Normal` and `Captured`
    /// modes, an unbounded accumulated position in `Disabled` mode.
    fn cursor_position(&self) -> (f64, f64);

    /// Current capture mode
    fn capture_mode(&self) -> MouseCaptureMode;
}

/// Whether `key` is held down on `backend`
pub fn key_pressed<B: InputBackend + ?Sized>(backend: &B, key: Key) -> bool {
    backend.is_key_down(key)
}

/// Current cursor position reported by `backend`
pub fn mouse_position<B: InputBackend + ?Sized>(backend: &B) -> (f64, f64) {
    backend.cursor_position()
}

// ===== LOOK DELTAS =====

/// Turns successive cursor positions into look deltas.
///
/// The first sample only primes the tracker. Screen Y grows downward, so the
/// returned pitch delta is `previous_y - y`: moving the mouse up looks up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorTracker {
    last: Option<(f64, f64)>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Feed the cursor position for this frame, returning `(yaw, pitch)` deltas
    pub fn update(&mut self, position: (f64, f64)) -> Option<(f32, f32)> {
        let previous = self.last.replace(position)?;
        let yaw = (position.0 - previous.0) as f32;
        let pitch = (previous.1 - position.1) as f32;
        Some((yaw, pitch))
    }

    /// Sample `backend` and return the look delta since the previous sample
    pub fn sample<B: InputBackend + ?Sized>(&mut self, backend: &B) -> Option<(f32, f32)> {
        self.update(mouse_position(backend))
    }

    /// Forget the last position, e.g. after a capture mode change
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last_position(&self) -> Option<(f64, f64)> {
        self.last
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
