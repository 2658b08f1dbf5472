/// Fly camera: position, yaw/pitch orientation and the derived matrices.
///
/// The camera is a plain value owned by the caller. Movement and look calls
/// mutate position and orientation immediately; the view and projection
/// matrices are refreshed by `update()`, which should be called once per
/// frame before drawing.

use glam::{Mat4, Vec3};
use crate::error::Pr3dResult;
use crate::{engine_bail, engine_trace};

const SOURCE: &str = "pr3d::Camera";

// ===== DIRECTIONS =====

/// Fly movement directions, decoupled from whatever input produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMoveDirection {
    /// Along the look direction (including its vertical component)
    Forward,
    /// Against the look direction
    Backward,
    /// Along the camera's right vector
    Right,
    /// Against the camera's right vector
    Left,
}

// ===== CONFIG =====

/// Construction-time camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Near clip plane distance (> 0)
    pub near: f32,
    /// Far clip plane distance (> near)
    pub far: f32,
    /// Viewport width / height
    pub aspect_ratio: f32,
    /// Scale applied to raw look deltas by `move_look`
    pub look_sensitivity: f32,
    /// Initial yaw in degrees (-90 looks down -Z)
    pub initial_yaw: f32,
    /// Largest allowed |pitch| in degrees, strictly below 90
    pub pitch_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
            aspect_ratio: 800.0 / 600.0,
            look_sensitivity: 0.1,
            initial_yaw: -90.0,
            pitch_limit: 89.0,
        }
    }
}

impl CameraConfig {
    fn validate(&self) -> Pr3dResult<()> {
        if !(self.near.is_finite() && self.near > 0.0) {
            engine_bail!(SOURCE, InvalidParameter; "near plane {} must be positive", self.near);
        }
        if !(self.far.is_finite() && self.far > self.near) {
            engine_bail!(SOURCE, InvalidParameter;
                "far plane {} must be greater than near plane {}", self.far, self.near);
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            engine_bail!(SOURCE, InvalidParameter;
                "aspect ratio {} must be positive", self.aspect_ratio);
        }
        if !(self.pitch_limit > 0.0 && self.pitch_limit < 90.0) {
            engine_bail!(SOURCE, InvalidParameter;
                "pitch limit {} must be inside (0, 90)", self.pitch_limit);
        }
        if !self.look_sensitivity.is_finite() {
            engine_bail!(SOURCE, InvalidParameter;
                "look sensitivity {} must be finite", self.look_sensitivity);
        }
        if !self.initial_yaw.is_finite() {
            engine_bail!(SOURCE, InvalidParameter;
                "initial yaw {} must be finite", self.initial_yaw);
        }
        Ok(())
    }
}

// ===== CAMERA =====

/// A fly camera.
///
/// Invariant: `front`, `right` and `up` are unit length and mutually
/// orthogonal for the current yaw/pitch.
#[derive(Debug, Clone)]
pub struct Camera {
    view: Mat4,
    projection: Mat4,

    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,

    yaw: f32,
    pitch: f32,
    fov: f32,
    move_speed: f32,
    look_sensitivity: f32,

    near: f32,
    far: f32,
    aspect_ratio: f32,
    pitch_limit: f32,
}

impl Camera {
    /// Create a camera at the origin looking down -Z.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `fov_degrees` is outside (0, 180) or
    /// `move_speed` is negative or not finite.
    pub fn new(fov_degrees: f32, move_speed: f32) -> Pr3dResult<Self> {
        Self::with_config(fov_degrees, move_speed, CameraConfig::default())
    }

    /// Create a camera with explicit clip planes, aspect ratio and sensitivity.
    pub fn with_config(fov_degrees: f32, move_speed: f32, config: CameraConfig) -> Pr3dResult<Self> {
        validate_fov(fov_degrees)?;
        validate_speed(move_speed)?;
        config.validate()?;

        let mut camera = Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            position: Vec3::ZERO,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            yaw: wrap_degrees(config.initial_yaw),
            pitch: 0.0,
            fov: fov_degrees,
            move_speed,
            look_sensitivity: config.look_sensitivity,
            near: config.near,
            far: config.far,
            aspect_ratio: config.aspect_ratio,
            pitch_limit: config.pitch_limit,
        };
        camera.update_vectors();
        camera.update();
        Ok(camera)
    }

    // ===== PER-FRAME =====

    /// Recompute the view (look-at) and projection matrices.
    pub fn update(&mut self) {
        self.view = Mat4::look_at_rh(self.position, self.position + self.front, self.up);
        self.projection = Mat4::perspective_rh_gl(
            self.fov.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        );
    }

    /// Move the camera by `move_speed * delta_time` in `direction`.
    ///
    /// Forward and backward follow the full look direction. A `delta_time`
    /// that is zero, negative or not finite leaves the camera untouched.
    pub fn move_fly(&mut self, direction: CameraMoveDirection, delta_time: f64) {
        if !(delta_time.is_finite() && delta_time > 0.0) {
            engine_trace!(SOURCE, "move_fly ignored non-positive delta_time {}", delta_time);
            return;
        }

        let distance = self.move_speed * delta_time as f32;
        match direction {
            CameraMoveDirection::Forward => self.position += self.front * distance,
            CameraMoveDirection::Backward => self.position -= self.front * distance,
            CameraMoveDirection::Right => self.position += self.right * distance,
            CameraMoveDirection::Left => self.position -= self.right * distance,
        }
    }

    /// Rotate the camera by raw look deltas (e.g. mouse motion).
    ///
    /// Deltas are multiplied by `look_sensitivity`. Yaw wraps to [0, 360),
    /// pitch is clamped to the configured limit.
    pub fn move_look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        if !(delta_yaw.is_finite() && delta_pitch.is_finite()) {
            engine_trace!(SOURCE, "move_look ignored non-finite delta ({}, {})", delta_yaw, delta_pitch);
            return;
        }

        let yaw = self.yaw + delta_yaw * self.look_sensitivity;
        let pitch = self.pitch + delta_pitch * self.look_sensitivity;
        if !(yaw.is_finite() && pitch.is_finite()) {
            engine_trace!(SOURCE, "move_look ignored delta ({}, {}) overflowing at sensitivity {}",
                delta_yaw, delta_pitch, self.look_sensitivity);
            return;
        }

        self.yaw = wrap_degrees(yaw);
        self.pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
        self.update_vectors();
    }

    // ===== SETTERS =====

    /// Set the vertical field of view in degrees.
    ///
    /// Takes effect on the next `update()`. Values outside (0, 180) are
    /// rejected and the previous fov is kept.
    pub fn set_fov(&mut self, fov_degrees: f32) -> Pr3dResult<()> {
        validate_fov(fov_degrees)?;
        self.fov = fov_degrees;
        Ok(())
    }

    /// Set the aspect ratio from framebuffer dimensions.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) -> Pr3dResult<()> {
        if width == 0 || height == 0 {
            engine_bail!(SOURCE, InvalidParameter;
                "cannot derive aspect ratio from {}x{}", width, height);
        }
        self.aspect_ratio = width as f32 / height as f32;
        Ok(())
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_move_speed(&mut self, move_speed: f32) -> Pr3dResult<()> {
        validate_speed(move_speed)?;
        self.move_speed = move_speed;
        Ok(())
    }

    pub fn set_look_sensitivity(&mut self, sensitivity: f32) -> Pr3dResult<()> {
        if !sensitivity.is_finite() {
            engine_bail!(SOURCE, InvalidParameter;
                "look sensitivity {} must be finite", sensitivity);
        }
        self.look_sensitivity = sensitivity;
        Ok(())
    }

    // ===== GETTERS =====

    /// View matrix as of the last `update()`.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    /// Projection matrix as of the last `update()`.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    /// Combined projection * view.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw in degrees, always in [0, 360).
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within the pitch limit.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn look_sensitivity(&self) -> f32 {
        self.look_sensitivity
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    // ===== INTERNAL =====

    /// Spherical to Cartesian (Y up), then re-derive right and up.
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

/// Wrap an angle into [0, 360).
fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn validate_fov(fov_degrees: f32) -> Pr3dResult<()> {
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        engine_bail!(SOURCE, InvalidParameter;
            "fov {} degrees is outside (0, 180)", fov_degrees);
    }
    Ok(())
}

fn validate_speed(move_speed: f32) -> Pr3dResult<()> {
    if !(move_speed.is_finite() && move_speed >= 0.0) {
        engine_bail!(SOURCE, InvalidParameter;
            "move speed {} must be finite and non-negative", move_speed);
    }
    Ok(())
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
