//! Integration tests for the fly-camera frame loop
//!
//! Drives a `Camera` from a `WinitInput` the way an application would:
//! poll keys for movement, feed cursor motion through a `CursorTracker`
//! into `move_look`, then `update()` before drawing. No window or GPU.
//!
//! Run with: cargo test --test fly_camera_integration_tests

use pr3d_engine::glam::Vec3;
use pr3d_engine::pr3d::camera::{Camera, CameraConfig, CameraMoveDirection};
use pr3d_engine::pr3d::input::{
    key_pressed, CursorTracker, InputBackend, Key, MouseCaptureMode, WinitInput,
};

const DT: f64 = 1.0 / 60.0;

/// One frame of the usual WASD + mouse-look loop
fn frame(camera: &mut Camera, input: &WinitInput, tracker: &mut CursorTracker) {
    let bindings = [
        (Key::W, CameraMoveDirection::Forward),
        (Key::S, CameraMoveDirection::Backward),
        (Key::D, CameraMoveDirection::Right),
        (Key::A, CameraMoveDirection::Left),
    ];
    for (key, direction) in bindings {
        if key_pressed(input, key) {
            camera.move_fly(direction, DT);
        }
    }
    if let Some((yaw, pitch)) = tracker.sample(input) {
        camera.move_look(yaw, pitch);
    }
    camera.update();
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn test_holding_w_for_one_second() {
    let mut camera = Camera::new(45.0, 2.0).unwrap();
    let mut input = WinitInput::new();
    let mut tracker = CursorTracker::new();
    input.press_key(Key::W);

    for _ in 0..60 {
        frame(&mut camera, &input, &mut tracker);
    }

    assert!(approx(camera.position(), Vec3::new(0.0, 0.0, -2.0)), "{:?}", camera.position());
}

#[test]
fn test_opposite_keys_cancel() {
    let mut camera = Camera::new(60.0, 5.0).unwrap();
    let mut input = WinitInput::new();
    let mut tracker = CursorTracker::new();
    input.press_key(Key::W);
    input.press_key(Key::S);
    input.press_key(Key::A);
    input.press_key(Key::D);

    for _ in 0..30 {
        frame(&mut camera, &input, &mut tracker);
    }

    assert!(approx(camera.position(), Vec3::ZERO));
}

#[test]
fn test_mouse_look_in_disabled_mode() {
    let config = CameraConfig { look_sensitivity: 1.0, ..CameraConfig::default() };
    let mut camera = Camera::with_config(45.0, 1.0, config).unwrap();
    let mut input = WinitInput::new();
    let mut tracker = CursorTracker::new();
    input.set_capture_mode(MouseCaptureMode::Disabled);

    frame(&mut camera, &input, &mut tracker); // primes the tracker
    input.add_raw_motion(90.0, 0.0);
    frame(&mut camera, &input, &mut tracker);

    // yaw -90 -> 0: looking down +X
    assert_eq!(input.capture_mode(), MouseCaptureMode::Disabled);
    assert!(approx(camera.front(), Vec3::X), "{:?}", camera.front());
}

#[test]
fn test_mouse_up_looks_up_and_pitch_stays_clamped() {
    let mut camera = Camera::new(45.0, 1.0).unwrap();
    let mut input = WinitInput::new();
    let mut tracker = CursorTracker::new();
    input.move_cursor(400.0, 300.0);
    frame(&mut camera, &input, &mut tracker);

    // Screen y decreasing means the mouse moved up
    for step in 1..=200 {
        input.move_cursor(400.0, 300.0 - 50.0 * step as f64);
        frame(&mut camera, &input, &mut tracker);
        assert!(camera.pitch() > 0.0 && camera.pitch() < 90.0);
    }

    assert_eq!(camera.pitch(), 89.0);
    assert!(camera.front().y > 0.99);
    assert!((camera.up().dot(camera.front())).abs() < 1e-4);
}

#[test]
fn test_flying_after_turning_follows_new_heading() {
    let config = CameraConfig { look_sensitivity: 1.0, ..CameraConfig::default() };
    let mut camera = Camera::with_config(45.0, 1.0, config).unwrap();
    let mut input = WinitInput::new();
    let mut tracker = CursorTracker::new();

    input.move_cursor(0.0, 0.0);
    frame(&mut camera, &input, &mut tracker);
    input.move_cursor(-90.0, 0.0); // turn left: yaw -90 -> -180 (wrapped to 180)
    frame(&mut camera, &input, &mut tracker);
    input.press_key(Key::W);
    for _ in 0..60 {
        frame(&mut camera, &input, &mut tracker);
    }

    assert!((camera.yaw() - 180.0).abs() < 1e-4);
    assert!(approx(camera.position(), Vec3::new(-1.0, 0.0, 0.0)), "{:?}", camera.position());
}

#[test]
fn test_window_resize_updates_projection() {
    let mut camera = Camera::new(45.0, 1.0).unwrap();
    let before = *camera.projection_matrix();

    camera.set_aspect_ratio(1920, 1080).unwrap();
    assert_eq!(*camera.projection_matrix(), before);
    camera.update();

    assert_ne!(*camera.projection_matrix(), before);
    assert!((camera.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    assert!(camera.set_aspect_ratio(1920, 0).is_err());
}
