// Tests for the fixed scene camera.

use glam::Vec3;
use landing_core::{Camera, CAMERA_FOVY_RADIANS, CAMERA_Z};

#[test]
fn fixed_camera_sits_on_the_z_axis() {
    let camera = Camera::fixed(16.0 / 9.0);
    assert_eq!(camera.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert_eq!(camera.target, Vec3::ZERO);
    assert_eq!(camera.fovy_radians, CAMERA_FOVY_RADIANS);
}

#[test]
fn view_matrix_moves_the_eye_to_the_origin() {
    let camera = Camera::fixed(1.0);
    let at_eye = camera.view_matrix().transform_point3(camera.eye);
    assert!(at_eye.length() < 1e-5, "eye should map to origin, got {at_eye}");
}

#[test]
fn view_matrix_looks_down_negative_z() {
    let camera = Camera::fixed(1.0);
    let at_target = camera.view_matrix().transform_point3(camera.target);
    assert!(at_target.x.abs() < 1e-5);
    assert!(at_target.y.abs() < 1e-5);
    assert!(at_target.z < 0.0, "target should be in front of the camera");
    assert!((at_target.z + CAMERA_Z).abs() < 1e-4);
}

#[test]
fn projection_matrix_is_finite() {
    for aspect in [0.5, 1.0, 16.0 / 9.0, 3.2] {
        let proj = camera_proj(aspect);
        for v in proj.to_cols_array() {
            assert!(v.is_finite(), "aspect {aspect} produced non-finite matrix");
        }
    }
}

fn camera_proj(aspect: f32) -> glam::Mat4 {
    Camera::fixed(aspect).projection_matrix()
}
