// Fly camera conventions.

use glam::{Vec3, Vec4};
use sh_core::{FlyCamera, CAMERA_START, MOUSE_LOOK_DEGREES_PER_PX};

#[test]
fn default_camera_sits_on_positive_z() {
    let cam = FlyCamera::default();
    assert_eq!(cam.position, Vec3::from(CAMERA_START));
    let eye = cam.view_matrix().transform_point3(cam.position);
    assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-6));
    // the origin is straight ahead
    let origin = cam.view_matrix().transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), 1e-6));
}

#[test]
fn dragging_right_turns_left() {
    let mut cam = FlyCamera::default();
    cam.look(10.0, 0.0);
    assert_eq!(cam.yaw_degrees, 10.0 * MOUSE_LOOK_DEGREES_PER_PX);
    assert!(cam.yaw_degrees < 0.0);
    cam.look(0.0, -5.0);
    assert!(cam.pitch_degrees > 0.0);
}

#[test]
fn forward_follows_yaw() {
    let mut cam = FlyCamera::default();
    cam.translate_local(Vec3::new(0.0, 0.0, -1.0));
    assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-6));

    let mut cam = FlyCamera {
        yaw_degrees: 90.0,
        ..FlyCamera::default()
    };
    cam.translate_local(Vec3::new(0.0, 0.0, -1.0));
    assert!(
        cam.position.abs_diff_eq(Vec3::new(-1.0, 0.0, 3.0), 1e-5),
        "{:?}",
        cam.position
    );
}

#[test]
fn view_is_inverse_of_camera_transform() {
    let cam = FlyCamera {
        position: Vec3::new(1.0, -2.0, 0.5),
        pitch_degrees: 20.0,
        yaw_degrees: -35.0,
        ..FlyCamera::default()
    };
    let world = glam::Mat4::from_translation(cam.position) * cam.rotation();
    let id = cam.view_matrix() * world;
    assert!(id.abs_diff_eq(glam::Mat4::IDENTITY, 1e-5));
}

#[test]
fn projection_keeps_points_ahead_in_depth_range() {
    let cam = FlyCamera::default();
    let clip = cam.view_proj(1.6) * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc_z = clip.z / clip.w;
    assert!(clip.w > 0.0);
    assert!((0.0..=1.0).contains(&ndc_z), "{ndc_z}");
}
