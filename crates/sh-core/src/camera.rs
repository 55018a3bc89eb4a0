//! Fly-through camera shared by the renderer and the input layer.
//!
//! Holds no platform types: the front-end feeds it mouse deltas and a
//! view-space movement vector each frame.

use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_FOVY_DEGREES, CAMERA_START, CAMERA_ZFAR, CAMERA_ZNEAR, MOUSE_LOOK_DEGREES_PER_PX,
};

/// Right-handed camera described by a position and pitch/yaw in degrees.
#[derive(Clone, Debug)]
pub struct FlyCamera {
    pub position: Vec3,
    pub pitch_degrees: f32,
    pub yaw_degrees: f32,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::from(CAMERA_START),
            pitch_degrees: 0.0,
            yaw_degrees: 0.0,
            fovy_degrees: CAMERA_FOVY_DEGREES,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl FlyCamera {
    /// Camera orientation: yaw about Y applied after pitch about X.
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw_degrees.to_radians())
            * Mat4::from_rotation_x(self.pitch_degrees.to_radians())
    }

    /// Rotate from a mouse drag, in pixels.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.pitch_degrees += dy * MOUSE_LOOK_DEGREES_PER_PX;
        self.yaw_degrees += dx * MOUSE_LOOK_DEGREES_PER_PX;
    }

    /// Move by a view-space offset (x right, y up, z backwards).
    pub fn translate_local(&mut self, local: Vec3) {
        self.position += self.rotation().transform_vector3(local);
    }

    /// World to view: inverse of `translation(position) * rotation`.
    pub fn view_matrix(&self) -> Mat4 {
        self.rotation().transpose() * Mat4::from_translation(-self.position)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy_degrees.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        )
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
