// Shared tuning constants for projection, camera and editing.

// Projection
pub const SAMPLE_STEP: usize = 16; // sample every Nth texel in x and y

// Real SH normalization constants (bands 0..2)
pub const SH_Y00: f32 = 0.282095;
pub const SH_Y1: f32 = 0.488603;
pub const SH_Y2_CROSS: f32 = 1.092548; // Y2-2, Y2-1, Y21
pub const SH_Y20: f32 = 0.315392;
pub const SH_Y22: f32 = 0.546274;

// Scene defaults
pub const DEFAULT_SKY_DIR: &str = "cubemaps/room";
pub const SPHERE_RINGS: u32 = 32;
pub const SPHERE_SEGMENTS: u32 = 64;
pub const SPHERE_RADIUS: f32 = 0.5;

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.01;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 3.0];
pub const MOUSE_LOOK_DEGREES_PER_PX: f32 = -0.2; // inverted drag
pub const MOVE_SPEED: f32 = 0.01; // world units per frame
pub const MOVE_SPEED_FAST: f32 = 0.1; // with Shift held

// Editor
pub const EDITOR_NUDGE: f32 = 0.01; // display-space step per key press

/// Human-readable labels for the nine basis functions, in coefficient order.
pub const BASIS_LABELS: [&str; 9] = [
    "Y00", "Y1-1", "Y10", "Y11", "Y2-2", "Y2-1", "Y20", "Y21", "Y22",
];
