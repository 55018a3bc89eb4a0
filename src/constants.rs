// Window and presentation constants for the native viewer.

pub const WINDOW_TITLE: &str = "Spherical Harmonics Playground";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

// Background behind the skybox (only visible if the sky fails to cover)
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.04];

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Frame timing shown in the title bar
pub const FRAME_STATS_WINDOW: usize = 60; // frames averaged
pub const TITLE_REFRESH_SEC: f32 = 0.25;
