pub mod camera;
pub mod constants;
pub mod cubemap;
pub mod editor;
pub mod error;
pub mod mesh;
pub mod projector;
pub mod scene;
pub mod sh;

pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
pub static SKY_WGSL: &str = include_str!("../shaders/sky.wgsl");

pub use camera::*;
pub use constants::*;
pub use cubemap::*;
pub use editor::*;
pub use error::{Error, Result};
pub use mesh::*;
pub use projector::*;
pub use scene::*;
pub use sh::*;
