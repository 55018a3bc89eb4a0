//! Triangle meshes for the lit model: OBJ files read through `tobj` and a
//! built-in UV sphere. Meshes are flat triangle lists, three vertices per triangle.

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec3;

use crate::error::{Error, Result};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Read an OBJ file; every object in it is merged into one mesh.
    pub fn load_obj(path: &Path) -> Result<Self> {
        let (models, _materials) =
            tobj::load_obj(path, &obj_load_options()).map_err(|e| match e {
                tobj::LoadError::OpenFileFailed | tobj::LoadError::ReadError => {
                    Error::MissingResource {
                        resource: path.to_path_buf(),
                        reason: e.to_string(),
                    }
                }
                _ => Error::MeshParse(format!("{}: {}", path.display(), e)),
            })?;
        let mesh = Self::from_models(&models)?;
        log::info!(
            "loaded mesh {} ({} triangles)",
            path.display(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Parse OBJ text already in memory. Material libraries are not loaded.
    pub fn parse_obj(src: &str) -> Result<Self> {
        let mut reader = src.as_bytes();
        let (models, _materials) =
            tobj::load_obj_buf(&mut reader, &obj_load_options(), |_| {
                Err(tobj::LoadError::OpenFileFailed)
            })
            .map_err(|e| Error::MeshParse(e.to_string()))?;
        Self::from_models(&models)
    }

    /// Flatten triangulated models into a triangle list. Models without
    /// normals get the flat normal of each triangle.
    fn from_models(models: &[tobj::Model]) -> Result<Self> {
        let mut vertices = Vec::new();
        for model in models {
            let mesh = &model.mesh;
            let has_normals = mesh.normals.len() == mesh.positions.len();
            if !has_normals {
                log::debug!("mesh '{}' has no normals, using face normals", model.name);
            }
            let position = |i: u32| Vec3::from_slice(&mesh.positions[i as usize * 3..]);
            let normal = |i: u32| Vec3::from_slice(&mesh.normals[i as usize * 3..]);

            for tri in mesh.indices.chunks_exact(3) {
                let p = [position(tri[0]), position(tri[1]), position(tri[2])];
                let flat = (p[1] - p[0]).cross(p[2] - p[0]).normalize_or_zero();
                for (&i, pos) in tri.iter().zip(p) {
                    let n = if has_normals { normal(i) } else { flat };
                    vertices.push(MeshVertex {
                        position: pos.to_array(),
                        normal: n.to_array(),
                    });
                }
            }
        }

        if vertices.is_empty() {
            return Err(Error::InvalidInput("mesh contains no faces".into()));
        }
        Ok(Self { vertices })
    }

    /// Sphere centered at the origin with outward normals.
    pub fn uv_sphere(radius: f32, rings: u32, segments: u32) -> Self {
        let rings = rings.max(2);
        let segments = segments.max(3);
        let point = |ring: u32, seg: u32| {
            let theta = PI * ring as f32 / rings as f32;
            let phi = 2.0 * PI * seg as f32 / segments as f32;
            Vec3::new(theta.sin() * phi.cos(), theta.cos(), -theta.sin() * phi.sin())
        };
        let mut vertices = Vec::with_capacity((rings * segments * 6) as usize);
        for ring in 0..rings {
            for seg in 0..segments {
                let a = point(ring, seg);
                let b = point(ring + 1, seg);
                let c = point(ring + 1, seg + 1);
                let d = point(ring, seg + 1);
                for n in [a, b, c, a, c, d] {
                    vertices.push(MeshVertex {
                        position: (n * radius).to_array(),
                        normal: n.to_array(),
                    });
                }
            }
        }
        Self { vertices }
    }
}

fn obj_load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

/// Skybox cube corners and the 14-index triangle strip covering all six sides.
pub const SKYBOX_VERTICES: [[f32; 3]; 8] = [
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

pub const SKYBOX_STRIP: [u16; 14] = [0, 1, 2, 3, 4, 5, 6, 3, 7, 1, 6, 0, 4, 2];
