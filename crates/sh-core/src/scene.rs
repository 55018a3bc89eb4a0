//! Scene lifecycle: load the cubemap and mesh, project fresh coefficients,
//! and hold user edits until the next (re)load.

use std::path::PathBuf;

use crate::constants::{
    BASIS_LABELS, DEFAULT_SKY_DIR, SAMPLE_STEP, SPHERE_RADIUS, SPHERE_RINGS, SPHERE_SEGMENTS,
};
use crate::cubemap::Cubemap;
use crate::editor::CoefficientEditor;
use crate::error::Result;
use crate::mesh::Mesh;
use crate::projector::project;
use crate::sh::ShCoefficients;

/// Where scene assets come from and how densely to sample the sky.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub sky_dir: PathBuf,
    /// OBJ to light; `None` uses the built-in sphere.
    pub mesh_path: Option<PathBuf>,
    pub sample_step: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sky_dir: PathBuf::from(DEFAULT_SKY_DIR),
            mesh_path: None,
            sample_step: SAMPLE_STEP,
        }
    }
}

pub struct Scene {
    pub config: SceneConfig,
    pub cubemap: Cubemap,
    pub mesh: Mesh,
    /// Live coefficients, possibly edited.
    pub coefficients: ShCoefficients,
    /// Coefficients as projected at load time.
    pub projected: ShCoefficients,
    pub editor: CoefficientEditor,
}

impl Scene {
    pub fn load(config: &SceneConfig) -> Result<Self> {
        let cubemap = Cubemap::load_dir(&config.sky_dir)?;
        let mesh = match &config.mesh_path {
            Some(path) => Mesh::load_obj(path)?,
            None => Mesh::uv_sphere(SPHERE_RADIUS, SPHERE_RINGS, SPHERE_SEGMENTS),
        };
        Self::from_parts(config.clone(), cubemap, mesh)
    }

    /// Build a scene from already-decoded assets.
    pub fn from_parts(config: SceneConfig, cubemap: Cubemap, mesh: Mesh) -> Result<Self> {
        let projected = project(&cubemap, config.sample_step)?;
        log::info!(
            "scene ready: sky {} ({}x{} faces), {} triangles",
            config.sky_dir.display(),
            cubemap.face_size().0,
            cubemap.face_size().1,
            mesh.triangle_count()
        );
        Ok(Self {
            config,
            cubemap,
            mesh,
            coefficients: projected,
            projected,
            editor: CoefficientEditor::default(),
        })
    }

    /// Re-read every asset into a new scene with the same config and editor
    /// selection. `self` is not touched, so callers can prepare GPU
    /// resources for the result before committing to it.
    pub fn reloaded(&self) -> Result<Self> {
        let fresh = Self::load(&self.config)?;
        Ok(Self {
            editor: self.editor.clone(),
            ..fresh
        })
    }

    /// Re-read every asset and re-project; edits are discarded.
    ///
    /// On failure the current scene is left untouched.
    pub fn reload(&mut self) -> Result<()> {
        *self = self.reloaded()?;
        Ok(())
    }

    pub fn is_edited(&self) -> bool {
        self.coefficients != self.projected
    }

    pub fn nudge_selected(&mut self, steps: f32) {
        self.editor.nudge(&mut self.coefficients, steps);
    }

    pub fn revert_selected(&mut self) {
        self.editor.revert(&mut self.coefficients, &self.projected);
    }

    pub fn log_coefficients(&self) {
        for (i, c) in self.coefficients.iter().enumerate() {
            log::info!(
                "[{}] {:>4} = ({:+.4}, {:+.4}, {:+.4})",
                i,
                BASIS_LABELS[i],
                c.x,
                c.y,
                c.z
            );
        }
    }
}
