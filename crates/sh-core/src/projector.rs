//! Projection of a cubemap onto nine SH coefficients.
//!
//! Texels are visited on a strided grid per face and each one becomes a
//! [`TexelSample`]. The coefficients are a fold over those samples followed by
//! a normalization to the full sphere (`4π / Σ weight`).
//!
//! The per-texel weight `1 / |d|³` is the usual fast stand-in for a texel's
//! solid angle. Colors are used as stored (no gamma decode).

use std::f32::consts::PI;

use glam::Vec3;

use crate::constants::SAMPLE_STEP;
use crate::cubemap::{CubeFace, Cubemap, FaceImage};
use crate::error::{Error, Result};
use crate::sh::{projection_weights, ShCoefficients, SH_COEFFICIENT_COUNT};

/// One strided texel: unit direction, solid-angle weight, and the texel color
/// already scaled by `weight / 255`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexelSample {
    pub direction: Vec3,
    pub weight: f32,
    pub color: Vec3,
}

#[derive(Default)]
struct Accumulator {
    sums: [Vec3; SH_COEFFICIENT_COUNT],
    weight_sum: f32,
}

impl Accumulator {
    fn add(mut self, sample: TexelSample) -> Self {
        let weights = projection_weights(sample.direction);
        for (sum, w) in self.sums.iter_mut().zip(weights) {
            *sum += sample.color * w;
        }
        self.weight_sum += sample.weight;
        self
    }

    fn finish(self) -> ShCoefficients {
        let norm = 4.0 * PI / self.weight_sum;
        ShCoefficients(self.sums.map(|c| c * norm))
    }
}

/// Check that every face can be sampled with the given stride.
pub fn validate(cubemap: &Cubemap, step: usize) -> Result<()> {
    if step == 0 {
        return Err(Error::InvalidInput("sample step must be at least 1".into()));
    }
    for face in CubeFace::ALL {
        let image = &cubemap[face];
        // u = 2x/(w-1) needs at least two texels per axis
        if image.width() < 2 || image.height() < 2 {
            return Err(Error::InvalidInput(format!(
                "face {:?} is {}x{}; projection needs at least 2x2 texels",
                face,
                image.width(),
                image.height()
            )));
        }
    }
    Ok(())
}

/// Lazily produce the strided samples of every face, in face order, row by row.
///
/// Callers are expected to [`validate`] first; degenerate faces yield
/// non-finite directions.
pub fn texel_samples(cubemap: &Cubemap, step: usize) -> impl Iterator<Item = TexelSample> + '_ {
    let step = step.max(1);
    CubeFace::ALL
        .into_iter()
        .flat_map(move |face| face_samples(face, &cubemap[face], step))
}

fn face_samples(
    face: CubeFace,
    image: &FaceImage,
    step: usize,
) -> impl Iterator<Item = TexelSample> + '_ {
    let basis = face.basis();
    let w = image.width();
    let h = image.height();
    (0..h).step_by(step).flat_map(move |y| {
        (0..w).step_by(step).map(move |x| {
            let u = 2.0 * (x as f32 / (w as f32 - 1.0)) - 1.0;
            let v = -2.0 * (y as f32 / (h as f32 - 1.0)) + 1.0;
            let d = basis.axis_x * u + basis.axis_y * v + basis.normal;
            let len = d.length();
            let weight = 1.0 / (len * len * len);
            let [r, g, b] = image.pixel(x, y);
            let color = Vec3::new(r as f32, g as f32, b as f32) * (weight / 255.0);
            TexelSample {
                direction: d / len,
                weight,
                color,
            }
        })
    })
}

/// Project a cubemap onto order-2 SH, sampling every `step`-th texel.
pub fn project(cubemap: &Cubemap, step: usize) -> Result<ShCoefficients> {
    validate(cubemap, step)?;
    let acc = texel_samples(cubemap, step).fold(Accumulator::default(), Accumulator::add);
    log::debug!(
        "projected cubemap with step {}: weight sum {:.4}",
        step,
        acc.weight_sum
    );
    Ok(acc.finish())
}

/// [`project`] with the standard stride.
pub fn project_default(cubemap: &Cubemap) -> Result<ShCoefficients> {
    project(cubemap, SAMPLE_STEP)
}
