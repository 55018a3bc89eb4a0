//! Second-order real spherical harmonics: basis evaluation and the nine RGB
//! coefficients used for ambient lighting.

use std::ops::{Index, IndexMut};

use glam::Vec3;

use crate::constants::{SH_Y00, SH_Y1, SH_Y20, SH_Y22, SH_Y2_CROSS};

pub const SH_COEFFICIENT_COUNT: usize = 9;

/// The nine basis functions evaluated at unit direction `n`.
///
/// Order: Y00, Y1-1, Y10, Y11, Y2-2, Y2-1, Y20, Y21, Y22.
#[inline]
pub fn sh_basis(n: Vec3) -> [f32; SH_COEFFICIENT_COUNT] {
    [
        SH_Y00,
        -SH_Y1 * n.y,
        SH_Y1 * n.z,
        -SH_Y1 * n.x,
        SH_Y2_CROSS * n.x * n.y,
        -SH_Y2_CROSS * n.y * n.z,
        SH_Y20 * (3.0 * n.z * n.z - 1.0),
        -SH_Y2_CROSS * n.x * n.z,
        SH_Y22 * (n.x * n.x - n.y * n.y),
    ]
}

/// Basis weights used while projecting, with the empirical band corrections
/// (2/3 for band 1, 1/4 for band 2) folded in.
#[inline]
pub fn projection_weights(n: Vec3) -> [f32; SH_COEFFICIENT_COUNT] {
    [
        SH_Y00,
        -SH_Y1 * n.y * 2.0 / 3.0,
        SH_Y1 * n.z * 2.0 / 3.0,
        -SH_Y1 * n.x * 2.0 / 3.0,
        SH_Y2_CROSS * n.x * n.y / 4.0,
        -SH_Y2_CROSS * n.y * n.z / 4.0,
        SH_Y20 * (3.0 * n.z * n.z - 1.0) / 4.0,
        -SH_Y2_CROSS * n.x * n.z / 4.0,
        SH_Y22 * (n.x * n.x - n.y * n.y) / 4.0,
    ]
}

/// Nine RGB coefficients of an order-2 SH expansion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShCoefficients(pub [Vec3; SH_COEFFICIENT_COUNT]);

impl ShCoefficients {
    pub const ZERO: Self = Self([Vec3::ZERO; SH_COEFFICIENT_COUNT]);

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.0.iter()
    }

    /// Diffuse irradiance at unit normal `n`: the coefficient-weighted sum of
    /// the basis functions, with no projection corrections.
    pub fn irradiance(&self, n: Vec3) -> Vec3 {
        sh_basis(n)
            .iter()
            .zip(self.0.iter())
            .fold(Vec3::ZERO, |acc, (b, c)| acc + *c * *b)
    }

    /// GPU uniform layout: nine `vec4<f32>` with the w lane zeroed.
    pub fn to_uniform(&self) -> [[f32; 4]; SH_COEFFICIENT_COUNT] {
        self.0.map(|c| c.extend(0.0).to_array())
    }
}

impl Index<usize> for ShCoefficients {
    type Output = Vec3;

    fn index(&self, index: usize) -> &Vec3 {
        &self.0[index]
    }
}

impl IndexMut<usize> for ShCoefficients {
    fn index_mut(&mut self, index: usize) -> &mut Vec3 {
        &mut self.0[index]
    }
}
