//! Manual editing of SH coefficients through a color-picker style mapping.
//!
//! Coefficients live roughly in `[-1, 1]`; the editor works in display space
//! `[0, 1]` (`display = (coeff + 1) / 2`) and clamps there like a picker would.

use glam::Vec3;

use crate::constants::{BASIS_LABELS, EDITOR_NUDGE};
use crate::sh::{ShCoefficients, SH_COEFFICIENT_COUNT};

#[inline]
pub fn coefficient_to_display(coeff: Vec3) -> Vec3 {
    (coeff + Vec3::ONE) * 0.5
}

#[inline]
pub fn display_to_coefficient(display: Vec3) -> Vec3 {
    display * 2.0 - Vec3::ONE
}

/// Which color lane(s) a nudge affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Channel {
    Red,
    Green,
    Blue,
    #[default]
    All,
}

impl Channel {
    pub fn next(self) -> Self {
        match self {
            Channel::Red => Channel::Green,
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::All,
            Channel::All => Channel::Red,
        }
    }

    pub fn mask(self) -> Vec3 {
        match self {
            Channel::Red => Vec3::X,
            Channel::Green => Vec3::Y,
            Channel::Blue => Vec3::Z,
            Channel::All => Vec3::ONE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::All => "RGB",
        }
    }
}

/// Selection state for editing one coefficient at a time.
#[derive(Clone, Debug, Default)]
pub struct CoefficientEditor {
    pub selected: usize,
    pub channel: Channel,
}

impl CoefficientEditor {
    pub fn select(&mut self, index: usize) {
        if index < SH_COEFFICIENT_COUNT {
            self.selected = index;
        }
    }

    pub fn cycle_channel(&mut self) {
        self.channel = self.channel.next();
    }

    pub fn label(&self) -> &'static str {
        BASIS_LABELS[self.selected]
    }

    /// Display-space color of the selected coefficient.
    pub fn display(&self, coeffs: &ShCoefficients) -> Vec3 {
        coefficient_to_display(coeffs[self.selected])
    }

    /// Overwrite the selected coefficient from a display-space color.
    pub fn set_display(&self, coeffs: &mut ShCoefficients, display: Vec3) {
        let clamped = display.clamp(Vec3::ZERO, Vec3::ONE);
        coeffs[self.selected] = display_to_coefficient(clamped);
        log::info!(
            "coefficient [{}] {} set to {:?}",
            self.selected,
            self.label(),
            coeffs[self.selected]
        );
    }

    /// Move the selected channel(s) by `steps` nudges in display space.
    pub fn nudge(&self, coeffs: &mut ShCoefficients, steps: f32) {
        let display = self.display(coeffs) + self.channel.mask() * (steps * EDITOR_NUDGE);
        self.set_display(coeffs, display);
    }

    /// Restore the selected coefficient from `reference`.
    pub fn revert(&self, coeffs: &mut ShCoefficients, reference: &ShCoefficients) {
        coeffs[self.selected] = reference[self.selected];
        log::info!("coefficient [{}] {} reverted", self.selected, self.label());
    }
}
