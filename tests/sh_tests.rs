// Tests for basis evaluation, reconstruction and coefficient editing.

mod common;

use common::*;
use glam::Vec3;
use sh_core::{
    coefficient_to_display, display_to_coefficient, project, projection_weights, sh_basis,
    Channel, CoefficientEditor, ShCoefficients, EDITOR_NUDGE,
};

#[test]
fn projection_weights_apply_band_corrections() {
    let n = Vec3::new(0.36, -0.48, 0.8);
    let basis = sh_basis(n);
    let weights = projection_weights(n);
    let expected_ratio = [1.0, 2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 0.25, 0.25, 0.25, 0.25, 0.25];
    for i in 0..9 {
        assert!(
            (weights[i] - basis[i] * expected_ratio[i]).abs() < 1e-6,
            "slot {i}: {} vs {}",
            weights[i],
            basis[i]
        );
    }
}

#[test]
fn basis_matches_reference_values_on_axes() {
    let b = sh_basis(Vec3::X);
    assert_eq!(b[0], 0.282095);
    assert_eq!(b[3], -0.488603);
    assert_eq!(b[8], 0.546274);
    assert_eq!(b[6], -0.315392);

    let b = sh_basis(Vec3::Z);
    assert_eq!(b[2], 0.488603);
    assert!((b[6] - 0.315392 * 2.0).abs() < 1e-6);
}

#[test]
fn edited_linear_term_shows_up_in_reconstruction() {
    let mut coeffs = ShCoefficients::ZERO;
    let mut editor = CoefficientEditor::default();
    editor.select(3);
    // (1, 0, 0) through the picker mapping
    editor.set_display(&mut coeffs, Vec3::new(1.0, 0.5, 0.5));
    assert_eq!(coeffs[3], Vec3::new(1.0, 0.0, 0.0));

    let e = coeffs.irradiance(Vec3::X);
    assert!(e.abs_diff_eq(Vec3::new(-0.488603, 0.0, 0.0), 1e-6), "{e:?}");
}

#[test]
fn edited_term_combines_with_projected_terms() {
    let mut coeffs = project(&uniform_cubemap(33, [255, 255, 255]), 16).unwrap();
    let mut editor = CoefficientEditor::default();
    editor.select(3);
    editor.set_display(&mut coeffs, coefficient_to_display(Vec3::new(1.0, 0.0, 0.0)));

    let e = coeffs.irradiance(Vec3::X);
    assert!((e.x - (1.0 - 0.488603)).abs() < 1e-3, "{e:?}");
    assert!((e.y - 1.0).abs() < 1e-3);
    assert!((e.z - 1.0).abs() < 1e-3);
}

#[test]
fn display_mapping_round_trips() {
    for c in [Vec3::splat(-1.0), Vec3::ZERO, Vec3::new(0.25, -0.5, 1.0)] {
        let d = coefficient_to_display(c);
        assert!(display_to_coefficient(d).abs_diff_eq(c, 1e-6));
    }
    assert_eq!(coefficient_to_display(Vec3::splat(-1.0)), Vec3::ZERO);
    assert_eq!(coefficient_to_display(Vec3::ONE), Vec3::ONE);
}

#[test]
fn set_display_clamps_like_a_picker() {
    let mut coeffs = ShCoefficients::ZERO;
    let editor = CoefficientEditor::default();
    editor.set_display(&mut coeffs, Vec3::new(1.5, -0.2, 0.75));
    assert!(coeffs[0].abs_diff_eq(Vec3::new(1.0, -1.0, 0.5), 1e-6));
}

#[test]
fn nudge_moves_only_the_active_channel() {
    let mut coeffs = ShCoefficients::ZERO;
    let mut editor = CoefficientEditor::default();
    editor.select(5);
    editor.cycle_channel(); // All -> Red
    assert_eq!(editor.channel, Channel::Red);
    editor.cycle_channel(); // Red -> Green
    editor.nudge(&mut coeffs, 3.0);

    let expected = display_to_coefficient(Vec3::new(0.5, 0.5 + 3.0 * EDITOR_NUDGE, 0.5));
    assert!(coeffs[5].abs_diff_eq(expected, 1e-6), "{:?}", coeffs[5]);
    assert_eq!(coeffs[4], Vec3::ZERO);
}

#[test]
fn revert_restores_reference_value() {
    let reference = ShCoefficients([Vec3::splat(0.3); 9]);
    let mut coeffs = reference;
    let mut editor = CoefficientEditor::default();
    editor.select(7);
    editor.nudge(&mut coeffs, -5.0);
    assert_ne!(coeffs[7], reference[7]);
    editor.revert(&mut coeffs, &reference);
    assert_eq!(coeffs, reference);
}

#[test]
fn select_ignores_out_of_range_index() {
    let mut editor = CoefficientEditor::default();
    editor.select(4);
    editor.select(9);
    assert_eq!(editor.selected, 4);
    assert_eq!(editor.label(), "Y2-2");
}

#[test]
fn uniform_layout_pads_w_with_zero() {
    let mut coeffs = ShCoefficients::ZERO;
    coeffs[2] = Vec3::new(1.0, 2.0, 3.0);
    let u = coeffs.to_uniform();
    assert_eq!(u[2], [1.0, 2.0, 3.0, 0.0]);
    assert!(u.iter().all(|v| v[3] == 0.0));
}
