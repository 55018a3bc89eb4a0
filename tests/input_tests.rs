// Host-side tests for the viewer's pure input and overlay modules.
// The binary has no library target, so the modules are included directly.

#![allow(dead_code)]
mod keyboard {
    include!("../src/events/keyboard.rs");
}
mod pointer {
    include!("../src/events/pointer.rs");
}
mod frame {
    include!("../src/frame.rs");
}
mod overlay {
    include!("../src/overlay.rs");
}

use std::time::Duration;

use glam::{Vec2, Vec3};
use keyboard::*;
use pointer::MouseLook;
use sh_core::{CoefficientEditor, ShCoefficients, MOVE_SPEED, MOVE_SPEED_FAST};
use winit::keyboard::KeyCode;

#[test]
fn digits_select_coefficients() {
    assert_eq!(action_for_key(KeyCode::Digit0), Some(Action::Select(0)));
    assert_eq!(action_for_key(KeyCode::Numpad8), Some(Action::Select(8)));
    assert_eq!(coefficient_for_digit(KeyCode::Digit9), None);
    assert_eq!(action_for_key(KeyCode::Digit9), None);
}

#[test]
fn editor_and_app_keys_map_to_actions() {
    assert_eq!(action_for_key(KeyCode::KeyR), Some(Action::Reload));
    assert_eq!(action_for_key(KeyCode::Tab), Some(Action::CycleChannel));
    assert_eq!(action_for_key(KeyCode::ArrowUp), Some(Action::Nudge(1)));
    assert_eq!(action_for_key(KeyCode::ArrowDown), Some(Action::Nudge(-1)));
    assert_eq!(action_for_key(KeyCode::Backspace), Some(Action::Revert));
    assert_eq!(action_for_key(KeyCode::KeyP), Some(Action::PrintCoefficients));
    assert_eq!(action_for_key(KeyCode::Escape), Some(Action::Quit));
    // movement keys are not actions
    assert_eq!(action_for_key(KeyCode::KeyW), None);
}

#[test]
fn move_keys_track_press_and_release() {
    let mut keys = MoveKeys::default();
    assert!(keys.set(KeyCode::KeyW, true));
    assert!(keys.set(KeyCode::KeyD, true));
    assert!(!keys.set(KeyCode::KeyR, true));
    assert_eq!(
        keys.movement(MOVE_SPEED, MOVE_SPEED_FAST),
        Vec3::new(MOVE_SPEED, 0.0, -MOVE_SPEED)
    );

    keys.set(KeyCode::ShiftLeft, true);
    assert_eq!(
        keys.movement(MOVE_SPEED, MOVE_SPEED_FAST),
        Vec3::new(MOVE_SPEED_FAST, 0.0, -MOVE_SPEED_FAST)
    );

    keys.set(KeyCode::KeyW, false);
    keys.set(KeyCode::KeyD, false);
    assert_eq!(keys.movement(MOVE_SPEED, MOVE_SPEED_FAST), Vec3::ZERO);
}

#[test]
fn q_rises_and_e_sinks() {
    let mut keys = MoveKeys::default();
    keys.set(KeyCode::KeyQ, true);
    assert_eq!(keys.movement(1.0, 2.0), Vec3::Y);
    keys.set(KeyCode::KeyE, true);
    assert_eq!(keys.movement(1.0, 2.0), Vec3::ZERO);
}

#[test]
fn mouse_look_reports_delta_only_while_dragging() {
    let mut look = MouseLook::default();
    assert_eq!(look.cursor_moved(Vec2::new(10.0, 10.0)), None);
    look.set_button(true);
    assert_eq!(
        look.cursor_moved(Vec2::new(14.0, 7.0)),
        Some(Vec2::new(4.0, -3.0))
    );
    look.set_button(false);
    assert_eq!(look.cursor_moved(Vec2::new(20.0, 20.0)), None);
}

#[test]
fn mouse_look_forgets_position_when_cursor_leaves() {
    let mut look = MouseLook::default();
    look.set_button(true);
    look.cursor_moved(Vec2::new(5.0, 5.0));
    look.cursor_left();
    // re-entry must not produce a jump
    assert_eq!(look.cursor_moved(Vec2::new(300.0, 200.0)), None);
    assert_eq!(
        look.cursor_moved(Vec2::new(301.0, 200.0)),
        Some(Vec2::new(1.0, 0.0))
    );
}

#[test]
fn frame_stats_average_over_window() {
    let mut stats = frame::FrameStats::new(2);
    assert_eq!(stats.average_ms(), 0.0);
    assert_eq!(stats.fps(), 0.0);
    stats.push(Duration::from_millis(100));
    stats.push(Duration::from_millis(10));
    stats.push(Duration::from_millis(30));
    assert!((stats.average_ms() - 20.0).abs() < 1e-3);
    assert!((stats.fps() - 50.0).abs() < 1e-2);
}

#[test]
fn title_shows_selection_and_edit_marker() {
    let mut coeffs = ShCoefficients::ZERO;
    coeffs[3] = Vec3::new(1.0, 0.0, -1.0);
    let mut editor = CoefficientEditor::default();
    editor.select(3);

    let title = overlay::title_text("SH", &editor, &coeffs, true, 16.0, 62.5);
    assert!(title.starts_with("SH | [3] Y11"), "{title}");
    assert!(title.contains("(+1.000, +0.000, -1.000)"), "{title}");
    assert!(title.contains("display (1.00, 0.50, 0.00)"), "{title}");
    assert!(title.contains("[RGB] *"), "{title}");
    assert!(title.ends_with("16.000 ms/frame (62.5 FPS)"), "{title}");

    let clean = overlay::title_text("SH", &editor, &coeffs, false, 0.0, 0.0);
    assert!(!clean.contains(" *"));
}
