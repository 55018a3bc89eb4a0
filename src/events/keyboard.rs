use glam::Vec3;
use winit::keyboard::KeyCode;

/// Discrete commands triggered by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Reload assets and re-project the coefficients.
    Reload,
    /// Select coefficient 0..=8 for editing.
    Select(usize),
    CycleChannel,
    /// Nudge the selected coefficient up (+1) or down (-1) in display space.
    Nudge(i8),
    Revert,
    PrintCoefficients,
    Quit,
}

#[inline]
pub fn coefficient_for_digit(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Digit0 | KeyCode::Numpad0 => Some(0),
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(1),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(2),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(3),
        KeyCode::Digit4 | KeyCode::Numpad4 => Some(4),
        KeyCode::Digit5 | KeyCode::Numpad5 => Some(5),
        KeyCode::Digit6 | KeyCode::Numpad6 => Some(6),
        KeyCode::Digit7 | KeyCode::Numpad7 => Some(7),
        KeyCode::Digit8 | KeyCode::Numpad8 => Some(8),
        _ => None,
    }
}

/// Map a pressed key to an action. Movement keys are polled separately.
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    if let Some(i) = coefficient_for_digit(code) {
        return Some(Action::Select(i));
    }
    match code {
        KeyCode::KeyR => Some(Action::Reload),
        KeyCode::Tab => Some(Action::CycleChannel),
        KeyCode::ArrowUp => Some(Action::Nudge(1)),
        KeyCode::ArrowDown => Some(Action::Nudge(-1)),
        KeyCode::Backspace => Some(Action::Revert),
        KeyCode::KeyP => Some(Action::PrintCoefficients),
        KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Held movement keys (WSADEQ) and the Shift speed modifier.
#[derive(Default, Clone, Copy, Debug)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
    pub fast: bool,
}

impl MoveKeys {
    /// Track a key transition; returns false if the key is not a movement key.
    pub fn set(&mut self, code: KeyCode, pressed: bool) -> bool {
        let slot = match code {
            KeyCode::KeyW => &mut self.forward,
            KeyCode::KeyS => &mut self.back,
            KeyCode::KeyA => &mut self.left,
            KeyCode::KeyD => &mut self.right,
            KeyCode::KeyE => &mut self.down,
            KeyCode::KeyQ => &mut self.up,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => &mut self.fast,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    /// View-space displacement for one frame.
    pub fn movement(&self, speed: f32, fast_speed: f32) -> Vec3 {
        let s = if self.fast { fast_speed } else { speed };
        let mut m = Vec3::ZERO;
        if self.forward {
            m.z -= s;
        }
        if self.back {
            m.z += s;
        }
        if self.left {
            m.x -= s;
        }
        if self.right {
            m.x += s;
        }
        if self.down {
            m.y -= s;
        }
        if self.up {
            m.y += s;
        }
        m
    }
}
