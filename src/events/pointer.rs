use glam::Vec2;

/// Mouse-look drag tracking: deltas are reported only while the button is held.
#[derive(Default, Clone, Copy, Debug)]
pub struct MouseLook {
    pub last: Option<Vec2>,
    pub dragging: bool,
}

impl MouseLook {
    pub fn set_button(&mut self, down: bool) {
        self.dragging = down;
    }

    /// Record a cursor position; returns the drag delta in pixels if dragging.
    pub fn cursor_moved(&mut self, pos: Vec2) -> Option<Vec2> {
        let prev = self.last.replace(pos);
        match prev {
            Some(prev) if self.dragging => Some(pos - prev),
            _ => None,
        }
    }

    pub fn cursor_left(&mut self) {
        self.last = None;
    }
}
