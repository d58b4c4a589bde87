use glam::Vec2;

use super::event::MouseButton;

/// Tracks the cursor position and whether a primary-button drag is in
/// progress.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    /// Last known cursor position, if the cursor has been seen.
    last_pos: Option<Vec2>,
    /// Whether the primary button is currently held.
    pressed: bool,
}

impl DragTracker {
    /// Create a tracker with no cursor and no drag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pressed
    }

    /// Record a button change. Only the primary button starts drags; every
    /// release of it ends one.
    pub fn handle_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Left {
            self.pressed = pressed;
        }
    }

    /// End any drag without waiting for a button release.
    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Update the cursor position. Returns the drag delta when a drag is
    /// in progress and a previous position is known.
    pub fn handle_cursor(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let pos = Vec2::new(x, y);
        let previous = self.last_pos.replace(pos);
        if !self.pressed {
            return None;
        }
        previous.map(|prev| pos - prev)
    }
}
