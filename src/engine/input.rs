//! Input dispatch for [`FloorCamEngine`].

use super::FloorCamEngine;
use crate::controls::{Controller, ControllerKind};
use crate::input::{InputEvent, KeyAction};

impl FloorCamEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Key events are resolved through the keybindings; everything else
    /// goes to all three controllers, and each resulting intent is applied
    /// only if the current mode grants it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(&InputEvent::Scroll { delta: -120.0 });
    /// engine.handle_input(&InputEvent::Key { key: "KeyM".into(), pressed: true });
    /// ```
    pub fn handle_input(&mut self, event: &InputEvent) {
        if self.disposed {
            return;
        }
        match event {
            InputEvent::Key { key, pressed } => {
                if let Some(action) = self.options.keybindings.lookup(key) {
                    self.handle_key_action(action, *pressed);
                }
                return;
            }
            InputEvent::Resized { width, height } => {
                self.viewport_width = *width;
                self.rig.resize(*width, *height);
            }
            _ => {}
        }

        let mode = self.modes.current();
        let view = self.rig.view();
        let gesture = self.gesture.handle_event(event, mode, &view);
        self.apply_intents(ControllerKind::Gesture, gesture);
        let gyro = self.gyro.handle_event(event, mode, &view);
        self.apply_intents(ControllerKind::Gyro, gyro);
        let free = self.free.handle_event(event, mode, &view);
        self.apply_intents(ControllerKind::Free, free);
    }

    /// Run a bound action. Movement keys track press and release; every
    /// other action fires on press.
    fn handle_key_action(&mut self, action: KeyAction, pressed: bool) {
        if action.is_movement() {
            self.free.handle_key(action, pressed, self.modes.current());
            return;
        }
        if !pressed {
            return;
        }
        match action {
            KeyAction::ToggleMode => self.toggle_mode(),
            KeyAction::ToggleFollow => self.toggle_follow(),
            KeyAction::RequestGps => self.on_request_gps(),
            KeyAction::FloorUp => {
                let _ = self.floor_up();
            }
            KeyAction::FloorDown => {
                let _ = self.floor_down();
            }
            KeyAction::MoveForward
            | KeyAction::MoveBack
            | KeyAction::MoveLeft
            | KeyAction::MoveRight => {}
        }
    }
}
