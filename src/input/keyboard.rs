use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_mode = "KeyM"
/// move_forward = "KeyW"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Advance to the next camera mode.
    ToggleMode,
    /// Flip follow-the-user on or off.
    ToggleFollow,
    /// Request a GPS fix and start following.
    RequestGps,
    /// Manually select the floor above.
    FloorUp,
    /// Manually select the floor below.
    FloorDown,
    /// Free-roam: move forward while held.
    MoveForward,
    /// Free-roam: move back while held.
    MoveBack,
    /// Free-roam: strafe left while held.
    MoveLeft,
    /// Free-roam: strafe right while held.
    MoveRight,
}

impl KeyAction {
    /// Whether this action is a held movement key rather than a discrete
    /// command.
    #[must_use]
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            Self::MoveForward | Self::MoveBack | Self::MoveLeft | Self::MoveRight
        )
    }
}

/// Set of movement actions whose keys are currently held.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: FxHashSet<KeyAction>,
}

impl HeldKeys {
    /// Mark an action held or released.
    pub fn set(&mut self, action: KeyAction, pressed: bool) {
        if pressed {
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
    }

    /// Whether the action's key is held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Net movement axes as `(right, forward)`, each in `{-1, 0, 1}`.
    #[must_use]
    pub fn axes(&self) -> (f32, f32) {
        let axis = |pos: KeyAction, neg: KeyAction| {
            f32::from(u8::from(self.is_held(pos))) - f32::from(u8::from(self.is_held(neg)))
        };
        (
            axis(KeyAction::MoveRight, KeyAction::MoveLeft),
            axis(KeyAction::MoveForward, KeyAction::MoveBack),
        )
    }
}
