//! Input handling: event types and the per-device state machines that
//! controllers build on (touch gesture classification, mouse drag,
//! held keys).

/// Platform-agnostic input events.
pub mod event;
/// Held-key tracking and bindable actions.
pub mod keyboard;
/// Mouse drag tracking.
pub mod mouse;
/// Multi-touch gesture tracking and classification.
pub mod touch;

pub use event::{InputEvent, MouseButton, TouchPoint};
pub use keyboard::{HeldKeys, KeyAction};
pub use mouse::DragTracker;
pub use touch::{
    GestureMode, GestureTracker, SameSignGesture, TouchGesture, TrackerConfig,
    TwoFingerMode,
};
