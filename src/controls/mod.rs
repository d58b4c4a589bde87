//! Input controllers.
//!
//! Each controller turns [`InputEvent`]s into [`CameraIntent`]s. Controllers
//! never touch the camera state directly: the engine applies their intents
//! only when the active [`CameraMode`] grants the controller that
//! capability.

mod free;
mod gesture;
mod gyro;

pub use free::FreeController;
pub use gesture::GestureController;
pub use gyro::{GyroController, GyroState};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraView;
use crate::engine::command::CameraIntent;
use crate::engine::CameraMode;
use crate::input::InputEvent;

/// Identifies a controller for mode gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerKind {
    /// Touch, mouse and wheel orbit/zoom.
    Gesture,
    /// Device orientation heading.
    Gyro,
    /// Keyboard, mouse and touch free roam.
    Free,
}

/// How orientation readings map to yaw.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum HeadingMode {
    /// Each reading sets the heading directly.
    Absolute,
    /// Readings are unwrapped into deltas so the heading can accumulate
    /// across full turns.
    #[default]
    Delta,
}

/// Common interface over every input controller.
pub trait Controller {
    /// Which controller this is.
    fn kind(&self) -> ControllerKind;

    /// Whether the controller reacts to input in `mode`. Re-checked on
    /// every event.
    fn is_active(&self, mode: CameraMode) -> bool;

    /// Consume one event and return the intents it produces.
    fn handle_event(
        &mut self,
        event: &InputEvent,
        mode: CameraMode,
        view: &CameraView,
    ) -> Vec<CameraIntent>;

    /// Per-frame hook for continuous input such as held keys.
    fn tick(
        &mut self,
        _dt: f32,
        _mode: CameraMode,
        _view: &CameraView,
    ) -> Vec<CameraIntent> {
        Vec::new()
    }

    /// Drop all tracking state and stop emitting intents for good.
    fn dispose(&mut self);

    /// Whether [`dispose`](Self::dispose) has been called.
    fn is_disposed(&self) -> bool;
}
