use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::CameraMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Modes", inline)]
#[serde(default)]
/// Which camera modes exist and the order `toggle_mode` cycles through.
pub struct ModeOptions {
    /// Cycle order; the first entry is the start-up mode.
    #[schemars(title = "Cycle")]
    pub cycle: Vec<CameraMode>,
}

impl Default for ModeOptions {
    fn default() -> Self {
        Self {
            cycle: vec![CameraMode::Gesture, CameraMode::Gyro, CameraMode::Free],
        }
    }
}
