use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::SameSignGesture;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Free Roam", inline)]
#[serde(default)]
/// Keyboard, mouse and touch parameters for unconstrained free roam.
pub struct FreeOptions {
    /// Keyboard movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub move_speed: f32,
    /// World units per pixel of single-finger drag.
    #[schemars(title = "Touch Pan Speed", range(min = 0.005, max = 0.5), extend("step" = 0.005))]
    pub touch_move_speed: f32,
    /// Radians per pixel for mouse drag and two-finger rotate/pitch.
    #[schemars(title = "Rotate Sensitivity", range(min = 0.0005, max = 0.05), extend("step" = 0.0005))]
    pub rotate_sens: f32,
    /// Height change per unit of wheel delta.
    #[schemars(title = "Wheel Height Step", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub height_step: f32,
    /// Height change per pixel of pinch distance change.
    #[schemars(skip)]
    pub pinch_height_sens: f32,
    /// Minimum horizontal finger separation, as a fraction of viewport
    /// width, before a two-finger gesture is accepted.
    #[schemars(skip)]
    pub min_gap_fraction: f32,
    /// Two-finger moves where both fingers travel less than this many
    /// pixels vertically are ignored.
    #[schemars(skip)]
    pub min_vertical_move: f32,
    /// Pinch distance changes at or below this many pixels are ignored.
    #[schemars(skip)]
    pub pinch_threshold: f32,
    /// What same-direction two-finger motion means.
    #[schemars(skip)]
    pub same_sign: SameSignGesture,
}

impl Default for FreeOptions {
    fn default() -> Self {
        Self {
            move_speed: 12.0,
            touch_move_speed: 0.05,
            rotate_sens: 0.005,
            height_step: 0.02,
            pinch_height_sens: 0.1,
            min_gap_fraction: 0.4,
            min_vertical_move: 2.0,
            pinch_threshold: 2.0,
            same_sign: SameSignGesture::Pitch,
        }
    }
}
