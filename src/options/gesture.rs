use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::SameSignGesture;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gesture", inline)]
#[serde(default)]
/// Sensitivities and thresholds for the gesture (map-style) controller.
pub struct GestureOptions {
    /// Radians of yaw per pixel of horizontal drag.
    #[schemars(title = "Pan Sensitivity", range(min = 0.0005, max = 0.05), extend("step" = 0.0005))]
    pub pan_sens: f32,
    /// Radians of yaw per pixel of two-finger twist.
    #[schemars(title = "Rotate Sensitivity", range(min = 0.0005, max = 0.05), extend("step" = 0.0005))]
    pub rotate_sens: f32,
    /// Horizontal drags at or below this many pixels are ignored.
    #[schemars(skip)]
    pub deadzone: f32,
    /// Zoom per pixel of pinch distance change.
    #[schemars(title = "Pinch Zoom Speed", range(min = 0.0005, max = 0.02), extend("step" = 0.0005))]
    pub zoom_speed: f32,
    /// Zoom per unit of wheel delta.
    #[schemars(title = "Wheel Zoom Speed", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub wheel_zoom_speed: f32,
    /// Pinch distance changes at or below this many pixels are ignored.
    #[schemars(skip)]
    pub pinch_threshold: f32,
    /// Two-finger moves where both fingers travel less than this many
    /// pixels vertically are ignored.
    #[schemars(skip)]
    pub min_vertical_move: f32,
    /// What same-direction two-finger motion means.
    #[schemars(skip)]
    pub same_sign: SameSignGesture,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            pan_sens: 0.005,
            rotate_sens: 0.005,
            deadzone: 0.5,
            zoom_speed: 0.002,
            wheel_zoom_speed: 0.001,
            pinch_threshold: 2.0,
            min_vertical_move: 2.0,
            same_sign: SameSignGesture::Pinch,
        }
    }
}
