use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A zoom-driven interpolation range plus the damping rate used to chase
/// the interpolated target.
///
/// `min` is the value at minimum zoom and `max` the value at maximum zoom;
/// the two need not be ordered except where noted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
pub struct RangeOptions {
    /// Value at the low end of the range.
    pub min: f32,
    /// Value at the high end of the range.
    pub max: f32,
    /// Damping rate (1/s) used when converging on targets in this range.
    #[schemars(range(min = 0.1, max = 40.0), extend("step" = 0.1))]
    pub damp: f32,
}

impl RangeOptions {
    /// Shorthand constructor.
    #[must_use]
    pub const fn new(min: f32, max: f32, damp: f32) -> Self {
        Self { min, max, damp }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, zoom chain and damping parameters.
pub struct CameraOptions {
    /// Zoom range; `max` must exceed `min`.
    #[schemars(title = "Zoom")]
    pub zoom: RangeOptions,
    /// Camera height at minimum / maximum zoom.
    #[schemars(title = "Height")]
    pub height: RangeOptions,
    /// Vertical field of view in degrees at minimum / maximum zoom.
    #[schemars(title = "Field of View")]
    pub fov: RangeOptions,
    /// Tilt below the horizon in degrees. `max` is used at minimum zoom,
    /// `min` at maximum zoom, and the final pitch is clamped to
    /// `[min, max]`.
    #[schemars(title = "Pitch")]
    pub pitch: RangeOptions,
    /// Yaw damping rate (1/s).
    #[schemars(title = "Yaw Damping", range(min = 0.5, max = 40.0), extend("step" = 0.5))]
    pub yaw_damp: f32,
    /// Focus position damping rate (1/s).
    #[schemars(title = "Position Damping", range(min = 0.5, max = 40.0), extend("step" = 0.5))]
    pub position_damp: f32,
    /// Zoom the camera starts at.
    #[schemars(skip)]
    pub initial_zoom: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl CameraOptions {
    /// Pitch limits converted to radians, as `(min, max)`.
    #[must_use]
    pub fn pitch_limits(&self) -> (f32, f32) {
        (self.pitch.min.to_radians(), self.pitch.max.to_radians())
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            zoom: RangeOptions::new(1.0, 3.0, 8.0),
            height: RangeOptions::new(80.0, 35.0, 6.0),
            fov: RangeOptions::new(60.0, 45.0, 6.0),
            pitch: RangeOptions::new(35.0, 80.0, 6.0),
            yaw_damp: 10.0,
            position_damp: 4.0,
            initial_zoom: 1.0,
            znear: 0.1,
            zfar: 5000.0,
        }
    }
}
