//! Centralized camera and input options with TOML preset support.
//!
//! All tweakable settings (zoom chain, gesture sensitivities, free-roam
//! speeds, gyro heading mode, follow/location mapping, mode cycle,
//! keybindings) are consolidated here. Options serialize to/from TOML.

mod camera;
mod follow;
mod free;
mod gesture;
mod gyro;
mod keybindings;
mod modes;

use std::path::Path;

pub use camera::{CameraOptions, RangeOptions};
pub use follow::FollowOptions;
pub use free::FreeOptions;
pub use gesture::GestureOptions;
pub use gyro::GyroOptions;
pub use keybindings::KeybindingOptions;
pub use modes::ModeOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FloorCamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gesture]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Zoom chain, projection and damping parameters.
    pub camera: CameraOptions,
    /// Gesture-mode controller parameters.
    pub gesture: GestureOptions,
    /// Free-roam controller parameters.
    pub free: FreeOptions,
    /// Device-orientation controller parameters.
    pub gyro: GyroOptions,
    /// Location feed and floor asset parameters.
    pub follow: FollowOptions,
    /// Camera mode cycle.
    pub modes: ModeOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// The result is validated, so a loaded configuration can never feed a
    /// zero-width zoom range into the update loop.
    pub fn load(path: &Path) -> Result<Self, FloorCamError> {
        let content = std::fs::read_to_string(path).map_err(FloorCamError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Parse and validate options from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, FloorCamError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| FloorCamError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        opts.validate()?;
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FloorCamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FloorCamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FloorCamError::Io)?;
        }
        std::fs::write(path, content).map_err(FloorCamError::Io)
    }

    /// Reject configurations the camera cannot run with: zero-width or
    /// inverted zoom/pitch ranges, non-positive damping rates, a mode
    /// cycle with fewer than two distinct modes, or a degenerate map
    /// scale.
    pub fn validate(&self) -> Result<(), FloorCamError> {
        let cam = &self.camera;
        if !is_increasing(cam.zoom.min, cam.zoom.max) {
            return Err(invalid(format!(
                "zoom range [{}, {}] must have max > min",
                cam.zoom.min, cam.zoom.max
            )));
        }
        if !is_increasing(cam.pitch.min, cam.pitch.max) {
            return Err(invalid(format!(
                "pitch range [{}, {}] must have max > min",
                cam.pitch.min, cam.pitch.max
            )));
        }
        let rates = [
            ("zoom.damp", cam.zoom.damp),
            ("height.damp", cam.height.damp),
            ("fov.damp", cam.fov.damp),
            ("pitch.damp", cam.pitch.damp),
            ("yaw_damp", cam.yaw_damp),
            ("position_damp", cam.position_damp),
        ];
        if let Some((name, rate)) = rates.iter().find(|(_, r)| r.is_nan() || *r <= 0.0) {
            return Err(invalid(format!("{name} must be positive, got {rate}")));
        }

        let mut distinct = self.modes.cycle.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < 2 || distinct.len() != self.modes.cycle.len() {
            return Err(invalid(format!(
                "mode cycle {:?} needs at least two distinct modes and no \
                 repeats",
                self.modes.cycle
            )));
        }

        if self.follow.map_scale == 0.0 || !self.follow.map_scale.is_finite() {
            return Err(invalid("follow.map_scale must be non-zero".into()));
        }
        if self.follow.poll_interval_ms == 0 {
            return Err(invalid("follow.poll_interval_ms must be positive".into()));
        }
        Ok(())
    }
}

/// `false` for equal, inverted or NaN bounds.
fn is_increasing(min: f32, max: f32) -> bool {
    max > min
}

fn invalid(msg: String) -> FloorCamError {
    FloorCamError::InvalidOptions(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CameraMode;
    use crate::input::{KeyAction, SameSignGesture};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn defaults_are_valid() {
        Options::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[gesture]
pan_sens = 0.01
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.gesture.pan_sens, 0.01);
        // Everything else should be default
        assert_eq!(opts.gesture.same_sign, SameSignGesture::Pinch);
        assert_eq!(opts.camera.zoom.min, 1.0);
        assert_eq!(opts.follow.poll_interval_ms, 1500);
    }

    #[test]
    fn zero_width_zoom_is_rejected() {
        let toml_str = r"
[camera.zoom]
min = 2.0
max = 2.0
damp = 8.0
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, FloorCamError::InvalidOptions(_)));
    }

    #[test]
    fn single_mode_cycle_is_rejected() {
        let mut opts = Options::default();
        opts.modes.cycle = vec![CameraMode::Gesture, CameraMode::Gesture];
        assert!(opts.validate().is_err());
        opts.modes.cycle = vec![CameraMode::Gyro, CameraMode::Gesture];
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn non_positive_damping_is_rejected() {
        let mut opts = Options::default();
        opts.camera.yaw_damp = 0.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn custom_keybindings_rebuild_lookup() {
        let toml_str = r#"
[keybindings.bindings]
toggle_mode = "Space"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Space"), Some(KeyAction::ToggleMode));
        assert_eq!(opts.keybindings.lookup("KeyM"), None);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyM"), Some(KeyAction::ToggleMode));
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("gesture"));
        assert!(props.contains_key("free"));
        assert!(props.contains_key("follow"));
        assert!(!props.contains_key("keybindings"));

        let gesture = &props["gesture"]["properties"];
        assert!(gesture.get("pan_sens").is_some());
        assert!(gesture.get("deadzone").is_none());
    }
}
