//! Options methods for [`FloorCamEngine`].

use std::path::Path;

use web_time::Instant;

use super::{FloorCamEngine, ModeMachine};
use crate::controls::{FreeController, GestureController};
use crate::error::FloorCamError;
use crate::location::{LocationPoller, WorldMapping};
use crate::options::Options;

impl FloorCamEngine {
    /// Replace options and push them to every subsystem.
    ///
    /// Camera targets, the current floor and the follow state survive;
    /// in-flight gestures and held keys are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`FloorCamError::InvalidOptions`] and keeps the old options
    /// if `new` fails validation.
    pub fn set_options(&mut self, new: Options) -> Result<(), FloorCamError> {
        new.validate()?;
        self.options = new;
        self.apply_options();
        Ok(())
    }

    /// Push current option values to the rig, controllers and location
    /// mapping.
    fn apply_options(&mut self) {
        let opts = &self.options;
        self.rig.set_options(&opts.camera);
        self.gesture = GestureController::new(opts.gesture.clone());
        self.free = FreeController::new(opts.free.clone(), self.viewport_width);
        self.gyro.set_heading_mode(opts.gyro.heading);
        self.mapping = WorldMapping::from_options(&opts.follow);
        let started = self.poller.is_started();
        self.poller = LocationPoller::new(opts.follow.poll_interval_ms);
        if started {
            self.poller.start(Instant::now());
        }

        let cycle = self.options.modes.cycle.clone();
        let mut modes = ModeMachine::new(cycle.clone());
        if cycle.contains(&self.modes.current()) {
            let _ = modes.commit(self.modes.current());
            if self.modes.cancel_pending() {
                self.gyro.disable();
            }
        } else {
            self.enter_mode(modes.current());
        }
        self.modes = modes;
    }

    /// Load a named options preset from `presets_dir`.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path).and_then(|opts| self.set_options(opts)) {
            Ok(()) => {
                log::info!("Loaded options preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to load options preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved options preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to save options preset '{name}': {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{CameraMode, FloorCamEngine};
    use crate::options::Options;
    use crate::platform::Platform;

    fn engine() -> FloorCamEngine {
        FloorCamEngine::new(Options::default(), Platform::default(), 800.0, 600.0).unwrap()
    }

    #[test]
    fn invalid_options_are_rejected_and_kept() {
        let mut engine = engine();
        let mut bad = Options::default();
        bad.camera.zoom.max = bad.camera.zoom.min;
        assert!(engine.set_options(bad).is_err());
        assert_eq!(engine.options(), &Options::default());
    }

    #[test]
    fn shrinking_zoom_range_reclamps_target() {
        let mut engine = engine();
        engine.handle_input(&crate::input::InputEvent::Scroll { delta: -10_000.0 });
        assert_eq!(engine.state().target_zoom(), 3.0);
        let mut opts = Options::default();
        opts.camera.zoom.max = 2.0;
        engine.set_options(opts).unwrap();
        assert_eq!(engine.state().target_zoom(), 2.0);
    }

    #[test]
    fn dropping_current_mode_from_cycle_falls_back() {
        let mut engine = engine();
        engine.toggle_mode();
        engine.toggle_mode();
        assert_eq!(engine.mode(), CameraMode::Free);
        let mut opts = Options::default();
        opts.modes.cycle = vec![CameraMode::Gesture, CameraMode::Gyro];
        engine.set_options(opts).unwrap();
        assert_eq!(engine.mode(), CameraMode::Gesture);
        engine.toggle_mode();
        assert_eq!(engine.mode(), CameraMode::Gyro);
    }

    #[test]
    fn presets_round_trip_through_disk() {
        let dir = std::env::temp_dir().join(format!("floorcam-presets-{}", std::process::id()));
        let mut engine = engine();
        let mut opts = Options::default();
        opts.gesture.pan_sens = 0.01;
        engine.set_options(opts.clone()).unwrap();
        assert!(engine.save_preset("wide", &dir));

        let mut other = self::engine();
        assert!(other.load_preset("wide", &dir));
        assert_eq!(other.options(), &opts);
        assert!(!other.load_preset("missing", &dir));
    }
}
