use glam::Vec2;

use crate::engine::command::CameraIntent;
use crate::options::CameraOptions;
use crate::util::damping::{inverse_lerp, lerp};

/// The shared camera record: every `target_*` is written by input
/// controllers (through [`apply`](Self::apply)), every `current_*` only by
/// the update loop.
///
/// `target_yaw` is unbounded so gyro headings can accumulate across full
/// turns; `current_yaw` stays normalized. `target_pitch` is the gesture
/// offset added to the zoom-derived base pitch, not an absolute tilt.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub(crate) target_yaw: f32,
    pub(crate) current_yaw: f32,
    pub(crate) target_pitch: f32,
    pub(crate) current_pitch: f32,
    pub(crate) target_zoom: f32,
    pub(crate) current_zoom: f32,
    pub(crate) target_height: f32,
    pub(crate) current_height: f32,
    pub(crate) target_fov: f32,
    pub(crate) current_fov: f32,
    pub(crate) target_x: f32,
    pub(crate) target_z: f32,
    pub(crate) current_x: f32,
    pub(crate) current_z: f32,
    /// Vertical offset of the active floor.
    pub(crate) target_elevation: f32,
    pub(crate) current_elevation: f32,
    /// Direct height set by free roam; replaces the zoom-derived height.
    pub(crate) height_override: Option<f32>,
    zoom_min: f32,
    zoom_max: f32,
    /// Largest pitch offset that can still affect the clamped result.
    pitch_span: f32,
}

/// Read-only snapshot controllers use to compute absolute intents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Rendered heading in radians.
    pub yaw: f32,
    /// Zoom target.
    pub target_zoom: f32,
    /// Height target (override or zoom-derived).
    pub target_height: f32,
    /// Focus target on the ground plane (`x`, `z`).
    pub target_position: Vec2,
    /// Configured zoom range.
    pub zoom_range: (f32, f32),
}

impl CameraState {
    /// Initialize every field from configuration so the first frame reads
    /// settled values.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let zoom = options
            .initial_zoom
            .clamp(options.zoom.min, options.zoom.max);
        let t = inverse_lerp(options.zoom.min, options.zoom.max, zoom);
        let height = lerp(options.height.min, options.height.max, t);
        let (pitch_min, pitch_max) = options.pitch_limits();
        let pitch = lerp(pitch_max, pitch_min, t);
        let fov = lerp(options.fov.min, options.fov.max, t);

        Self {
            target_yaw: 0.0,
            current_yaw: 0.0,
            target_pitch: 0.0,
            current_pitch: pitch,
            target_zoom: zoom,
            current_zoom: zoom,
            target_height: height,
            current_height: height,
            target_fov: fov,
            current_fov: fov,
            target_x: 0.0,
            target_z: 0.0,
            current_x: 0.0,
            current_z: 0.0,
            target_elevation: 0.0,
            current_elevation: 0.0,
            height_override: None,
            zoom_min: options.zoom.min,
            zoom_max: options.zoom.max,
            pitch_span: pitch_max - pitch_min,
        }
    }

    /// Adopt new zoom and pitch limits, re-clamping the affected targets.
    pub fn set_limits(&mut self, options: &CameraOptions) {
        let (pitch_min, pitch_max) = options.pitch_limits();
        self.zoom_min = options.zoom.min;
        self.zoom_max = options.zoom.max;
        self.pitch_span = pitch_max - pitch_min;
        self.target_zoom = self.target_zoom.clamp(self.zoom_min, self.zoom_max);
        self.target_pitch = self.target_pitch.clamp(-self.pitch_span, self.pitch_span);
    }

    /// Normalized position of `zoom` within the configured range.
    #[must_use]
    pub fn zoom_fraction(&self, zoom: f32) -> f32 {
        inverse_lerp(self.zoom_min, self.zoom_max, zoom)
    }

    /// Apply a controller intent.
    pub fn apply(&mut self, intent: CameraIntent) {
        match intent {
            CameraIntent::AddYaw { delta } => self.target_yaw += delta,
            CameraIntent::SetYaw { yaw } => self.target_yaw = yaw,
            CameraIntent::AddPitch { delta } => {
                self.target_pitch = (self.target_pitch + delta)
                    .clamp(-self.pitch_span, self.pitch_span);
            }
            CameraIntent::SetZoom { zoom } => {
                self.target_zoom = zoom.clamp(self.zoom_min, self.zoom_max);
            }
            CameraIntent::SetHeight { height } => {
                self.height_override = Some(height.max(0.0));
            }
            CameraIntent::SetPosition { x, z } => {
                self.target_x = x;
                self.target_z = z;
            }
        }
    }

    /// Drop a free-roam height override; height follows zoom again.
    pub fn clear_height_override(&mut self) {
        self.height_override = None;
    }

    /// Set the vertical offset of the floor being viewed.
    pub fn set_elevation(&mut self, elevation: f32) {
        self.target_elevation = elevation;
    }

    /// Snapshot for controllers.
    #[must_use]
    pub fn view(&self) -> CameraView {
        CameraView {
            yaw: self.current_yaw,
            target_zoom: self.target_zoom,
            target_height: self.height_override.unwrap_or(self.target_height),
            target_position: Vec2::new(self.target_x, self.target_z),
            zoom_range: (self.zoom_min, self.zoom_max),
        }
    }

    /// Accumulated heading target in radians.
    #[must_use]
    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    /// Rendered heading in radians, in `(-π, π]`.
    #[must_use]
    pub fn current_yaw(&self) -> f32 {
        self.current_yaw
    }

    /// Gesture pitch offset in radians.
    #[must_use]
    pub fn target_pitch(&self) -> f32 {
        self.target_pitch
    }

    /// Rendered pitch in radians.
    #[must_use]
    pub fn current_pitch(&self) -> f32 {
        self.current_pitch
    }

    /// Zoom target.
    #[must_use]
    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    /// Rendered zoom.
    #[must_use]
    pub fn current_zoom(&self) -> f32 {
        self.current_zoom
    }

    /// Height target as of the last frame.
    #[must_use]
    pub fn target_height(&self) -> f32 {
        self.target_height
    }

    /// Rendered height above the floor.
    #[must_use]
    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    /// Field-of-view target in degrees as of the last frame.
    #[must_use]
    pub fn target_fov(&self) -> f32 {
        self.target_fov
    }

    /// Rendered field of view in degrees.
    #[must_use]
    pub fn current_fov(&self) -> f32 {
        self.current_fov
    }

    /// Rendered ground-plane position as `(x, z)`.
    #[must_use]
    pub fn current_position(&self) -> (f32, f32) {
        (self.current_x, self.current_z)
    }

    /// Rendered floor elevation.
    #[must_use]
    pub fn current_elevation(&self) -> f32 {
        self.current_elevation
    }

    /// Focus target on the ground plane as `(x, z)`.
    #[must_use]
    pub fn target_position(&self) -> (f32, f32) {
        (self.target_x, self.target_z)
    }

    /// Active free-roam height override, if any.
    #[must_use]
    pub fn height_override(&self) -> Option<f32> {
        self.height_override
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values_match_initial_zoom() {
        let opts = CameraOptions::default();
        let state = CameraState::new(&opts);
        assert_eq!(state.target_zoom(), opts.zoom.min);
        assert_eq!(state.current_height(), opts.height.min);
        assert_eq!(state.target_fov(), opts.fov.min);
        assert!((state.current_pitch() - opts.pitch.max.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn zoom_is_clamped() {
        let opts = CameraOptions::default();
        let mut state = CameraState::new(&opts);
        state.apply(CameraIntent::SetZoom { zoom: 100.0 });
        assert_eq!(state.target_zoom(), opts.zoom.max);
        state.apply(CameraIntent::SetZoom { zoom: -4.0 });
        assert_eq!(state.target_zoom(), opts.zoom.min);
    }

    #[test]
    fn yaw_accumulates_without_wrapping() {
        let mut state = CameraState::new(&CameraOptions::default());
        for _ in 0..10 {
            state.apply(CameraIntent::AddYaw { delta: 1.0 });
        }
        assert_eq!(state.target_yaw(), 10.0);
    }

    #[test]
    fn pitch_offset_is_bounded_by_span() {
        let opts = CameraOptions::default();
        let mut state = CameraState::new(&opts);
        state.apply(CameraIntent::AddPitch { delta: 50.0 });
        let (lo, hi) = opts.pitch_limits();
        assert!((state.target_pitch() - (hi - lo)).abs() < 1e-6);
    }

    #[test]
    fn height_override_shows_in_view() {
        let mut state = CameraState::new(&CameraOptions::default());
        state.apply(CameraIntent::SetHeight { height: 12.0 });
        assert_eq!(state.view().target_height, 12.0);
        state.clear_height_override();
        assert_eq!(state.height_override(), None);
    }
}
