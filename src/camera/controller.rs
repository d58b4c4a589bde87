use glam::Vec3;

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::state::{CameraState, CameraView};
use crate::engine::command::CameraIntent;
use crate::options::CameraOptions;
use crate::util::damping::{damp, damp_angle, lerp, normalize_angle};

/// Owns the render camera and its target/current state, and turns one into
/// the other once per frame.
pub struct CameraRig {
    /// Render camera written by [`update`](Self::update).
    pub camera: Camera,
    /// GPU-ready copy of the camera matrices.
    pub uniform: CameraUniform,
    state: CameraState,
    options: CameraOptions,
}

impl CameraRig {
    /// Create a rig whose camera already shows the configured initial zoom.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let state = CameraState::new(options);
        let camera = Camera::new(
            aspect,
            state.current_fov,
            options.znear,
            options.zfar,
        );
        let mut rig = Self {
            camera,
            uniform: CameraUniform::new(),
            state,
            options: options.clone(),
        };
        rig.write_camera();
        rig
    }

    /// Shared camera record.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut CameraState {
        &mut self.state
    }

    /// Snapshot handed to controllers.
    #[must_use]
    pub fn view(&self) -> CameraView {
        self.state.view()
    }

    /// Apply a controller intent to the targets.
    pub fn apply(&mut self, intent: CameraIntent) {
        self.state.apply(intent);
    }

    /// Move both target and current ground position, skipping the glide.
    pub fn place(&mut self, x: f32, z: f32) {
        self.state.target_x = x;
        self.state.target_z = z;
        self.state.current_x = x;
        self.state.current_z = z;
        self.write_camera();
    }

    /// Replace camera options. Targets are re-clamped to the new limits;
    /// current values glide to them on the next frames.
    pub fn set_options(&mut self, options: &CameraOptions) {
        self.options = options.clone();
        self.state.set_limits(options);
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.camera.update_projection();
    }

    /// Handle a viewport size change.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.camera.aspect = width / height;
            self.camera.update_projection();
            self.uniform.update_view_proj(&self.camera);
        }
    }

    /// Advance every damped value by `dt` seconds and write the result to
    /// the render camera.
    pub fn update(&mut self, dt: f32) {
        let opts = &self.options;
        let s = &mut self.state;

        s.current_yaw = normalize_angle(damp_angle(
            s.current_yaw,
            s.target_yaw,
            opts.yaw_damp,
            dt,
        ));
        s.current_zoom = damp(s.current_zoom, s.target_zoom, opts.zoom.damp, dt);

        let t = s.zoom_fraction(s.current_zoom);
        s.target_height = lerp(opts.height.min, opts.height.max, t);
        s.target_fov = lerp(opts.fov.min, opts.fov.max, t);
        let (pitch_min, pitch_max) = opts.pitch_limits();
        let base_pitch = lerp(pitch_max, pitch_min, t);
        let final_pitch = (base_pitch + s.target_pitch).max(pitch_min).min(pitch_max);

        let height_target = s.height_override.unwrap_or(s.target_height);
        s.current_height = damp(s.current_height, height_target, opts.height.damp, dt);
        s.current_pitch = damp(s.current_pitch, final_pitch, opts.pitch.damp, dt);
        s.current_fov = damp(s.current_fov, s.target_fov, opts.fov.damp, dt);
        s.current_x = damp(s.current_x, s.target_x, opts.position_damp, dt);
        s.current_z = damp(s.current_z, s.target_z, opts.position_damp, dt);
        s.current_elevation = damp(
            s.current_elevation,
            s.target_elevation,
            opts.position_damp,
            dt,
        );

        self.write_camera();
    }

    fn write_camera(&mut self) {
        let s = &self.state;
        self.camera.position = Vec3::new(
            s.current_x,
            s.current_height + s.current_elevation,
            s.current_z,
        );
        self.camera.pitch = s.current_pitch;
        self.camera.yaw = s.current_yaw;
        self.camera.roll = 0.0;
        self.camera.zoom = s.current_zoom;
        self.camera.fovy = s.current_fov;
        self.camera.update_projection();
        self.uniform.update_view_proj(&self.camera);
    }

    /// Human-readable camera readout.
    #[must_use]
    pub fn debug_info(&self) -> String {
        let s = &self.state;
        format!(
            "ZOOM: {:.2}\nHEIGHT: {:.1}\nYAW: {:.1}°\nPITCH: {:.1}°\nPOS: ({:.1}, {:.1})",
            s.current_zoom,
            s.current_height,
            s.current_yaw.to_degrees(),
            s.current_pitch.to_degrees(),
            s.current_x,
            s.current_z,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(&CameraOptions::default(), 16.0 / 9.0)
    }

    fn settle(rig: &mut CameraRig) {
        for _ in 0..600 {
            rig.update(1.0 / 60.0);
        }
    }

    #[test]
    fn full_zoom_reaches_max_pair() {
        let opts = CameraOptions::default();
        let mut rig = rig();
        rig.apply(CameraIntent::SetZoom { zoom: opts.zoom.max });
        settle(&mut rig);
        let s = rig.state();
        assert!((s.target_height() - opts.height.max).abs() < 1e-3);
        assert!((s.target_fov() - opts.fov.max).abs() < 1e-3);
        assert!((s.current_pitch() - opts.pitch.min.to_radians()).abs() < 1e-3);
    }

    #[test]
    fn min_zoom_keeps_min_pair() {
        let opts = CameraOptions::default();
        let mut rig = rig();
        rig.update(1.0 / 60.0);
        assert!((rig.state().target_height() - opts.height.min).abs() < 1e-4);
        assert!((rig.state().target_fov() - opts.fov.min).abs() < 1e-4);
    }

    #[test]
    fn height_and_fov_are_monotonic_in_zoom() {
        let opts = CameraOptions::default();
        let mut rig = rig();
        let (mut last_h, mut last_fov) = (f32::INFINITY, f32::INFINITY);
        for step in 0..=10 {
            let zoom = lerp(opts.zoom.min, opts.zoom.max, step as f32 / 10.0);
            rig.apply(CameraIntent::SetZoom { zoom });
            settle(&mut rig);
            let (h, fov) = (rig.state().target_height(), rig.state().target_fov());
            assert!(h <= last_h + 1e-4, "height rose at step {step}");
            assert!(fov <= last_fov + 1e-4, "fov widened at step {step}");
            (last_h, last_fov) = (h, fov);
        }
        assert!((last_fov - opts.fov.max).abs() < 1e-3);
    }

    #[test]
    fn yaw_takes_short_way_across_seam() {
        let mut rig = rig();
        rig.state_mut().current_yaw = PI - 0.1;
        rig.apply(CameraIntent::SetYaw { yaw: -PI + 0.1 });
        rig.update(1.0 / 60.0);
        let yaw = rig.state().current_yaw();
        // Moving the short way crosses the seam instead of sweeping through 0.
        assert!(yaw.abs() > PI - 0.1 - 1e-4);
        assert!(yaw > -PI && yaw <= PI);
    }

    #[test]
    fn pitch_offset_never_leaves_limits() {
        let opts = CameraOptions::default();
        let (lo, hi) = opts.pitch_limits();
        let mut rig = rig();
        rig.apply(CameraIntent::AddPitch { delta: 10.0 });
        settle(&mut rig);
        assert!(rig.state().current_pitch() <= hi + 1e-5);
        rig.apply(CameraIntent::AddPitch { delta: -40.0 });
        settle(&mut rig);
        assert!(rig.state().current_pitch() >= lo - 1e-5);
    }

    #[test]
    fn height_override_replaces_zoom_height() {
        let mut rig = rig();
        rig.apply(CameraIntent::SetHeight { height: 10.0 });
        settle(&mut rig);
        assert!((rig.state().current_height() - 10.0).abs() < 1e-2);
        rig.state_mut().clear_height_override();
        settle(&mut rig);
        assert!((rig.state().current_height() - 80.0).abs() < 1e-2);
    }

    #[test]
    fn camera_receives_position_and_elevation() {
        let mut rig = rig();
        rig.apply(CameraIntent::SetPosition { x: 5.0, z: -3.0 });
        rig.state_mut().set_elevation(6.0);
        settle(&mut rig);
        let p = rig.camera.position;
        assert!((p.x - 5.0).abs() < 1e-3);
        assert!((p.z + 3.0).abs() < 1e-3);
        assert!((p.y - 86.0).abs() < 1e-2);
    }

    #[test]
    fn place_skips_damping() {
        let mut rig = rig();
        rig.place(12.0, 4.0);
        assert_eq!(rig.state().current_position(), (12.0, 4.0));
        assert_eq!(rig.camera.position.x, 12.0);
    }

    #[test]
    fn debug_info_lists_fields() {
        let info = rig().debug_info();
        for key in ["ZOOM", "HEIGHT", "YAW", "PITCH", "POS"] {
            assert!(info.contains(key), "missing {key}");
        }
    }
}
