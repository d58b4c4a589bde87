//! Read-only queries for [`FloorCamEngine`], used by overlays and hosts.

use super::{CameraMode, FloorCamEngine, FollowMode};
use crate::camera::core::{Camera, CameraUniform};
use crate::camera::CameraState;
use crate::controls::GyroState;
use crate::location::Location;
use crate::options::Options;

// ── Modes ──

impl FloorCamEngine {
    /// Committed camera mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.modes.current()
    }

    /// Mode awaiting an orientation-permission answer, if any.
    #[must_use]
    pub fn pending_mode(&self) -> Option<CameraMode> {
        self.modes.pending_target()
    }

    /// Orientation controller lifecycle state.
    #[must_use]
    pub fn gyro_state(&self) -> GyroState {
        self.gyro.state()
    }
}

// ── Follow & location ──

impl FloorCamEngine {
    /// Follow state.
    #[must_use]
    pub fn follow_mode(&self) -> FollowMode {
        self.follow.mode()
    }

    /// Whether location readings move the camera.
    #[must_use]
    pub fn is_following(&self) -> bool {
        self.follow.is_following()
    }

    /// Floor currently shown.
    #[must_use]
    pub fn current_floor(&self) -> Option<i32> {
        self.follow.current_floor()
    }

    /// Most recent location reading.
    #[must_use]
    pub fn last_location(&self) -> Option<Location> {
        self.follow.last_location()
    }

    /// GPS overlay text.
    #[must_use]
    pub fn gps_info(&self) -> String {
        self.gps.info()
    }
}

// ── Camera ──

impl FloorCamEngine {
    /// Render camera as of the last update.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.rig.camera
    }

    /// GPU-ready camera uniform.
    #[must_use]
    pub fn camera_uniform(&self) -> &CameraUniform {
        &self.rig.uniform
    }

    /// Target/current camera record.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        self.rig.state()
    }

    /// Smoothed frames per second of [`frame`](Self::frame).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Multi-line readout for the debug overlay: mode, follow state,
    /// floor, then the camera values.
    #[must_use]
    pub fn debug_info(&self) -> String {
        let floor = self
            .current_floor()
            .map_or_else(|| "None".to_owned(), |f| f.to_string());
        let mut info = format!(
            "MODE: {}\nFOLLOW: {}\nFLOOR: {floor}\n{}",
            self.mode(),
            self.follow_mode().label(),
            self.rig.debug_info(),
        );
        if let Some(heading) = self.gyro.last_heading() {
            info.push_str(&format!("\nALPHA: {:.1}°", heading.to_degrees()));
        }
        info
    }
}
