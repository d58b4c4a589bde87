//! The vocabulary controllers use to move the camera.
//!
//! Controllers never touch [`CameraState`](crate::camera::CameraState)
//! directly. They emit [`CameraIntent`]s, and the engine applies each one
//! only if the current [`CameraMode`](super::CameraMode) grants the
//! emitting controller the intent's [`Capability`].

/// A requested change to the camera targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraIntent {
    /// Rotate the heading target by `delta` radians (accumulates).
    AddYaw {
        /// Heading change in radians.
        delta: f32,
    },
    /// Replace the heading target.
    SetYaw {
        /// Absolute heading in radians.
        yaw: f32,
    },
    /// Tilt the gesture pitch offset by `delta` radians.
    AddPitch {
        /// Pitch change in radians (positive looks further down).
        delta: f32,
    },
    /// Replace the zoom target (clamped to the configured range).
    SetZoom {
        /// Absolute zoom.
        zoom: f32,
    },
    /// Override the zoom-derived height target.
    SetHeight {
        /// Absolute height above the floor.
        height: f32,
    },
    /// Move the focus target on the ground plane.
    SetPosition {
        /// World X.
        x: f32,
        /// World Z.
        z: f32,
    },
}

/// Which camera target an intent writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `target_yaw`.
    Yaw,
    /// `target_pitch`.
    Pitch,
    /// `target_zoom`.
    Zoom,
    /// Height override.
    Height,
    /// `target_x` / `target_z`.
    Position,
}

impl CameraIntent {
    /// The target this intent writes.
    #[must_use]
    pub fn capability(&self) -> Capability {
        match self {
            Self::AddYaw { .. } | Self::SetYaw { .. } => Capability::Yaw,
            Self::AddPitch { .. } => Capability::Pitch,
            Self::SetZoom { .. } => Capability::Zoom,
            Self::SetHeight { .. } => Capability::Height,
            Self::SetPosition { .. } => Capability::Position,
        }
    }
}
