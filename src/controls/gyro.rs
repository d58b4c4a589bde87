use super::{Controller, ControllerKind, HeadingMode};
use crate::camera::CameraView;
use crate::engine::command::CameraIntent;
use crate::engine::CameraMode;
use crate::input::InputEvent;
use crate::util::damping::shortest_angle_delta;

/// Permission lifecycle of the orientation sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GyroState {
    /// Not listening.
    #[default]
    Disabled,
    /// Permission requested, no answer yet.
    AwaitingPermission,
    /// Listening to orientation readings.
    Enabled,
}

/// Turns device-orientation headings into yaw targets.
pub struct GyroController {
    heading: HeadingMode,
    state: GyroState,
    /// Last heading seen, in radians.
    last_heading: Option<f32>,
    disposed: bool,
}

impl GyroController {
    /// Create a disabled controller.
    #[must_use]
    pub fn new(heading: HeadingMode) -> Self {
        Self {
            heading,
            state: GyroState::Disabled,
            last_heading: None,
            disposed: false,
        }
    }

    /// Permission lifecycle state.
    #[must_use]
    pub fn state(&self) -> GyroState {
        self.state
    }

    /// Last heading reading in radians, if any.
    #[must_use]
    pub fn last_heading(&self) -> Option<f32> {
        self.last_heading
    }

    /// Switch heading interpretation. Restarts the delta chain.
    pub fn set_heading_mode(&mut self, heading: HeadingMode) {
        if heading != self.heading {
            self.heading = heading;
            self.last_heading = None;
        }
    }

    /// Mark a permission request as in flight.
    pub fn begin_permission(&mut self) {
        if self.state == GyroState::Disabled {
            self.state = GyroState::AwaitingPermission;
        }
    }

    /// Start consuming readings.
    pub fn enable(&mut self) {
        self.state = GyroState::Enabled;
    }

    /// Stop consuming readings. The next enable starts a fresh delta chain.
    pub fn disable(&mut self) {
        self.state = GyroState::Disabled;
        self.last_heading = None;
    }

    fn reading(&mut self, alpha_deg: f32) -> Option<CameraIntent> {
        let heading = alpha_deg.to_radians();
        let previous = self.last_heading.replace(heading);
        match self.heading {
            HeadingMode::Absolute => Some(CameraIntent::SetYaw { yaw: heading }),
            HeadingMode::Delta => previous.map(|prev| CameraIntent::AddYaw {
                delta: shortest_angle_delta(prev, heading),
            }),
        }
    }
}

impl Controller for GyroController {
    fn kind(&self) -> ControllerKind {
        ControllerKind::Gyro
    }

    fn is_active(&self, mode: CameraMode) -> bool {
        !self.disposed && mode == CameraMode::Gyro && self.state == GyroState::Enabled
    }

    fn handle_event(
        &mut self,
        event: &InputEvent,
        mode: CameraMode,
        _view: &CameraView,
    ) -> Vec<CameraIntent> {
        if !self.is_active(mode) {
            return Vec::new();
        }
        match event {
            InputEvent::Orientation { alpha: Some(alpha) } => {
                self.reading(*alpha).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }

    fn dispose(&mut self) {
        self.disable();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
