use super::{Controller, ControllerKind};
use crate::camera::CameraView;
use crate::engine::command::CameraIntent;
use crate::engine::CameraMode;
use crate::input::{
    DragTracker, GestureTracker, InputEvent, TouchGesture, TrackerConfig,
};
use crate::options::GestureOptions;

/// Map-style orbit controller: one-finger or mouse drag turns the camera,
/// two-finger twist rotates, pinch or wheel zooms.
///
/// Active in GESTURE mode, and in GYRO mode where the gyro owns yaw but
/// zoom still comes from here.
pub struct GestureController {
    options: GestureOptions,
    tracker: GestureTracker,
    drag: DragTracker,
    disposed: bool,
}

impl GestureController {
    /// Create a controller with the given sensitivities.
    #[must_use]
    pub fn new(options: GestureOptions) -> Self {
        let tracker = GestureTracker::new(TrackerConfig {
            same_sign: options.same_sign,
            min_vertical_move: options.min_vertical_move,
            pinch_threshold: options.pinch_threshold,
            min_horizontal_gap: None,
        });
        Self {
            options,
            tracker,
            drag: DragTracker::new(),
            disposed: false,
        }
    }

    /// Read-only access to the touch tracker.
    #[must_use]
    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    fn horizontal_yaw(&self, dx: f32) -> Option<CameraIntent> {
        (dx.abs() > self.options.deadzone).then(|| CameraIntent::AddYaw {
            delta: -dx * self.options.pan_sens,
        })
    }

    fn zoom_to(view: &CameraView, zoom: f32) -> CameraIntent {
        let (min, max) = view.zoom_range;
        CameraIntent::SetZoom {
            zoom: zoom.max(min).min(max),
        }
    }

    fn gesture_intent(
        &self,
        gesture: TouchGesture,
        view: &CameraView,
    ) -> Option<CameraIntent> {
        let opts = &self.options;
        match gesture {
            TouchGesture::Pan { delta } => self.horizontal_yaw(delta.x),
            TouchGesture::Rotate { dy1, dy2 } => Some(CameraIntent::AddYaw {
                delta: (dy1 - dy2) * opts.rotate_sens,
            }),
            TouchGesture::Pinch { distance_delta } => Some(Self::zoom_to(
                view,
                view.target_zoom + distance_delta * opts.zoom_speed,
            )),
            TouchGesture::Pitch { mean_dy } => Some(CameraIntent::AddPitch {
                delta: -mean_dy * opts.rotate_sens,
            }),
        }
    }
}

impl Controller for GestureController {
    fn kind(&self) -> ControllerKind {
        ControllerKind::Gesture
    }

    fn is_active(&self, mode: CameraMode) -> bool {
        !self.disposed && matches!(mode, CameraMode::Gesture | CameraMode::Gyro)
    }

    fn handle_event(
        &mut self,
        event: &InputEvent,
        mode: CameraMode,
        view: &CameraView,
    ) -> Vec<CameraIntent> {
        if self.disposed {
            return Vec::new();
        }
        // Releases are tracked even while inactive so a gesture that spans
        // a mode switch does not leave stale fingers behind.
        match event {
            InputEvent::MouseButton { button, pressed } => {
                self.drag.handle_button(*button, *pressed);
                return Vec::new();
            }
            InputEvent::MouseLeft => {
                self.drag.release();
                return Vec::new();
            }
            InputEvent::TouchEnd { changed, remaining } => {
                self.tracker.touch_end(changed, remaining);
                return Vec::new();
            }
            _ => {}
        }
        let active = self.is_active(mode);
        if let InputEvent::CursorMoved { x, y } = event {
            // The cursor baseline follows the pointer in every mode.
            let delta = self.drag.handle_cursor(*x, *y);
            return delta
                .filter(|_| active)
                .and_then(|d| self.horizontal_yaw(d.x))
                .into_iter()
                .collect();
        }
        if !active {
            return Vec::new();
        }

        let intent = match event {
            InputEvent::Scroll { delta } => Some(Self::zoom_to(
                view,
                view.target_zoom - delta * self.options.wheel_zoom_speed,
            )),
            InputEvent::TouchStart { touches } => {
                self.tracker.touch_start(touches);
                None
            }
            InputEvent::TouchMove { touches } => self
                .tracker
                .touch_move(touches)
                .and_then(|g| self.gesture_intent(g, view)),
            _ => None,
        };
        intent.into_iter().collect()
    }

    fn dispose(&mut self) {
        self.tracker.reset();
        self.drag.release();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
