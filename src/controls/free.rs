use glam::Vec2;

use super::{Controller, ControllerKind};
use crate::camera::CameraView;
use crate::engine::command::CameraIntent;
use crate::engine::CameraMode;
use crate::input::{
    DragTracker, GestureTracker, HeldKeys, InputEvent, KeyAction, TouchGesture,
    TrackerConfig,
};
use crate::options::FreeOptions;

/// Ground-plane unit vectors for a heading, as `(forward, right)` in
/// `(x, z)`. At yaw 0 the camera looks toward -Z, so `forward` points
/// behind it.
fn heading_axes(yaw: f32) -> (Vec2, Vec2) {
    let (sin, cos) = yaw.sin_cos();
    (Vec2::new(sin, cos), Vec2::new(cos, -sin))
}

/// Unconstrained roam: WASD and one-finger drag move the focus point,
/// mouse drag and two-finger twist turn, wheel and pinch change height.
pub struct FreeController {
    options: FreeOptions,
    tracker: GestureTracker,
    drag: DragTracker,
    keys: HeldKeys,
    disposed: bool,
}

impl FreeController {
    /// Create a controller for a viewport `viewport_width` pixels wide.
    #[must_use]
    pub fn new(options: FreeOptions, viewport_width: f32) -> Self {
        let tracker = GestureTracker::new(TrackerConfig {
            same_sign: options.same_sign,
            min_vertical_move: options.min_vertical_move,
            pinch_threshold: options.pinch_threshold,
            min_horizontal_gap: Some(options.min_gap_fraction * viewport_width),
        });
        Self {
            options,
            tracker,
            drag: DragTracker::new(),
            keys: HeldKeys::default(),
            disposed: false,
        }
    }

    /// Record a bound movement key. Presses only register while active;
    /// releases always do, so a key lifted after leaving FREE does not
    /// stay stuck.
    pub fn handle_key(&mut self, action: KeyAction, pressed: bool, mode: CameraMode) {
        if !action.is_movement() || (pressed && !self.is_active(mode)) {
            return;
        }
        self.keys.set(action, pressed);
    }

    /// Keys currently held.
    #[must_use]
    pub fn held_keys(&self) -> &HeldKeys {
        &self.keys
    }

    fn resize(&mut self, width: f32) {
        self.tracker
            .set_min_horizontal_gap(Some(self.options.min_gap_fraction * width));
    }

    fn move_by(view: &CameraView, delta: Vec2) -> CameraIntent {
        let target = view.target_position + delta;
        CameraIntent::SetPosition {
            x: target.x,
            z: target.y,
        }
    }

    fn gesture_intent(&self, gesture: TouchGesture, view: &CameraView) -> CameraIntent {
        let opts = &self.options;
        match gesture {
            TouchGesture::Pan { delta } => {
                let (forward, right) = heading_axes(view.yaw);
                let step = -(right * delta.x + forward * delta.y) * opts.touch_move_speed;
                Self::move_by(view, step)
            }
            TouchGesture::Rotate { dy1, dy2 } => CameraIntent::AddYaw {
                delta: (dy1 - dy2) * opts.rotate_sens,
            },
            TouchGesture::Pitch { mean_dy } => CameraIntent::AddPitch {
                delta: -mean_dy * opts.rotate_sens,
            },
            TouchGesture::Pinch { distance_delta } => CameraIntent::SetHeight {
                height: view.target_height - distance_delta * opts.pinch_height_sens,
            },
        }
    }
}

impl Controller for FreeController {
    fn kind(&self) -> ControllerKind {
        ControllerKind::Free
    }

    fn is_active(&self, mode: CameraMode) -> bool {
        !self.disposed && mode == CameraMode::Free
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
        match event {
            InputEvent::MouseButton { button, pressed } => {
                if !*pressed || self.is_active(mode) {
                    self.drag.handle_button(*button, *pressed);
                }
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
            InputEvent::Resized { width, .. } => {
                self.resize(*width);
                return Vec::new();
            }
            InputEvent::CursorMoved { x, y } => {
                let delta = self.drag.handle_cursor(*x, *y);
                return delta
                    .filter(|_| self.is_active(mode))
                    .map(|d| CameraIntent::AddYaw {
                        delta: -d.x * self.options.rotate_sens,
                    })
                    .into_iter()
                    .collect();
            }
            _ => {}
        }
        if !self.is_active(mode) {
            return Vec::new();
        }

        let intent = match event {
            InputEvent::Scroll { delta } => Some(CameraIntent::SetHeight {
                height: view.target_height + delta * self.options.height_step,
            }),
            InputEvent::TouchStart { touches } => {
                self.tracker.touch_start(touches);
                None
            }
            InputEvent::TouchMove { touches } => self
                .tracker
                .touch_move(touches)
                .map(|g| self.gesture_intent(g, view)),
            _ => None,
        };
        intent.into_iter().collect()
    }

    fn tick(&mut self, dt: f32, mode: CameraMode, view: &CameraView) -> Vec<CameraIntent> {
        if !self.is_active(mode) {
            return Vec::new();
        }
        let (right_axis, forward_axis) = self.keys.axes();
        if right_axis == 0.0 && forward_axis == 0.0 {
            return Vec::new();
        }
        let (forward, right) = heading_axes(view.yaw);
        // Screen-forward is -forward (see `heading_axes`).
        let dir = right * right_axis - forward * forward_axis;
        vec![Self::move_by(view, dir * self.options.move_speed * dt)]
    }

    fn dispose(&mut self) {
        self.tracker.reset();
        self.drag.release();
        self.keys.clear();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
