//! Multi-touch gesture tracking and classification.
//!
//! [`GestureTracker`] remembers where each finger was last seen and turns
//! raw touch moves into [`TouchGesture`]s. Two-finger motion is classified
//! once per gesture, on the first move that clears the vertical threshold:
//! fingers moving in opposite vertical directions rotate, fingers moving
//! together pinch or pitch (configurable). The classification holds until
//! fewer than two fingers remain, so jitter cannot flip a rotate into a
//! pinch halfway through.

use glam::Vec2;
use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::event::TouchPoint;

/// What two fingers moving in the same vertical direction mean.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SameSignGesture {
    /// Finger distance drives zoom (or height in free roam).
    #[default]
    Pinch,
    /// Mean vertical travel tilts the camera.
    Pitch,
}

/// Finger-count state of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    /// No fingers down.
    #[default]
    None,
    /// Gesture began with exactly one finger.
    Single,
    /// Gesture began with two or more fingers.
    Multi,
}

/// Classification of a two-finger gesture, decided once per gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwoFingerMode {
    /// Not yet classified.
    #[default]
    None,
    /// Opposite vertical motion: yaw.
    Rotate,
    /// Same vertical motion, distance-driven.
    Pinch,
    /// Same vertical motion, tilt-driven.
    Pitch,
}

/// A classified touch motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchGesture {
    /// Single finger moved by `delta` pixels.
    Pan {
        /// Movement since the last sample.
        delta: Vec2,
    },
    /// Two fingers moved vertically in opposite directions.
    Rotate {
        /// Vertical travel of the first finger.
        dy1: f32,
        /// Vertical travel of the second finger.
        dy2: f32,
    },
    /// Finger separation changed by more than the pinch threshold.
    Pinch {
        /// Change in separation in pixels (positive = spreading).
        distance_delta: f32,
    },
    /// Two fingers moved vertically together.
    Pitch {
        /// Mean vertical travel of both fingers.
        mean_dy: f32,
    },
}

/// Thresholds and mapping for a [`GestureTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Meaning of same-direction two-finger motion.
    pub same_sign: SameSignGesture,
    /// Two-finger moves where both fingers travel less than this
    /// vertically are held back until they accumulate.
    pub min_vertical_move: f32,
    /// Separation changes at or below this are not reported.
    pub pinch_threshold: f32,
    /// Rotate/pitch gestures need at least this horizontal finger gap.
    pub min_horizontal_gap: Option<f32>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            same_sign: SameSignGesture::Pinch,
            min_vertical_move: 2.0,
            pinch_threshold: 2.0,
            min_horizontal_gap: None,
        }
    }
}

/// Per-gesture finger tracking and classification state.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    config: TrackerConfig,
    /// Touch identifier → last recorded position.
    last: FxHashMap<u64, Vec2>,
    mode: GestureMode,
    two_finger: TwoFingerMode,
    /// Separation at the last reported pinch step.
    pinch_baseline: Option<f32>,
}

fn point(t: TouchPoint) -> Vec2 {
    Vec2::new(t.x, t.y)
}

impl GestureTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Update the minimum horizontal gap (e.g. after a viewport resize).
    pub fn set_min_horizontal_gap(&mut self, gap: Option<f32>) {
        self.config.min_horizontal_gap = gap;
    }

    /// Current finger-count mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Current two-finger classification.
    #[must_use]
    pub fn two_finger_mode(&self) -> TwoFingerMode {
        self.two_finger
    }

    /// Number of fingers with a recorded position.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.last.len()
    }

    /// Forget everything, as if all fingers lifted.
    pub fn reset(&mut self) {
        self.last.clear();
        self.mode = GestureMode::None;
        self.two_finger = TwoFingerMode::None;
        self.pinch_baseline = None;
    }

    /// Fingers touched down. `touches` is every active touch; tracking is
    /// rebuilt from it.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        self.last.clear();
        for t in touches {
            let _ = self.last.insert(t.id, point(*t));
        }
        self.mode = match touches.len() {
            0 => GestureMode::None,
            1 => GestureMode::Single,
            _ => GestureMode::Multi,
        };
        self.two_finger = TwoFingerMode::None;
        self.pinch_baseline = match touches {
            [a, b, ..] => Some(point(*a).distance(point(*b))),
            _ => None,
        };
    }

    /// Fingers moved. Returns the classified motion, if any.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> Option<TouchGesture> {
        match (self.mode, touches) {
            (GestureMode::Single, [t]) => self.single_move(*t),
            (GestureMode::Multi, [t1, t2, ..]) => self.multi_move(*t1, *t2),
            _ => None,
        }
    }

    /// Fingers lifted. `changed` are the lifted touches, `remaining` those
    /// still down.
    pub fn touch_end(&mut self, changed: &[TouchPoint], remaining: &[TouchPoint]) {
        for t in changed {
            let _ = self.last.remove(&t.id);
        }
        if remaining.len() < 2 {
            self.two_finger = TwoFingerMode::None;
            self.pinch_baseline = None;
        }
        if remaining.is_empty() {
            self.reset();
        }
    }

    fn single_move(&mut self, t: TouchPoint) -> Option<TouchGesture> {
        let pos = point(t);
        // A finger with no prior sample only seeds tracking this frame.
        let prev = self.last.insert(t.id, pos)?;
        Some(TouchGesture::Pan { delta: pos - prev })
    }

    fn multi_move(&mut self, t1: TouchPoint, t2: TouchPoint) -> Option<TouchGesture> {
        let (p1, p2) = (point(t1), point(t2));
        let (Some(&l1), Some(&l2)) = (self.last.get(&t1.id), self.last.get(&t2.id))
        else {
            let _ = self.last.entry(t1.id).or_insert(p1);
            let _ = self.last.entry(t2.id).or_insert(p2);
            return None;
        };

        if self.two_finger == TwoFingerMode::Pinch {
            return self.pinch_move((t1.id, p1), (t2.id, p2));
        }

        let dy1 = p1.y - l1.y;
        let dy2 = p2.y - l2.y;
        let min_move = self.config.min_vertical_move;
        let below_vertical = dy1.abs() < min_move && dy2.abs() < min_move;

        // Fingers sliding apart sideways never clear the vertical
        // threshold; their separation alone decides the pinch.
        if below_vertical
            && self.two_finger == TwoFingerMode::None
            && self.config.same_sign == SameSignGesture::Pinch
            && self.separation_changed(p1, p2)
        {
            self.two_finger = TwoFingerMode::Pinch;
            return self.pinch_move((t1.id, p1), (t2.id, p2));
        }

        if let Some(gap) = self.config.min_horizontal_gap {
            if (p1.x - p2.x).abs() < gap {
                return None;
            }
        }

        if below_vertical {
            // Hold back: small moves accumulate against the old sample.
            return None;
        }

        if self.two_finger == TwoFingerMode::None {
            self.two_finger = self.classify(dy1, dy2);
            if self.two_finger == TwoFingerMode::Pinch {
                self.pinch_baseline = Some(l1.distance(l2));
                return self.pinch_move((t1.id, p1), (t2.id, p2));
            }
        }

        self.store(t1.id, p1);
        self.store(t2.id, p2);
        match self.two_finger {
            TwoFingerMode::Rotate => Some(TouchGesture::Rotate { dy1, dy2 }),
            TwoFingerMode::Pitch => Some(TouchGesture::Pitch {
                mean_dy: (dy1 + dy2) * 0.5,
            }),
            TwoFingerMode::None | TwoFingerMode::Pinch => None,
        }
    }

    fn classify(&self, dy1: f32, dy2: f32) -> TwoFingerMode {
        let product = dy1 * dy2;
        if product < 0.0 {
            TwoFingerMode::Rotate
        } else if product > 0.0 {
            match self.config.same_sign {
                SameSignGesture::Pinch => TwoFingerMode::Pinch,
                SameSignGesture::Pitch => TwoFingerMode::Pitch,
            }
        } else {
            TwoFingerMode::None
        }
    }

    fn separation_changed(&self, p1: Vec2, p2: Vec2) -> bool {
        self.pinch_baseline
            .is_some_and(|b| (p1.distance(p2) - b).abs() > self.config.pinch_threshold)
    }

    fn pinch_move(&mut self, a: (u64, Vec2), b: (u64, Vec2)) -> Option<TouchGesture> {
        self.store(a.0, a.1);
        self.store(b.0, b.1);
        let distance = a.1.distance(b.1);
        let baseline = *self.pinch_baseline.get_or_insert(distance);
        let distance_delta = distance - baseline;
        if distance_delta.abs() <= self.config.pinch_threshold {
            return None;
        }
        self.pinch_baseline = Some(distance);
        Some(TouchGesture::Pinch { distance_delta })
    }

    fn store(&mut self, id: u64, pos: Vec2) {
        let _ = self.last.insert(id, pos);
    }
}
