//! Follow-the-user reconciliation.
//!
//! [`FollowReconciler`] decides, for each location reading, whether the
//! floor model must be swapped and whether the camera should move. It also
//! owns the current floor, so manual floor selection and auto-follow never
//! disagree about which floor is shown.

use glam::Vec3;

use crate::location::{Location, WorldMapping};

/// Whether location readings move the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowMode {
    /// Readings are cached only.
    #[default]
    Idle,
    /// Readings swap floors and recentre the camera.
    FollowUser,
}

impl FollowMode {
    /// Upper-case label for overlays and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::FollowUser => "FOLLOW_USER",
        }
    }
}

/// Effects of one reading, for the engine to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FollowUpdate {
    /// Floor to load, when the floor changed.
    pub load_floor: Option<i32>,
    /// New camera focus in world space.
    pub target: Option<Vec3>,
}

/// Follow state, current floor and the last reading seen.
#[derive(Debug, Clone, Default)]
pub struct FollowReconciler {
    mode: FollowMode,
    current_floor: Option<i32>,
    last_location: Option<Location>,
}

impl FollowReconciler {
    /// Idle reconciler with no floor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current follow state.
    #[must_use]
    pub fn mode(&self) -> FollowMode {
        self.mode
    }

    /// Whether readings move the camera.
    #[must_use]
    pub fn is_following(&self) -> bool {
        self.mode == FollowMode::FollowUser
    }

    /// Floor currently shown.
    #[must_use]
    pub fn current_floor(&self) -> Option<i32> {
        self.current_floor
    }

    /// Most recent reading, applied or not.
    #[must_use]
    pub fn last_location(&self) -> Option<Location> {
        self.last_location
    }

    /// Start following. Returns whether the state changed.
    pub fn enable(&mut self) -> bool {
        if self.mode == FollowMode::FollowUser {
            return false;
        }
        self.mode = FollowMode::FollowUser;
        log::info!("follow: FOLLOW_USER enabled");
        true
    }

    /// Stop following. Returns whether the state changed.
    pub fn disable(&mut self) -> bool {
        if self.mode == FollowMode::Idle {
            return false;
        }
        self.mode = FollowMode::Idle;
        log::info!("follow: disabled");
        true
    }

    /// Flip between following and idle.
    pub fn toggle(&mut self) {
        let _ = if self.is_following() {
            self.disable()
        } else {
            self.enable()
        };
    }

    /// Record `floor` as shown. Returns `false` if it already was.
    pub fn set_floor(&mut self, floor: i32) -> bool {
        if self.current_floor == Some(floor) {
            return false;
        }
        let previous = self.current_floor.replace(floor);
        match previous {
            Some(prev) => log::info!("floor changed: {prev} → {floor}"),
            None => log::info!("floor changed: None → {floor}"),
        }
        true
    }

    /// Reconcile one polled reading.
    ///
    /// While following, a floor change is recorded before the position is
    /// produced, so repeated readings on the new floor never request a
    /// second load. While idle the reading is only cached.
    pub fn reconcile(&mut self, location: Location, mapping: &WorldMapping) -> FollowUpdate {
        self.last_location = Some(location);
        if !self.is_following() {
            return FollowUpdate::default();
        }
        let load_floor = self.set_floor(location.floor).then_some(location.floor);
        FollowUpdate {
            load_floor,
            target: self.is_following().then(|| mapping.to_world(&location)),
        }
    }

    /// Apply the start-up reading: load its floor and place the camera
    /// whatever the follow state.
    pub fn bootstrap(&mut self, location: Location, mapping: &WorldMapping) -> FollowUpdate {
        self.last_location = Some(location);
        FollowUpdate {
            load_floor: self.set_floor(location.floor).then_some(location.floor),
            target: Some(mapping.to_world(&location)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FollowOptions;

    fn mapping() -> WorldMapping {
        WorldMapping::from_options(&FollowOptions::default())
    }

    #[test]
    fn enable_and_disable_are_idempotent() {
        let mut follow = FollowReconciler::new();
        assert!(follow.enable());
        assert!(!follow.enable());
        assert!(follow.disable());
        assert!(!follow.disable());
        follow.toggle();
        assert_eq!(follow.mode(), FollowMode::FollowUser);
    }

    #[test]
    fn idle_reading_is_cached_only() {
        let mut follow = FollowReconciler::new();
        let _ = follow.set_floor(1);
        let loc = Location::new(5.0, 5.0, 2);
        assert_eq!(follow.reconcile(loc, &mapping()), FollowUpdate::default());
        assert_eq!(follow.last_location(), Some(loc));
        assert_eq!(follow.current_floor(), Some(1));
    }

    #[test]
    fn floor_change_loads_once() {
        let mut follow = FollowReconciler::new();
        let _ = follow.set_floor(1);
        let _ = follow.enable();
        let first = follow.reconcile(Location::new(0.0, 0.0, 2), &mapping());
        assert_eq!(first.load_floor, Some(2));
        assert_eq!(first.target, Some(Vec3::new(0.0, 6.0, 0.0)));
        let second = follow.reconcile(Location::new(3.0, 0.0, 2), &mapping());
        assert_eq!(second.load_floor, None);
        assert!(second.target.is_some());
    }

    #[test]
    fn set_floor_reports_change() {
        let mut follow = FollowReconciler::new();
        assert!(follow.set_floor(3));
        assert!(!follow.set_floor(3));
        assert!(follow.set_floor(4));
    }

    #[test]
    fn bootstrap_places_even_when_idle() {
        let mut follow = FollowReconciler::new();
        let update = follow.bootstrap(Location::new(0.0, 0.0, 1), &mapping());
        assert_eq!(update.load_floor, Some(1));
        assert!(update.target.is_some());
        assert!(!follow.is_following());
    }
}
