//! The camera engine: owns the rig, the input controllers, the mode
//! machine and the follow reconciler, and drives them once per frame.

mod accessors;
/// Controller intent vocabulary and capability tags.
pub mod command;
/// Follow-the-user state and floor reconciliation.
pub mod follow;
mod input;
/// Camera mode state machine.
pub mod mode;
mod options;

pub use follow::{FollowMode, FollowReconciler, FollowUpdate};
pub use mode::{CameraMode, ModeMachine, PermissionStatus, PermissionTicket, Resolution};
use web_time::{Duration, Instant};

use self::command::CameraIntent;
use crate::camera::CameraRig;
use crate::controls::{
    Controller, ControllerKind, FreeController, GestureController, GyroController,
    GyroState,
};
use crate::error::FloorCamError;
use crate::location::{GpsService, Location, LocationPoller, WorldMapping};
use crate::options::Options;
use crate::platform::Platform;
use crate::util::frame_timing::FrameTiming;

/// Target FPS limit
const TARGET_FPS: u32 = 60;

/// Interactive camera engine for the floor viewer.
///
/// Owns the camera rig, the three input controllers, the mode state machine
/// and the follow reconciler, and talks to the host through a [`Platform`].
///
/// # Frame loop
///
/// Forward every host event to [`handle_input`](Self::handle_input) as it
/// arrives, then call [`update`](Self::update) (or [`frame`](Self::frame))
/// once per rendered frame and read [`camera`](Self::camera).
///
/// # Start-up
///
/// Call [`bootstrap`](Self::bootstrap) once to load the user's floor and
/// start location polling.
///
/// # Permission handshake
///
/// Entering GYRO on a platform that needs permission issues a
/// [`PermissionTicket`] through
/// [`OrientationPermission::request`](crate::platform::OrientationPermission::request).
/// The host answers with [`resolve_gyro_permission`](Self::resolve_gyro_permission);
/// the mode only changes then.
pub struct FloorCamEngine {
    options: Options,
    rig: CameraRig,
    modes: ModeMachine,
    gesture: GestureController,
    gyro: GyroController,
    free: FreeController,
    follow: FollowReconciler,
    mapping: WorldMapping,
    poller: LocationPoller,
    gps: GpsService,
    platform: Platform,
    frame_timing: FrameTiming,
    viewport_width: f32,
    disposed: bool,
}

// =============================================================================
// Core
// =============================================================================

impl FloorCamEngine {
    /// Build an engine for a `width` x `height` viewport.
    ///
    /// # Errors
    ///
    /// Returns [`FloorCamError::InvalidOptions`] if `options` fail
    /// validation.
    pub fn new(
        options: Options,
        mut platform: Platform,
        width: f32,
        height: f32,
    ) -> Result<Self, FloorCamError> {
        options.validate()?;
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        platform.browser_lock.set_zoom_lock(false);
        Ok(Self {
            rig: CameraRig::new(&options.camera, aspect),
            modes: ModeMachine::new(options.modes.cycle.clone()),
            gesture: GestureController::new(options.gesture.clone()),
            gyro: GyroController::new(options.gyro.heading),
            free: FreeController::new(options.free.clone(), width),
            follow: FollowReconciler::new(),
            mapping: WorldMapping::from_options(&options.follow),
            poller: LocationPoller::new(options.follow.poll_interval_ms),
            gps: GpsService::new(),
            platform,
            frame_timing: FrameTiming::new(TARGET_FPS),
            viewport_width: width,
            options,
            disposed: false,
        })
    }

    /// Advance controllers, location polling and the camera by `dt`
    /// seconds.
    pub fn update(&mut self, dt: f32) {
        if self.disposed {
            return;
        }
        let mode = self.modes.current();
        let view = self.rig.view();
        let intents = self.free.tick(dt, mode, &view);
        self.apply_intents(ControllerKind::Free, intents);

        self.poll_location(Instant::now());
        self.rig.update(dt);
    }

    /// Close out a frame on the engine's own clock and run
    /// [`update`](Self::update). Returns the `dt` used.
    pub fn frame(&mut self) -> f32 {
        let dt = self.frame_timing.end_frame();
        self.update(dt);
        dt
    }

    /// Whether the frame limiter allows another frame yet.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.frame_timing.should_render()
    }

    /// How long the frame limiter wants the host to wait before the next
    /// frame.
    #[must_use]
    pub fn time_to_next_frame(&self) -> Duration {
        self.frame_timing.time_to_next_frame()
    }

    /// Apply intents the current mode grants `kind`; drop the rest.
    fn apply_intents(&mut self, kind: ControllerKind, intents: Vec<CameraIntent>) {
        let mode = self.modes.current();
        for intent in intents {
            if mode.grants(kind, intent.capability()) {
                self.rig.apply(intent);
            } else {
                log::trace!("{mode}: dropped {intent:?} from {kind:?}");
            }
        }
    }

    /// Unsubscribe every controller and release the zoom lock. The engine
    /// ignores all further input.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.gesture.dispose();
        self.gyro.dispose();
        self.free.dispose();
        self.platform.browser_lock.set_zoom_lock(false);
        self.disposed = true;
        log::info!("engine disposed");
    }
}

// =============================================================================
// Modes
// =============================================================================

impl FloorCamEngine {
    /// Advance to the next mode in the cycle.
    ///
    /// Entering GYRO on a platform that needs permission only starts the
    /// request; the switch happens in
    /// [`resolve_gyro_permission`](Self::resolve_gyro_permission). Toggling
    /// again before the answer supersedes the request.
    pub fn toggle_mode(&mut self) {
        if self.disposed {
            return;
        }
        let target = self.modes.next_target();
        if target == CameraMode::Gyro && self.platform.permission.requires_request() {
            let ticket = self.modes.begin_request(target);
            self.gyro.begin_permission();
            log::info!("camera mode: requesting orientation permission ({ticket:?})");
            self.platform.permission.request(ticket);
            return;
        }
        if self.modes.cancel_pending() {
            log::debug!("camera mode: permission request superseded");
        }
        self.enter_mode(target);
    }

    /// Deliver the answer to a permission request.
    pub fn resolve_gyro_permission(
        &mut self,
        ticket: PermissionTicket,
        status: PermissionStatus,
    ) {
        if self.disposed {
            return;
        }
        match self.modes.resolve(ticket, status) {
            Resolution::Stale => {
                log::debug!("camera mode: ignoring stale permission answer {ticket:?}");
            }
            Resolution::Granted { target } => self.enter_mode(target),
            Resolution::Denied { target } => {
                log::warn!("camera mode: orientation permission denied, {target} → GESTURE");
                self.gyro.disable();
                self.enter_mode(CameraMode::Gesture);
            }
        }
    }

    /// Commit `target` and run its exit/entry side effects.
    fn enter_mode(&mut self, target: CameraMode) {
        if self.gyro.state() == GyroState::AwaitingPermission && target != CameraMode::Gyro {
            self.gyro.disable();
        }
        let previous = self.modes.commit(target);
        if previous == target {
            return;
        }

        match previous {
            CameraMode::Gyro => self.gyro.disable(),
            CameraMode::Free => self.rig.state_mut().clear_height_override(),
            CameraMode::Gesture => {}
        }
        match target {
            CameraMode::Gyro => {
                self.gyro.enable();
                self.platform.browser_lock.set_zoom_lock(true);
            }
            CameraMode::Free => {
                let _ = self.follow.disable();
                self.platform.browser_lock.set_zoom_lock(false);
            }
            CameraMode::Gesture => self.platform.browser_lock.set_zoom_lock(false),
        }
        log::info!("camera mode: {previous} → {target}");
    }
}

// =============================================================================
// Location & floors
// =============================================================================

impl FloorCamEngine {
    /// Load the user's floor and place the camera from a first location
    /// fetch, whatever the follow state, then start polling.
    ///
    /// # Errors
    ///
    /// Returns the location source's error. Polling starts either way.
    pub fn bootstrap(&mut self) -> Result<Location, FloorCamError> {
        let fetched = self.platform.location.fetch_location();
        if let Ok(location) = fetched {
            let update = self.follow.bootstrap(location, &self.mapping);
            if let Some(floor) = update.load_floor {
                self.show_floor(floor);
                self.rig.state_mut().current_elevation = self.mapping.floor_elevation(floor);
            }
            if let Some(target) = update.target {
                self.rig.place(target.x, target.z);
            }
        }
        self.poller.start(Instant::now());
        fetched
    }

    /// Fetch and apply a location if the poll interval has elapsed.
    pub(crate) fn poll_location(&mut self, now: Instant) {
        if !self.poller.is_started() {
            self.poller.start(now);
            return;
        }
        if !self.poller.poll(now) {
            return;
        }
        match self.platform.location.fetch_location() {
            Ok(location) => self.on_location(location),
            Err(e) => log::debug!("location poll failed: {e}"),
        }
    }

    /// Apply one location reading.
    pub fn on_location(&mut self, location: Location) {
        if self.disposed {
            return;
        }
        let update = self.follow.reconcile(location, &self.mapping);
        if let Some(floor) = update.load_floor {
            self.show_floor(floor);
        }
        if let Some(target) = update.target {
            self.rig.apply(CameraIntent::SetPosition {
                x: target.x,
                z: target.z,
            });
        }
    }

    /// Request a GPS fix, start following and recentre on a fresh
    /// location.
    pub fn on_request_gps(&mut self) {
        if self.disposed {
            return;
        }
        self.gps.request(self.platform.geolocation.as_mut());
        let _ = self.follow.enable();
        match self.platform.location.fetch_location() {
            Ok(location) => self.on_location(location),
            Err(e) => log::debug!("location fetch failed: {e}"),
        }
    }

    /// Manually show `floor`. Stops following first so the next poll does
    /// not undo the choice. Returns whether the floor changed.
    pub fn set_floor(&mut self, floor: i32) -> bool {
        if self.disposed {
            return false;
        }
        let _ = self.follow.disable();
        if self.follow.set_floor(floor) {
            self.show_floor(floor);
            true
        } else {
            false
        }
    }

    /// Show the floor above the current one.
    pub fn floor_up(&mut self) -> bool {
        let next = self.follow.current_floor().map_or(0, |f| f + 1);
        self.set_floor(next)
    }

    /// Show the floor below the current one.
    pub fn floor_down(&mut self) -> bool {
        let next = self.follow.current_floor().map_or(0, |f| f - 1);
        self.set_floor(next)
    }

    fn show_floor(&mut self, floor: i32) {
        self.platform.floor_loader.load_floor(floor);
        let elevation = self.mapping.floor_elevation(floor);
        self.rig.state_mut().set_elevation(elevation);
    }

    /// Start following the user.
    pub fn enable_follow(&mut self) {
        if self.disposed {
            return;
        }
        let _ = self.follow.enable();
    }

    /// Stop following the user.
    pub fn disable_follow(&mut self) {
        if self.disposed {
            return;
        }
        let _ = self.follow.disable();
    }

    /// Flip follow on or off.
    pub fn toggle_follow(&mut self) {
        if self.disposed {
            return;
        }
        self.follow.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use crate::location::GpsFix;
    use crate::platform::fakes::{fake_platform, FakeHandles};

    fn engine_with(fixes: Vec<Option<GpsFix>>) -> (FloorCamEngine, FakeHandles) {
        let (platform, handles) = fake_platform(fixes);
        let engine = FloorCamEngine::new(Options::default(), platform, 800.0, 600.0).unwrap();
        (engine, handles)
    }

    fn engine() -> (FloorCamEngine, FakeHandles) {
        engine_with(Vec::new())
    }

    #[test]
    fn gyro_denial_reverts_to_gesture_without_lock() {
        let (mut engine, fakes) = engine();
        engine.toggle_mode();
        assert_eq!(engine.mode(), CameraMode::Gesture);
        assert_eq!(engine.pending_mode(), Some(CameraMode::Gyro));
        let ticket = fakes.permission.requests.borrow()[0];

        engine.resolve_gyro_permission(ticket, PermissionStatus::Denied);
        assert_eq!(engine.mode(), CameraMode::Gesture);
        assert_eq!(engine.pending_mode(), None);
        assert!(!fakes.lock.is_locked());
        assert!(!fakes.lock.calls.borrow().contains(&true));
        assert_eq!(engine.gyro_state(), GyroState::Disabled);
    }

    #[test]
    fn gyro_grant_engages_lock() {
        let (mut engine, fakes) = engine();
        engine.toggle_mode();
        let ticket = fakes.permission.requests.borrow()[0];
        engine.resolve_gyro_permission(ticket, PermissionStatus::Granted);
        assert_eq!(engine.mode(), CameraMode::Gyro);
        assert!(fakes.lock.is_locked());
        assert_eq!(engine.gyro_state(), GyroState::Enabled);

        engine.toggle_mode();
        assert_eq!(engine.mode(), CameraMode::Free);
        assert!(!fakes.lock.is_locked());
        assert_eq!(engine.gyro_state(), GyroState::Disabled);
    }

    #[test]
    fn toggle_while_pending_supersedes_request() {
        let (mut engine, fakes) = engine();
        engine.toggle_mode();
        let stale = fakes.permission.requests.borrow()[0];
        engine.toggle_mode();
        assert_eq!(engine.mode(), CameraMode::Free);

        engine.resolve_gyro_permission(stale, PermissionStatus::Granted);
        assert_eq!(engine.mode(), CameraMode::Free);
        assert!(!fakes.lock.is_locked());
    }

    #[test]
    fn follow_scenario_loads_floor_once() {
        let (mut engine, fakes) = engine();
        assert!(engine.set_floor(1));
        fakes.floors.loads.borrow_mut().clear();
        assert_eq!(engine.follow_mode(), FollowMode::Idle);

        engine.enable_follow();
        engine.on_location(Location::new(0.0, 0.0, 2));
        assert_eq!(*fakes.floors.loads.borrow(), vec![2]);
        assert_eq!(engine.state().target_position(), (0.0, 0.0));

        engine.on_location(Location::new(0.0, 0.0, 2));
        assert_eq!(*fakes.floors.loads.borrow(), vec![2]);
    }

    #[test]
    fn follow_moves_target_to_mapped_position() {
        let (mut engine, _fakes) = engine();
        engine.enable_follow();
        let scale = engine.options().follow.map_scale;
        engine.on_location(Location::new(scale * 4.0, scale * -2.0, 1));
        let (x, z) = engine.state().target_position();
        assert!((x - 4.0).abs() < 1e-4);
        assert!((z + 2.0).abs() < 1e-4);
    }

    #[test]
    fn manual_floor_selection_stops_following() {
        let (mut engine, fakes) = engine();
        engine.enable_follow();
        engine.on_location(Location::new(0.0, 0.0, 1));
        assert!(engine.set_floor(3));
        assert_eq!(engine.follow_mode(), FollowMode::Idle);

        engine.on_location(Location::new(50.0, 50.0, 5));
        assert_eq!(*fakes.floors.loads.borrow(), vec![1, 3]);
        assert_eq!(engine.state().target_position(), (0.0, 0.0));
        assert_eq!(engine.current_floor(), Some(3));
    }

    #[test]
    fn idle_reading_does_not_move_camera() {
        let (mut engine, fakes) = engine();
        engine.on_location(Location::new(30.0, 30.0, 2));
        assert_eq!(engine.state().target_position(), (0.0, 0.0));
        assert!(fakes.floors.loads.borrow().is_empty());
    }

    #[test]
    fn bootstrap_places_camera_while_idle() {
        let (mut engine, fakes) = engine();
        fakes.location.push(Location::new(0.0, 0.0, 2));
        let loc = engine.bootstrap().unwrap();
        assert_eq!(loc.floor, 2);
        assert_eq!(*fakes.floors.loads.borrow(), vec![2]);
        assert_eq!(engine.follow_mode(), FollowMode::Idle);
        assert!((engine.camera().position.y - (80.0 + 6.0)).abs() < 1e-4);
    }

    #[test]
    fn request_gps_follows_and_recentres() {
        let fix = GpsFix { lat: 1.0, lng: 2.0, accuracy: 3.0 };
        let (mut engine, fakes) = engine_with(vec![Some(fix)]);
        let scale = engine.options().follow.map_scale;
        fakes.location.push(Location::new(scale, scale, 1));
        engine.on_request_gps();
        assert!(engine.is_following());
        assert_eq!(*fakes.floors.loads.borrow(), vec![1]);
        assert!(engine.gps_info().starts_with("Lat: 1.000000"));
    }

    #[test]
    fn entering_free_disables_follow() {
        let (mut engine, fakes) = engine();
        engine.enable_follow();
        engine.toggle_mode();
        let ticket = fakes.permission.requests.borrow()[0];
        engine.resolve_gyro_permission(ticket, PermissionStatus::Granted);
        assert!(engine.is_following());
        engine.toggle_mode();
        assert_eq!(engine.mode(), CameraMode::Free);
        assert!(!engine.is_following());
    }

    #[test]
    fn gyro_mode_drops_gesture_yaw_but_keeps_zoom() {
        let (mut engine, fakes) = engine();
        engine.toggle_mode();
        let ticket = fakes.permission.requests.borrow()[0];
        engine.resolve_gyro_permission(ticket, PermissionStatus::Granted);

        engine.handle_input(&InputEvent::TouchStart {
            touches: vec![crate::input::TouchPoint::new(1, 10.0, 10.0)],
        });
        engine.handle_input(&InputEvent::TouchMove {
            touches: vec![crate::input::TouchPoint::new(1, 60.0, 10.0)],
        });
        assert_eq!(engine.state().target_yaw(), 0.0);

        engine.handle_input(&InputEvent::Scroll { delta: -500.0 });
        assert!(engine.state().target_zoom() > 1.0);

        engine.handle_input(&InputEvent::Orientation { alpha: Some(90.0) });
        engine.handle_input(&InputEvent::Orientation { alpha: Some(100.0) });
        assert!((engine.state().target_yaw() - 10f32.to_radians()).abs() < 1e-4);
    }

    #[test]
    fn leaving_free_clears_height_override() {
        let (mut engine, fakes) = engine();
        engine.toggle_mode();
        let ticket = fakes.permission.requests.borrow()[0];
        engine.resolve_gyro_permission(ticket, PermissionStatus::Granted);
        engine.toggle_mode();
        engine.handle_input(&InputEvent::Scroll { delta: 100.0 });
        assert!(engine.state().height_override().is_some());
        engine.toggle_mode();
        assert_eq!(engine.mode(), CameraMode::Gesture);
        assert_eq!(engine.state().height_override(), None);
    }

    #[test]
    fn keybindings_drive_engine_actions() {
        let (mut engine, fakes) = engine();
        let press = |key: &str| InputEvent::Key {
            key: key.to_owned(),
            pressed: true,
        };
        engine.handle_input(&press("KeyF"));
        assert!(engine.is_following());
        engine.handle_input(&press("PageUp"));
        assert_eq!(engine.current_floor(), Some(0));
        assert!(!engine.is_following());
        engine.handle_input(&press("PageUp"));
        engine.handle_input(&press("PageDown"));
        assert_eq!(engine.current_floor(), Some(0));
        assert_eq!(*fakes.floors.loads.borrow(), vec![0, 1, 0]);
        engine.handle_input(&press("KeyM"));
        assert_eq!(engine.pending_mode(), Some(CameraMode::Gyro));
    }

    #[test]
    fn disposed_engine_ignores_input() {
        let (mut engine, _fakes) = engine();
        engine.dispose();
        engine.handle_input(&InputEvent::Scroll { delta: -500.0 });
        engine.toggle_mode();
        assert_eq!(engine.state().target_zoom(), 1.0);
        assert_eq!(engine.mode(), CameraMode::Gesture);
    }

    #[test]
    fn frame_limiter_wait_is_within_one_frame() {
        let (mut engine, _fakes) = engine();
        let _ = engine.frame();
        let wait = engine.time_to_next_frame();
        assert!(wait <= Duration::from_secs_f64(1.0 / f64::from(TARGET_FPS)));
    }

    #[test]
    fn disposed_engine_ignores_floor_and_follow_calls() {
        let (mut engine, fakes) = engine();
        engine.dispose();
        assert!(!engine.set_floor(2));
        assert!(!engine.floor_up());
        assert!(!engine.floor_down());
        engine.enable_follow();
        engine.toggle_follow();
        assert!(fakes.floors.loads.borrow().is_empty());
        assert_eq!(engine.current_floor(), None);
        assert_eq!(engine.follow_mode(), FollowMode::Idle);
    }

    #[test]
    fn polling_applies_location_after_interval() {
        let (mut engine, fakes) = engine();
        engine.enable_follow();
        fakes.location.push(Location::new(0.0, 0.0, 4));
        let t0 = Instant::now();
        engine.poll_location(t0);
        assert!(fakes.floors.loads.borrow().is_empty());
        engine.poll_location(t0 + Duration::from_millis(1600));
        assert_eq!(*fakes.floors.loads.borrow(), vec![4]);
    }
}
