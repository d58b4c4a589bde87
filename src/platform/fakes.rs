//! Recording fakes for engine tests. Each fake shares its log through an
//! `Rc<RefCell<..>>` so the test keeps a handle after boxing it into a
//! [`Platform`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{
    BrowserLock, FloorLoader, Geolocation, LocationSource, OrientationPermission,
    Platform,
};
use crate::engine::PermissionTicket;
use crate::error::FloorCamError;
use crate::location::{GpsFix, Location};

#[derive(Default, Clone)]
pub(crate) struct RecordingLock {
    pub calls: Rc<RefCell<Vec<bool>>>,
}

impl RecordingLock {
    pub fn is_locked(&self) -> bool {
        self.calls.borrow().last().copied().unwrap_or(false)
    }
}

impl BrowserLock for RecordingLock {
    fn set_zoom_lock(&mut self, locked: bool) {
        self.calls.borrow_mut().push(locked);
    }
}

#[derive(Default, Clone)]
pub(crate) struct ManualPermission {
    pub requests: Rc<RefCell<Vec<PermissionTicket>>>,
}

impl OrientationPermission for ManualPermission {
    fn requires_request(&self) -> bool {
        true
    }

    fn request(&mut self, ticket: PermissionTicket) {
        self.requests.borrow_mut().push(ticket);
    }
}

#[derive(Default, Clone)]
pub(crate) struct RecordingFloorLoader {
    pub loads: Rc<RefCell<Vec<i32>>>,
}

impl FloorLoader for RecordingFloorLoader {
    fn load_floor(&mut self, floor: i32) {
        self.loads.borrow_mut().push(floor);
    }
}

/// Returns the queued location each fetch; repeats the last one once the
/// queue runs dry.
#[derive(Default, Clone)]
pub(crate) struct ScriptedLocation {
    pub queue: Rc<RefCell<VecDeque<Location>>>,
    last: Rc<RefCell<Option<Location>>>,
}

impl ScriptedLocation {
    pub fn push(&self, location: Location) {
        self.queue.borrow_mut().push_back(location);
    }
}

impl LocationSource for ScriptedLocation {
    fn fetch_location(&mut self) -> Result<Location, FloorCamError> {
        if let Some(next) = self.queue.borrow_mut().pop_front() {
            *self.last.borrow_mut() = Some(next);
        }
        (*self.last.borrow())
            .ok_or_else(|| FloorCamError::SensorUnavailable("empty script".to_owned()))
    }
}

pub(crate) struct FakeGeolocation {
    fixes: VecDeque<Option<GpsFix>>,
}

impl FakeGeolocation {
    pub fn new(fixes: Vec<Option<GpsFix>>) -> Self {
        Self { fixes: fixes.into() }
    }
}

impl Geolocation for FakeGeolocation {
    fn current_position(&mut self) -> Result<GpsFix, FloorCamError> {
        self.fixes
            .pop_front()
            .flatten()
            .ok_or_else(|| FloorCamError::SensorUnavailable("timeout".to_owned()))
    }
}

/// Handles onto every fake in a [`Platform`] built by [`fake_platform`].
pub(crate) struct FakeHandles {
    pub lock: RecordingLock,
    pub permission: ManualPermission,
    pub floors: RecordingFloorLoader,
    pub location: ScriptedLocation,
}

pub(crate) fn fake_platform(fixes: Vec<Option<GpsFix>>) -> (Platform, FakeHandles) {
    let handles = FakeHandles {
        lock: RecordingLock::default(),
        permission: ManualPermission::default(),
        floors: RecordingFloorLoader::default(),
        location: ScriptedLocation::default(),
    };
    let platform = Platform {
        browser_lock: Box::new(handles.lock.clone()),
        permission: Box::new(handles.permission.clone()),
        floor_loader: Box::new(handles.floors.clone()),
        location: Box::new(handles.location.clone()),
        geolocation: Box::new(FakeGeolocation::new(fixes)),
    };
    (platform, handles)
}
