//! Collaborator interfaces the engine drives but does not implement:
//! browser zoom lock, orientation permission, floor asset loading, the
//! location feed, and geolocation.
//!
//! Every trait has a no-op or file-backed default so the engine runs
//! headless.

mod assets;
#[cfg(test)]
pub(crate) mod fakes;
mod file;

pub use assets::resolve_floor_asset;
pub use file::{AssetFloorLoader, JsonFileLocation};

use crate::engine::PermissionTicket;
use crate::error::FloorCamError;
use crate::location::{GpsFix, Location};

/// Stops the host's native pinch/ctrl-wheel zoom from competing with
/// gesture zoom.
pub trait BrowserLock {
    /// Engage or release the lock. Repeated calls with the same value are
    /// harmless.
    fn set_zoom_lock(&mut self, locked: bool);
}

/// Orientation-sensor permission handshake.
pub trait OrientationPermission {
    /// Whether the platform requires an explicit request. When `false` the
    /// permission is treated as already granted.
    fn requires_request(&self) -> bool;

    /// Start a request. The host answers later through
    /// [`FloorCamEngine::resolve_gyro_permission`](crate::engine::FloorCamEngine::resolve_gyro_permission)
    /// with the same ticket.
    fn request(&mut self, ticket: PermissionTicket);
}

/// Swaps the visible floor model.
pub trait FloorLoader {
    /// Load `floor`, replacing the previous one. Fire-and-forget: failures
    /// are the loader's to log.
    fn load_floor(&mut self, floor: i32);
}

/// Single-shot read of the indoor location feed.
pub trait LocationSource {
    /// Fetch the current location.
    fn fetch_location(&mut self) -> Result<Location, FloorCamError>;
}

/// Satellite positioning.
pub trait Geolocation {
    /// Read the current position.
    fn current_position(&mut self) -> Result<GpsFix, FloorCamError>;
}

/// Lock that only remembers its state.
#[derive(Debug, Default)]
pub struct NoopBrowserLock {
    locked: bool,
}

impl NoopBrowserLock {
    /// Whether the lock is engaged.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl BrowserLock for NoopBrowserLock {
    fn set_zoom_lock(&mut self, locked: bool) {
        if locked != self.locked {
            log::debug!("browser zoom lock {}", if locked { "on" } else { "off" });
            self.locked = locked;
        }
    }
}

/// Platform without a permission API.
#[derive(Debug, Default)]
pub struct PreGranted;

impl OrientationPermission for PreGranted {
    fn requires_request(&self) -> bool {
        false
    }

    fn request(&mut self, _ticket: PermissionTicket) {}
}

/// Floor loader that only logs.
#[derive(Debug, Default)]
pub struct LogFloorLoader;

impl FloorLoader for LogFloorLoader {
    fn load_floor(&mut self, floor: i32) {
        log::info!("load floor {floor}");
    }
}

/// Location feed with no data.
#[derive(Debug, Default)]
pub struct NoLocation;

impl LocationSource for NoLocation {
    fn fetch_location(&mut self) -> Result<Location, FloorCamError> {
        Err(FloorCamError::SensorUnavailable("no location feed".to_owned()))
    }
}

/// Platform without geolocation.
#[derive(Debug, Default)]
pub struct NoGeolocation;

impl Geolocation for NoGeolocation {
    fn current_position(&mut self) -> Result<GpsFix, FloorCamError> {
        Err(FloorCamError::SensorUnavailable("geolocation not supported".to_owned()))
    }
}

/// The set of collaborators an engine talks to.
pub struct Platform {
    /// Browser zoom lock.
    pub browser_lock: Box<dyn BrowserLock>,
    /// Orientation permission handshake.
    pub permission: Box<dyn OrientationPermission>,
    /// Floor model loader.
    pub floor_loader: Box<dyn FloorLoader>,
    /// Indoor location feed.
    pub location: Box<dyn LocationSource>,
    /// Satellite positioning.
    pub geolocation: Box<dyn Geolocation>,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            browser_lock: Box::new(NoopBrowserLock::default()),
            permission: Box::new(PreGranted),
            floor_loader: Box::new(LogFloorLoader),
            location: Box::new(NoLocation),
            geolocation: Box::new(NoGeolocation),
        }
    }
}
