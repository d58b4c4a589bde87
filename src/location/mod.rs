//! User location: the indoor position feed, its mapping into world space,
//! the polling clock, and the GPS readout.

mod gps;
mod poller;
mod world;

pub use gps::{GpsFix, GpsService};
pub use poller::LocationPoller;
use serde::{Deserialize, Serialize};
pub use world::WorldMapping;

use crate::error::FloorCamError;

/// One reading from the indoor location feed, in map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Map X.
    pub x: f32,
    /// Map Y (becomes world Z).
    pub y: f32,
    /// Floor number.
    pub floor: i32,
}

impl Location {
    /// Shorthand constructor.
    #[must_use]
    pub fn new(x: f32, y: f32, floor: i32) -> Self {
        Self { x, y, floor }
    }

    /// Parse a `{"x": .., "y": .., "floor": ..}` document.
    pub fn from_json(content: &str) -> Result<Self, FloorCamError> {
        serde_json::from_str(content).map_err(|e| FloorCamError::LocationParse(e.to_string()))
    }
}
