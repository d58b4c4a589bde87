use glam::Vec3;

use super::Location;
use crate::options::FollowOptions;

/// Converts map-unit locations into world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldMapping {
    /// Map units per world unit.
    pub map_scale: f32,
    /// World height of one floor.
    pub floor_height: f32,
}

impl WorldMapping {
    /// Mapping from follow options.
    #[must_use]
    pub fn from_options(options: &FollowOptions) -> Self {
        Self {
            map_scale: options.map_scale,
            floor_height: options.floor_height,
        }
    }

    /// World position of a location: map X/Y scale onto world X/Z, the
    /// floor number onto world Y.
    #[must_use]
    pub fn to_world(&self, location: &Location) -> Vec3 {
        Vec3::new(
            location.x / self.map_scale,
            self.floor_elevation(location.floor),
            location.y / self.map_scale,
        )
    }

    /// World Y of a floor.
    #[must_use]
    pub fn floor_elevation(&self, floor: i32) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let floor = floor as f32;
        floor * self.floor_height
    }
}
