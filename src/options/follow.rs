use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Follow", inline)]
#[serde(default)]
/// Location feed, map-to-world mapping and floor asset parameters.
pub struct FollowOptions {
    /// Map (database) units per world unit.
    #[schemars(skip)]
    pub map_scale: f32,
    /// Vertical world distance between floors.
    #[schemars(skip)]
    pub floor_height: f32,
    /// Location polling interval in milliseconds.
    #[schemars(title = "Poll Interval (ms)", range(min = 100, max = 60000), extend("step" = 100))]
    pub poll_interval_ms: u64,
    /// Floor asset path patterns in priority order; `{floor}` is replaced
    /// with the floor number.
    #[schemars(skip)]
    pub floor_asset_patterns: Vec<String>,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            map_scale: 2.183_990_8,
            floor_height: 3.0,
            poll_interval_ms: 1500,
            floor_asset_patterns: vec![
                "models/archif{floor}.glb".into(),
                "models/archif{floor}.gltf".into(),
                "models/floor{floor}.glb".into(),
            ],
        }
    }
}
