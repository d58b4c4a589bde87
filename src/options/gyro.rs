use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::controls::HeadingMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[schemars(title = "Gyro", inline)]
#[serde(default)]
/// Device-orientation controller parameters.
pub struct GyroOptions {
    /// How compass headings become yaw targets.
    #[schemars(title = "Heading Mode")]
    pub heading: HeadingMode,
}
