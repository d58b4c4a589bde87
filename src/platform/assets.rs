use std::path::{Path, PathBuf};

use crate::error::FloorCamError;

/// Pick the first existing asset for `floor`. Each pattern has `{floor}`
/// replaced by the floor number and is joined onto `root`; patterns are
/// tried in order.
pub fn resolve_floor_asset(
    root: &Path,
    patterns: &[String],
    floor: i32,
    exists: impl Fn(&Path) -> bool,
) -> Result<PathBuf, FloorCamError> {
    let mut tried = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let path = root.join(pattern.replace("{floor}", &floor.to_string()));
        if exists(&path) {
            return Ok(path);
        }
        log::warn!("floor {floor}: no asset at {}", path.display());
        tried.push(path);
    }
    log::error!("floor {floor}: every asset pattern failed");
    Err(FloorCamError::AssetNotFound { floor, tried })
}
