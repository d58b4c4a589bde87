use std::path::{Path, PathBuf};

use super::{resolve_floor_asset, FloorLoader, LocationSource};
use crate::error::FloorCamError;
use crate::location::Location;

/// Location feed read from a JSON file on each fetch.
#[derive(Debug, Clone)]
pub struct JsonFileLocation {
    path: PathBuf,
}

impl JsonFileLocation {
    /// Feed backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LocationSource for JsonFileLocation {
    fn fetch_location(&mut self) -> Result<Location, FloorCamError> {
        let content = std::fs::read_to_string(&self.path)?;
        Location::from_json(&content)
    }
}

/// Floor loader that resolves model files on disk and remembers the
/// active one.
#[derive(Debug, Clone)]
pub struct AssetFloorLoader {
    root: PathBuf,
    patterns: Vec<String>,
    active: Option<(i32, PathBuf)>,
}

impl AssetFloorLoader {
    /// Loader resolving `patterns` under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        Self {
            root: root.into(),
            patterns,
            active: None,
        }
    }

    /// Floor and asset currently shown.
    #[must_use]
    pub fn active(&self) -> Option<(i32, &Path)> {
        self.active.as_ref().map(|(f, p)| (*f, p.as_path()))
    }
}

impl FloorLoader for AssetFloorLoader {
    fn load_floor(&mut self, floor: i32) {
        match resolve_floor_asset(&self.root, &self.patterns, floor, Path::exists) {
            Ok(path) => {
                if let Some((prev, _)) = &self.active {
                    log::debug!("unloading floor {prev}");
                }
                log::info!("floor {floor}: loading {}", path.display());
                self.active = Some((floor, path));
            }
            // The previous floor stays visible.
            Err(e) => log::warn!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("floorcam-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reads_location_file() {
        let dir = scratch_dir("loc");
        let path = dir.join("location.json");
        std::fs::write(&path, r#"{"x": 10, "y": 20, "floor": 4}"#).unwrap();
        let mut feed = JsonFileLocation::new(&path);
        assert_eq!(feed.fetch_location().unwrap(), Location::new(10.0, 20.0, 4));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut feed = JsonFileLocation::new("/nonexistent/floorcam/location.json");
        assert!(matches!(feed.fetch_location(), Err(FloorCamError::Io(_))));
    }

    #[test]
    fn loader_keeps_previous_floor_on_failure() {
        let dir = scratch_dir("assets");
        std::fs::create_dir_all(dir.join("models")).unwrap();
        std::fs::write(dir.join("models/floor1.glb"), b"glb").unwrap();
        let mut loader = AssetFloorLoader::new(
            &dir,
            vec!["models/archif{floor}.glb".to_owned(), "models/floor{floor}.glb".to_owned()],
        );
        loader.load_floor(1);
        assert_eq!(loader.active().map(|(f, _)| f), Some(1));
        loader.load_floor(9);
        assert_eq!(loader.active().map(|(f, _)| f), Some(1));
    }
}
