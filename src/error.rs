//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

/// Errors produced by the floorcam crate.
///
/// The per-frame update loop and event handlers never return these; they
/// surface only from configuration loading and the platform adapters.
#[derive(Debug)]
pub enum FloorCamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable configuration.
    InvalidOptions(String),
    /// Location feed could not be decoded.
    LocationParse(String),
    /// No floor asset exists for any configured pattern.
    AssetNotFound {
        /// Floor that was requested.
        floor: i32,
        /// Every path tried, in priority order.
        tried: Vec<PathBuf>,
    },
    /// A sensor (GPS, orientation) is missing or failed to report.
    SensorUnavailable(String),
}

impl fmt::Display for FloorCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::LocationParse(msg) => {
                write!(f, "location parse error: {msg}")
            }
            Self::AssetNotFound { floor, tried } => write!(
                f,
                "no asset for floor {floor} (tried {} paths)",
                tried.len()
            ),
            Self::SensorUnavailable(msg) => {
                write!(f, "sensor unavailable: {msg}")
            }
        }
    }
}

impl std::error::Error for FloorCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FloorCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
