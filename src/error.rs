//! Error types for the altitude editor.

use thiserror::Error;

/// Errors raised when (re)establishing the control-point sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Even spacing across `[0, 1]` needs at least two points.
    #[error("a curve needs at least 2 control points, got {requested}")]
    TooFewPoints { requested: usize },
}

/// Reasons a free-text parameter input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("input is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("value is not finite")]
    NotFinite,
    #[error("value must be strictly positive")]
    NotPositive,
}

/// Errors while reading or writing the editor configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
}
