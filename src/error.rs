use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by tile access on a [`Grid`](crate::grid::Grid).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: i32, height: i32 },

    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Errors raised while assembling a level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("no floor tiles after {attempts} generation attempt(s)")]
    NoFloorTiles { attempts: u32 },
}

/// Errors raised while loading a [`LevelConfig`](crate::config::LevelConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
