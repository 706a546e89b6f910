//! Error types surfaced by scenario setup.
//!
//! Ticking behaviors never fails with an error: a behavior that cannot act
//! this tick reports it through its `Status`. Errors only come from loading
//! configuration and scenario descriptions.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    File(#[from] ScenarioFileError),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("activation radius must be a positive number of meters, got {0}")]
    InvalidRadius(f32),

    #[error("speed factor must be a non-negative number, got {0}")]
    InvalidSpeedFactor(f32),

    #[error("scenario role name must not be empty")]
    EmptyRole,

    #[error("sun altitude thresholds must satisfy low < high, got low={low} high={high}")]
    InvalidSunThresholds { low: f32, high: f32 },

    #[error("tick length must be a positive number of seconds, got {0}")]
    InvalidDelta(f32),
}

#[derive(Debug, Error)]
pub enum ScenarioFileError {
    #[error("failed to read scenario file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse scenario file")]
    Parse(#[from] serde_json::Error),

    #[error("scenario route has no waypoints")]
    EmptyRoute,

    #[error("ego speed must be a positive number of m/s, got {0}")]
    InvalidEgoSpeed(f32),
}
