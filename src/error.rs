//! Error types.
//!
//! Capacity rejection is an expected outcome (a parcel ends up unscheduled),
//! not an error, and has no variant here.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TruckId;
use crate::validation::ValidationError;

/// Crate-level result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An unrecognized or missing configuration value.
///
/// Raised when building a scheduler or experiment; construction fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unrecognized {option} value: {value:?}")]
    UnknownValue { option: &'static str, value: String },

    #[error("missing {option} value")]
    MissingValue { option: &'static str },
}

impl ConfigError {
    pub(crate) fn unknown(option: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            option,
            value: value.into(),
        }
    }
}

/// A malformed input record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record} record, line {line}: {message}")]
pub struct ParseError {
    /// Kind of record being read ("parcel", "truck", "distance").
    pub record: &'static str,
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with the line.
    pub message: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid experiment configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no distance recorded from {from:?} to {to:?}")]
    MissingDistance { from: String, to: String },

    #[error("truck #{0} is already in the fleet")]
    DuplicateTruck(TruckId),

    #[error("input failed validation with {} problem(s)", .0.len())]
    Validation(Vec<ValidationError>),
}
