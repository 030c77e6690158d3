//! Core error types for irrigation-core.
//!
//! Input problems are caught while building an [`IrrigationConfig`] and
//! never reach the generator: once a configuration exists, generation
//! cannot fail.
//!
//! [`IrrigationConfig`]: crate::irrigation::IrrigationConfig

use std::path::PathBuf;
use thiserror::Error;

use crate::clock::TimeOfDay;

/// Core error type for irrigation-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected planner input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Settings-file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the settings tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Config directory could not be created
    #[error("Cannot prepare config directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rejected planner input.
///
/// Everything here is raised before generation begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is not a whole number
    #[error("Invalid number for '{field}': {value:?}")]
    InvalidNumber { field: String, value: String },

    /// Count or duration must be at least 1
    #[error("'{field}' must be at least 1")]
    NonPositive { field: String },

    /// Field is not a time of day
    #[error("Invalid time for '{field}': {value:?} (expected HHMMSS)")]
    InvalidTime { field: String, value: String },

    /// Window is empty or inverted
    #[error("Invalid time range: end_time ({end}) must be after start_time ({start})")]
    InvalidTimeRange { start: TimeOfDay, end: TimeOfDay },

    /// Unknown status label
    #[error("Invalid status: {0:?} (expected Pending, In Progress or Done)")]
    InvalidStatus(String),

    /// Page outside the current view
    #[error("Page {page} out of range (1..={total})")]
    InvalidPage { page: usize, total: usize },
}

/// CSV export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing visible to export
    #[error("No data to export. Please generate a schedule first.")]
    EmptySchedule,

    /// Failed to write the export file
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
