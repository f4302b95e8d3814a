//! Error types for fence registration, queries and configuration.

use thiserror::Error;

/// Errors raised by the geofence monitor.
///
/// Registration errors (`InvalidCoordinate`, `InvalidRadius`,
/// `DuplicateFenceId`) reject the whole registration call; nothing is
/// registered. Sample evaluation never fails.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeofenceError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or not finite
    #[error("Invalid coordinate (latitude: {latitude}, longitude: {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Fence radius is zero, negative or not finite
    #[error("Fence '{fence_id}' has invalid radius {radius_meters}, must be > 0")]
    InvalidRadius { fence_id: String, radius_meters: f64 },

    #[error("Duplicate fence id '{0}'")]
    DuplicateFenceId(String),

    #[error("Unknown fence id '{0}'")]
    UnknownFenceId(String),

    /// Sample accuracy is negative or not finite
    #[error("Invalid accuracy {0}, must be finite and >= 0")]
    InvalidAccuracy(f64),

    #[error("Debounce sample count must be at least 1")]
    InvalidDebounce,

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeofenceError>;
