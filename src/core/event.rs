//! Position samples flowing in and transition events flowing out.

use crate::error::{GeofenceError, Result};
use crate::geo::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single position fix handed in by the location source.
///
/// Samples can only be built through [`PositionSample::new`] (or
/// deserialization, which runs the same checks), so every sample that
/// reaches the monitor has an in-range coordinate and a finite,
/// non-negative accuracy.
///
/// # Example
///
/// ```rust
/// use geofence_monitor::core::PositionSample;
/// use geofence_monitor::geo::Coordinate;
/// use chrono::Utc;
///
/// let here = Coordinate::new(6.605874, 3.349149).unwrap();
/// let sample = PositionSample::new(here, 12.5, Utc::now()).unwrap();
/// assert_eq!(sample.accuracy_meters(), 12.5);
///
/// assert!(PositionSample::new(here, -1.0, Utc::now()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSample")]
pub struct PositionSample {
    coordinate: Coordinate,
    accuracy_meters: f64,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawSample {
    coordinate: Coordinate,
    accuracy_meters: f64,
    timestamp: DateTime<Utc>,
}

impl TryFrom<RawSample> for PositionSample {
    type Error = GeofenceError;

    fn try_from(raw: RawSample) -> Result<Self> {
        Self::new(raw.coordinate, raw.accuracy_meters, raw.timestamp)
    }
}

impl PositionSample {
    /// Validate and build a sample.
    pub fn new(
        coordinate: Coordinate,
        accuracy_meters: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        coordinate.validate()?;
        if !accuracy_meters.is_finite() || accuracy_meters < 0.0 {
            return Err(GeofenceError::InvalidAccuracy(accuracy_meters));
        }
        Ok(Self {
            coordinate,
            accuracy_meters,
            timestamp,
        })
    }

    /// Convenience constructor from raw latitude/longitude degrees.
    pub fn at(
        latitude: f64,
        longitude: f64,
        accuracy_meters: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        Self::new(
            Coordinate::new(latitude, longitude)?,
            accuracy_meters,
            timestamp,
        )
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn accuracy_meters(&self) -> f64 {
        self.accuracy_meters
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Direction of a committed boundary crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    Entered,
    Exited,
}

impl TransitionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entered => "Entered",
            Self::Exited => "Exited",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record of a single fence crossing.
///
/// Produced by the monitor and handed to the caller; the monitor keeps no
/// copy. `sample` is the position fix that committed the transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub fence_id: String,
    pub kind: TransitionKind,
    /// Timestamp of the committing sample
    pub at: DateTime<Utc>,
    pub sample: PositionSample,
}

impl TransitionEvent {
    pub fn new(fence_id: impl Into<String>, kind: TransitionKind, sample: &PositionSample) -> Self {
        Self {
            fence_id: fence_id.into(),
            kind,
            at: sample.timestamp(),
            sample: sample.clone(),
        }
    }
}
