//! Geographic coordinates and great-circle distance.
//!
//! Everything in this module is pure: no state, no side effects, safe to
//! call from any thread without synchronization.

use crate::error::{GeofenceError, Result};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the spherical approximation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A WGS84-style latitude/longitude pair in degrees.
///
/// `Coordinate` is a plain value type. Use [`Coordinate::new`] to build one
/// that is known to be in range, or [`Coordinate::validate`] to check a value
/// that arrived from elsewhere.
///
/// # Example
///
/// ```rust
/// use geofence_monitor::geo::Coordinate;
///
/// let lagos = Coordinate::new(6.605874, 3.349149).unwrap();
/// assert_eq!(lagos.latitude, 6.605874);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check that both components are finite and within range.
    ///
    /// NaN fails both range checks, so it is rejected here rather than
    /// leaking into distance calculations.
    pub fn validate(&self) -> Result<()> {
        let lat_ok = (MIN_LAT..=MAX_LAT).contains(&self.latitude);
        let lon_ok = (MIN_LON..=MAX_LON).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(GeofenceError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Great-circle distance to `other` in meters.
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance(self, other)
    }
}

/// Great-circle distance between two coordinates in meters.
///
/// Uses the haversine formula on a sphere of radius
/// [`EARTH_RADIUS_METERS`]. The result is symmetric, zero for identical
/// points and always finite and non-negative for valid coordinates.
///
/// # Example
///
/// ```rust
/// use geofence_monitor::geo::{distance, Coordinate};
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
///
/// // One degree of arc along the equator
/// assert!((distance(&a, &b) - 111_194.93).abs() < 0.01);
/// assert_eq!(distance(&a, &a), 0.0);
/// ```
#[inline]
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();
    let h = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lon * sin_lon;

    // Rounding can push h a hair past 1.0 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}
