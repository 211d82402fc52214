//! Domain types for upstream forecast queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors from constructing out-of-range coordinates.
#[derive(Debug, Error, PartialEq)]
pub enum CoordinateRangeError {
    /// Latitude outside [-90, 90].
    #[error("Latitude must be between -90 and 90, got {0}")]
    Latitude(f64),

    /// Longitude outside [-180, 180].
    #[error("Longitude must be between -180 and 180, got {0}")]
    Longitude(f64),
}

/// A validated latitude/longitude pair.
///
/// Both fields are always set together; there is no partially-specified
/// location anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting out-of-range values.
    ///
    /// Latitude is checked before longitude.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateRangeError> {
        if !Self::latitude_in_range(latitude) {
            return Err(CoordinateRangeError::Latitude(latitude));
        }
        if !Self::longitude_in_range(longitude) {
            return Err(CoordinateRangeError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Whether a latitude lies in [-90, 90]. NaN fails.
    pub fn latitude_in_range(latitude: f64) -> bool {
        (-90.0..=90.0).contains(&latitude)
    }

    /// Whether a longitude lies in [-180, 180]. NaN fails.
    pub fn longitude_in_range(longitude: f64) -> bool {
        (-180.0..=180.0).contains(&longitude)
    }
}

/// Error from constructing an out-of-range forecast day count.
#[derive(Debug, Error, PartialEq)]
#[error("Days must be between {min} and {max}, got {got}", min = ForecastDays::MIN, max = ForecastDays::MAX)]
pub struct InvalidForecastDays {
    pub got: i64,
}

/// Number of forecast days requested from the upstream provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastDays(u8);

impl ForecastDays {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 16;

    /// Create a day count, rejecting values outside [1, 16].
    pub fn new(days: i64) -> Result<Self, InvalidForecastDays> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&days) {
            Ok(Self(days as u8))
        } else {
            Err(InvalidForecastDays { got: days })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ForecastDays {
    /// The upstream default of seven days.
    fn default() -> Self {
        Self(7)
    }
}

/// Decoded upstream response, covering only the consumed keys.
///
/// The provider always sends the requested block plus its units, but the
/// decode tolerates absence: a missing key becomes `None` and serializes
/// as `null` in the proxy envelope rather than failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub current: Option<Value>,

    #[serde(default)]
    pub current_units: Option<Value>,

    #[serde(default)]
    pub daily: Option<Value>,

    #[serde(default)]
    pub daily_units: Option<Value>,
}
