//! Query parameter validation for the weather endpoints.
//!
//! All failures here short-circuit the request with HTTP 400 before any
//! upstream call is made.

use thiserror::Error;

use open_meteo::{CoordinateRangeError, Coordinates, ForecastDays};

/// Client input errors. The `Display` text is the client-facing
/// `message` field; [`ValidationError::label`] is the `error` field.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Exactly one of latitude/longitude was supplied.
    #[error("Both latitude and longitude must be provided if specifying location")]
    MissingParameter,

    /// Latitude unparsable or outside [-90, 90].
    #[error("Latitude must be between -90 and 90")]
    InvalidLatitude,

    /// Longitude unparsable or outside [-180, 180].
    #[error("Longitude must be between -180 and 180")]
    InvalidLongitude,

    /// Day count unparsable or outside [1, 16].
    #[error("Days must be between 1 and 16")]
    InvalidDaysParameter,
}

impl ValidationError {
    /// Short error label used in the client-facing body.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationError::MissingParameter => "Missing parameters",
            ValidationError::InvalidLatitude => "Invalid latitude",
            ValidationError::InvalidLongitude => "Invalid longitude",
            ValidationError::InvalidDaysParameter => "Invalid days parameter",
        }
    }
}

/// Resolve request coordinates.
///
/// An empty string counts as absent. Both absent falls back to the
/// configured default location; exactly one present is an error. The
/// latitude is fully validated (parse and range) before the longitude
/// is looked at.
pub fn resolve_coordinates(
    latitude: Option<&str>,
    longitude: Option<&str>,
    fallback: Coordinates,
) -> Result<Coordinates, ValidationError> {
    let latitude = latitude.filter(|v| !v.is_empty());
    let longitude = longitude.filter(|v| !v.is_empty());

    let (lat_raw, lon_raw) = match (latitude, longitude) {
        (None, None) => return Ok(fallback),
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(ValidationError::MissingParameter),
    };

    let lat: f64 = lat_raw
        .parse()
        .map_err(|_| ValidationError::InvalidLatitude)?;
    if !Coordinates::latitude_in_range(lat) {
        return Err(ValidationError::InvalidLatitude);
    }

    let lon: f64 = lon_raw
        .parse()
        .map_err(|_| ValidationError::InvalidLongitude)?;

    Coordinates::new(lat, lon).map_err(|e| match e {
        CoordinateRangeError::Latitude(_) => ValidationError::InvalidLatitude,
        CoordinateRangeError::Longitude(_) => ValidationError::InvalidLongitude,
    })
}

/// Resolve the forecast day count.
///
/// An absent parameter defaults to seven days; anything supplied
/// (including an empty string) must parse to an integer in [1, 16].
pub fn resolve_days(days: Option<&str>) -> Result<ForecastDays, ValidationError> {
    let Some(raw) = days else {
        return Ok(ForecastDays::default());
    };

    let parsed: i64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidDaysParameter)?;

    ForecastDays::new(parsed).map_err(|_| ValidationError::InvalidDaysParameter)
}
