//! Response envelope types.
//!
//! Every response uses one of two shapes: `{success, data, units}` on
//! success, `{error, message}` on failure. There is no partial success.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::ValidationError;

/// Success envelope wrapping a pass-through slice of the upstream payload.
///
/// Absent upstream keys serialize as `null` rather than failing the
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherEnvelope {
    pub success: bool,
    pub data: Option<Value>,
    pub units: Option<Value>,
}

impl WeatherEnvelope {
    pub fn new(data: Option<Value>, units: Option<Value>) -> Self {
        Self {
            success: true,
            data,
            units,
        }
    }
}

/// Uniform error body for 400/404/500 responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Fixed body for unmatched routes.
    pub fn not_found() -> Self {
        Self::new("Not Found", "The requested resource does not exist")
    }

    /// Generic 500 body; the detail stays in the server logs.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("Internal server error", message)
    }
}

impl From<ValidationError> for ErrorBody {
    fn from(err: ValidationError) -> Self {
        Self::new(err.label(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_serializes_null_for_absent_keys() {
        let envelope = WeatherEnvelope::new(None, None);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "data": null, "units": null})
        );
    }

    #[test]
    fn test_validation_error_body() {
        let body = ErrorBody::from(ValidationError::InvalidLatitude);
        assert_eq!(body.error, "Invalid latitude");
        assert_eq!(body.message, "Latitude must be between -90 and 90");
    }

    #[test]
    fn test_not_found_body() {
        let body = ErrorBody::not_found();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "error": "Not Found",
                "message": "The requested resource does not exist"
            })
        );
    }
}
