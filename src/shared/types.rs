use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Device-reported position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_finite"))]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be within [-180, 180]"
    ))]
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude as sent on the wire: shortest decimal form, no fixed precision
    pub fn latitude_string(&self) -> String {
        self.latitude.to_string()
    }

    /// Longitude as sent on the wire: shortest decimal form, no fixed precision
    pub fn longitude_string(&self) -> String {
        self.longitude.to_string()
    }
}

// Range checks pass NaN through, so reject non-finite values explicitly
fn validate_finite(coordinates: &Coordinates) -> Result<(), ValidationError> {
    if coordinates.latitude.is_finite() && coordinates.longitude.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite_coordinates"))
    }
}
