use serde::{Deserialize, Serialize};

use crate::shared::constants::MAP_PLACE_BASE_URL;
use crate::shared::types::Coordinates;

/// A persisted litter sighting.
///
/// `image_ref` is the server-assigned photo URL and doubles as the list key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub image_ref: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Report {
    pub fn new(image_ref: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            image_ref: image_ref.into(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Directions link for this sighting
    pub fn map_url(&self) -> String {
        format!(
            "{}/{},{}",
            MAP_PLACE_BASE_URL, self.latitude, self.longitude
        )
    }
}
