use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::capture::LocationProvider;
use crate::shared::types::Coordinates;

/// Always reports the same position
pub struct FixedLocation {
    coordinates: Coordinates,
}

impl FixedLocation {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates> {
        Ok(self.coordinates)
    }
}
