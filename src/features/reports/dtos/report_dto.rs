use serde::{Deserialize, Deserializer, Serialize};

use crate::features::reports::models::Report;
use crate::shared::types::Coordinates;

/// One element of the `GET /api/trash` array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashEntryDto {
    pub fields: TrashFieldsDto,
}

/// Report fields as stored by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashFieldsDto {
    /// Numeric or numeric string depending on how the row was created
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub long: f64,
    #[serde(rename = "imgURL")]
    pub img_url: String,
}

impl From<TrashEntryDto> for Report {
    fn from(entry: TrashEntryDto) -> Self {
        Report::new(
            entry.fields.img_url,
            Coordinates::new(entry.fields.lat, entry.fields.long),
        )
    }
}

/// Body of `POST /api/addTrash`; coordinates travel as decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTrashDto {
    pub long: String,
    pub lat: String,
    #[serde(rename = "imgURL")]
    pub img_url: String,
}

impl CreateTrashDto {
    pub fn new(coordinates: &Coordinates, image_ref: &str) -> Self {
        Self {
            long: coordinates.longitude_string(),
            lat: coordinates.latitude_string(),
            img_url: image_ref.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text.trim().parse::<f64>().map_err(|e| {
            serde::de::Error::custom(format!("invalid coordinate '{}': {}", text, e))
        }),
    }
}
