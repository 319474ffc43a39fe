//! Map types.

use serde::{Deserialize, Serialize};

use super::cosmetic::null_as_empty;

/// Map image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapImages {
    /// Map without POI labels
    pub blank: String,
    /// Map with POI labels
    pub pois: String,
}

/// World-space POI location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoiLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub location: PoiLocation,
}

/// Response for GET /v1/map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub images: MapImages,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pois: Vec<Poi>,
}

impl Map {
    /// Find a POI by id.
    pub fn get_poi(&self, id: &str) -> Option<&Poi> {
        self.pois.iter().find(|poi| poi.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pois_is_empty() {
        let map: Map = serde_json::from_str(
            r#"{"images": {"blank": "https://a/map.png", "pois": "https://a/map_en.png"}, "pois": null}"#,
        )
        .unwrap();
        assert!(map.pois.is_empty());
        assert!(map.get_poi("Athena.Location.POI.Anything").is_none());
    }
}
