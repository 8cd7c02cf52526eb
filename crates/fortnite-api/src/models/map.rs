//! The Battle Royale map.

use super::Asset;
use fortnite_api_core::construct::Construct;
use fortnite_api_core::{impl_identity, LazyList, ResponseFlags};
use serde::{Deserialize, Serialize};

/// Renders of the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapImages {
    /// Map without labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank: Option<Asset>,
    /// Map with named locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pois: Option<Asset>,
}

/// The current map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Map {
    /// Renders of the map.
    #[serde(default)]
    pub images: MapImages,
    /// Points of interest.
    #[serde(default)]
    pub pois: LazyList<Poi>,
}

impl Construct for Map {
    fn apply_flags(&mut self, flags: ResponseFlags) {
        self.pois.bind_flags(flags);
    }
}

/// A point of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poi {
    /// Internal id.
    pub id: String,
    /// Display name; unnamed landmarks have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// World location.
    #[serde(default)]
    pub location: PoiLocation,
}

impl Construct for Poi {}

/// Location of a point of interest in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiLocation {
    /// X coordinate.
    #[serde(default)]
    pub x: f64,
    /// Y coordinate.
    #[serde(default)]
    pub y: f64,
    /// Z coordinate.
    #[serde(default)]
    pub z: f64,
}

impl_identity!(Poi);

#[cfg(test)]
mod tests {
    use super::*;
    use fortnite_api_core::HasIdentity;
    use serde_json::json;

    #[test]
    fn pois_are_lazy() {
        let map = Map::construct(
            json!({
                "images": {
                    "blank": "https://fortnite-api.com/images/map.png",
                    "pois": "https://fortnite-api.com/images/map_en.png"
                },
                "pois": [
                    {"id": "Athena.Location.POI.TiltedTowers", "name": "Tilted Towers", "location": {"x": 1.5, "y": -2.0, "z": 0.0}},
                    {"id": "Athena.Location.UnNamedPOI.Landmark", "location": {"x": 0.0, "y": 0.0, "z": 0.0}}
                ]
            }),
            ResponseFlags::INCLUDE_NOTHING,
        )
        .unwrap();

        assert_eq!(map.pois.len(), 2);
        assert_eq!(map.pois.built_count(), 0);

        let tilted = map.pois.find_by_id("Athena.Location.POI.TiltedTowers").unwrap().unwrap();
        assert_eq!(tilted.name.as_deref(), Some("Tilted Towers"));
        assert_eq!(tilted.location.y, -2.0);
        assert_eq!(tilted.id(), "Athena.Location.POI.TiltedTowers");
        assert_eq!(map.pois.built_count(), 1);
    }
}
