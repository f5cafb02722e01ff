use std::fs;
use std::path::Path;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::error::AreaError;
use crate::ring::GeoRing;

pub const DEFAULT_FILENAME: &str = "shapes.geojson";

/// A collection holding the ring as a single-ring Polygon feature.
pub fn feature_collection(ring: &GeoRing) -> FeatureCollection {
    let exterior: Vec<Vec<f64>> = ring.points().iter().map(|p| vec![p.lon(), p.lat()]).collect();
    let mut properties = JsonObject::new();
    properties.insert(
        "name".to_string(),
        JsonValue::from("User-defined shape"),
    );
    let feature = Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![exterior]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    };
    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}

pub fn to_string(ring: &GeoRing) -> Result<String, AreaError> {
    serde_json::to_string_pretty(&feature_collection(ring))
        .map_err(|e| AreaError::Parse(format!("geojson: {e}")))
}

pub fn save(ring: &GeoRing, filename: &Path) -> Result<(), AreaError> {
    fs::write(filename, to_string(ring)?)?;
    log::info!("shape saved as {}", filename.display());
    Ok(())
}
