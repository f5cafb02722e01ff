use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AreaError;
use crate::point::GeoPoint;
use crate::ring::GeoRing;

fn to_ring(lon_lat: impl Iterator<Item = (f64, f64)>) -> Result<GeoRing, AreaError> {
    let points = lon_lat
        .map(|(lon, lat)| GeoPoint::new(lat, lon))
        .collect::<Result<Vec<_>, _>>()?;
    GeoRing::close(points)
}

mod lockml {
    use super::*;
    use kml::Kml;
    use kml::types::Geometry;

    fn find_first_polygon(kml: &Kml) -> Option<geo::Polygon> {
        match kml {
            Kml::KmlDocument(doc) => doc.elements.iter().find_map(find_first_polygon),
            Kml::Document { elements, .. } => elements.iter().find_map(find_first_polygon),
            Kml::Folder(z) => z.elements.iter().find_map(find_first_polygon),
            Kml::Placemark(p) => {
                if let Some(Geometry::Polygon(ls)) = &p.geometry {
                    Some(geo::Polygon::from(ls.clone()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn read(content: &str) -> Result<Vec<GeoRing>, AreaError> {
        let kml: Kml = content
            .parse()
            .map_err(|e| AreaError::Parse(format!("kml: {e}")))?;
        let polygon = find_first_polygon(&kml)
            .ok_or_else(|| AreaError::Parse("kml: no polygon found".to_string()))?;
        let ring = to_ring(polygon.exterior().0.iter().map(|c| (c.x, c.y)))?;
        Ok(vec![ring])
    }
}

mod locgpx {
    use super::*;
    use gpx::Gpx;
    use std::io::Cursor;

    pub fn read(content: &str) -> Result<Vec<GeoRing>, AreaError> {
        let gpx: Gpx =
            gpx::read(Cursor::new(content)).map_err(|e| AreaError::Parse(format!("gpx: {e}")))?;

        // every track segment is an open outline, closed here
        gpx.tracks
            .iter()
            .flat_map(|track| track.segments.iter())
            .map(|segment| {
                to_ring(
                    segment
                        .points
                        .iter()
                        .map(|p| (p.point().x(), p.point().y())),
                )
            })
            .collect()
    }
}

mod locjson {
    use super::*;
    use geojson::{GeoJson, Geometry, Value};

    pub fn read(content: &str) -> Result<Vec<GeoRing>, AreaError> {
        let geojson: GeoJson = content
            .parse()
            .map_err(|e| AreaError::Parse(format!("geojson: {e}")))?;

        let geometries: Vec<Geometry> = match geojson {
            GeoJson::FeatureCollection(collection) => collection
                .features
                .into_iter()
                .filter_map(|feature| feature.geometry)
                .collect(),
            GeoJson::Feature(feature) => feature.geometry.into_iter().collect(),
            GeoJson::Geometry(geometry) => vec![geometry],
        };
        geometries
            .iter()
            .filter_map(geometry_to_ring)
            .collect()
    }

    /// Exterior ring of a Polygon, or of the first polygon of a MultiPolygon.
    fn geometry_to_ring(geometry: &Geometry) -> Option<Result<GeoRing, AreaError>> {
        let exterior = match &geometry.value {
            Value::Polygon(rings) => rings.first()?,
            Value::MultiPolygon(polygons) => polygons.first()?.first()?,
            _ => return None,
        };
        if exterior.iter().any(|p| p.len() < 2) {
            return Some(Err(AreaError::Parse(
                "geojson: position with fewer than 2 coordinates".to_string(),
            )));
        }
        Some(to_ring(exterior.iter().map(|p| (p[0], p[1]))))
    }
}

fn is_supported(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("kml") | Some("gpx") | Some("geojson")
    )
}

/// Reads every ring stored in a `.kml`, `.gpx` or `.geojson` file.
pub fn read_rings(filename: &Path) -> Result<Vec<GeoRing>, AreaError> {
    let content = fs::read_to_string(filename)?;
    read_rings_from_str(&content, filename)
}

/// Parses `content` according to the extension of `filename`.
pub fn read_rings_from_str(content: &str, filename: &Path) -> Result<Vec<GeoRing>, AreaError> {
    match filename.extension().and_then(|e| e.to_str()) {
        Some("kml") => lockml::read(content),
        Some("gpx") => locgpx::read(content),
        Some("geojson") => locjson::read(content),
        _ => Err(AreaError::Parse(format!(
            "unsupported file type: {}",
            filename.display()
        ))),
    }
}

/// Shape files below `path`, or `path` itself when it is a file.
pub fn shape_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    let mut ret: Vec<PathBuf> = walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                log::warn!("skipping: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file() && is_supported(e.path()))
        .map(|e| e.into_path())
        .collect();
    ret.sort();
    ret
}
