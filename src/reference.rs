use geo::algorithm::geodesic_area::GeodesicArea;
use geo::orient::Direction;
use geo::{Area, Coord, Orient, Polygon};

use crate::point::{GeoPoint, PlanarPoint};

/// Ellipsoidal (WGS84) area in square meters, computed by the geo crate.
pub fn geodesic_area(points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let coords: Vec<Coord<f64>> = points
        .iter()
        .map(|p| Coord {
            x: p.lon(),
            y: p.lat(),
        })
        .collect();

    let mut polygon = Polygon::new(coords.into(), vec![]);
    polygon = polygon.orient(Direction::Default);
    polygon.geodesic_area_unsigned()
}

/// Unsigned area of a planar ring.
pub fn planar_area(points: &[PlanarPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let coords: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();

    // UTM coordinates of a simple ring: geo's unsigned area is the shoelace
    // over the closed exterior (Polygon::new closes it) whatever the winding.
    let polygon = Polygon::new(coords.into(), vec![]);
    polygon.unsigned_area()
}
