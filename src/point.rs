use core::fmt;
use std::cmp::Ordering;

use crate::error::AreaError;

/// A geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self, AreaError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if !valid {
            return Err(AreaError::InvalidCoordinate { lat, lon });
        }
        Ok(GeoPoint { lat, lon })
    }
    pub fn lat(&self) -> f64 {
        self.lat
    }
    pub fn lon(&self) -> f64 {
        self.lon
    }
    /// Same latitude, other longitude. Stays valid since both inputs are.
    pub(crate) fn with_lon_of(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lon: other.lon,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geo(lat: {:.5}, lon: {:.5})", self.lat, self.lon)
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GeoPoint {}

impl PartialOrd for GeoPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GeoPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lat
            .total_cmp(&other.lat)
            .then_with(|| self.lon.total_cmp(&other.lon))
    }
}

/// A point of a planar frame, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "planar(x: {:.2}, y: {:.2})", self.x, self.y)
    }
}

#[derive(Clone, Debug)]
pub struct GeoBoundingBox {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

impl GeoBoundingBox {
    /// Box around `seed` and every point of `points`.
    pub fn spanning(seed: GeoPoint, points: &[GeoPoint]) -> Self {
        let (min, max) = points.iter().fold((seed, seed), |(min, max), curr| {
            (
                GeoPoint {
                    lat: min.lat.min(curr.lat),
                    lon: min.lon.min(curr.lon),
                },
                GeoPoint {
                    lat: max.lat.max(curr.lat),
                    lon: max.lon.max(curr.lon),
                },
            )
        });
        GeoBoundingBox { min, max }
    }
}

impl fmt::Display for GeoBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geobbox(min: {}, max: {})", self.min, self.max)
    }
}

#[derive(Clone, Debug)]
pub struct PlanarBoundingBox {
    pub min: PlanarPoint,
    pub max: PlanarPoint,
}

impl PlanarBoundingBox {
    pub fn of(points: &[PlanarPoint]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points.iter().fold((first, first), |(min, max), curr| {
            (
                PlanarPoint {
                    x: min.x.min(curr.x),
                    y: min.y.min(curr.y),
                },
                PlanarPoint {
                    x: max.x.max(curr.x),
                    y: max.y.max(curr.y),
                },
            )
        });
        Some(PlanarBoundingBox { min, max })
    }
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

impl fmt::Display for PlanarBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "planarbbox(min: {}, max: {})", self.min, self.max)
    }
}
