use core::fmt;

use rayon::prelude::*;

use crate::error::AreaError;
use crate::haversine::EARTH_RADIUS;
use crate::planar::{self, PlanarPolicy};
use crate::point::{GeoPoint, PlanarPoint};
use crate::reference;
use crate::ring::{GeoRing, distinct_vertices};
use crate::utm::UtmProjection;

/// Composite trapezoidal integral of y over x, unsigned.
///
/// Only meaningful when the ring behaves like a function y(x); for a closed
/// ring it reduces to the enclosed area.
pub fn trapezoidal_area(planar: &[PlanarPoint]) -> f64 {
    planar
        .windows(2)
        .map(|w| (w[1].x - w[0].x) * (w[0].y + w[1].y) / 2.0)
        .sum::<f64>()
        .abs()
}

/// Shoelace formula over adjacent pairs of a closed planar ring.
pub fn shoelace_area(planar: &[PlanarPoint]) -> f64 {
    let twice: f64 = planar
        .windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum();
    0.5 * twice.abs()
}

/// Longitude steps weighted by the mean sine of latitude, on a sphere of
/// radius [`EARTH_RADIUS`].
pub fn spherical_area(points: &[GeoPoint]) -> f64 {
    let sum: f64 = points
        .windows(2)
        .map(|w| {
            let (lat1, lon1) = (w[0].lat().to_radians(), w[0].lon().to_radians());
            let (lat2, lon2) = (w[1].lat().to_radians(), w[1].lon().to_radians());
            (lon2 - lon1) * (lat1.sin() + lat2.sin()) / 2.0
        })
        .sum();
    (sum * EARTH_RADIUS.powi(2)).abs()
}

/// Planar area after projecting into the UTM zone of the mean longitude.
/// Zero when there are fewer than 3 distinct vertices.
pub fn projected_area(points: &[GeoPoint]) -> Result<f64, AreaError> {
    if distinct_vertices(points) < 3 {
        return Ok(0.0);
    }
    let projection = UtmProjection::for_points(points)?;
    let utm = projection.project_all(points)?;
    Ok(reference::planar_area(&utm))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    Trapezoidal,
    Shoelace,
    Spherical,
    Projected,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Trapezoidal,
        Method::Shoelace,
        Method::Spherical,
        Method::Projected,
    ];

    pub fn area(&self, points: &[GeoPoint], planar: &[PlanarPoint]) -> Result<f64, AreaError> {
        match self {
            Method::Trapezoidal => Ok(trapezoidal_area(planar)),
            Method::Shoelace => Ok(shoelace_area(planar)),
            Method::Spherical => Ok(spherical_area(points)),
            Method::Projected => projected_area(points),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Trapezoidal => "trapezoidal",
            Method::Shoelace => "shoelace",
            Method::Spherical => "spherical",
            Method::Projected => "projected",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug)]
pub struct AreaResult {
    pub method: Method,
    /// Square meters.
    pub area: Result<f64, AreaError>,
}

#[derive(Debug)]
pub struct AreaReport {
    pub policy: PlanarPolicy,
    pub planar: Vec<PlanarPoint>,
    /// One entry per method, in [`Method::ALL`] order.
    pub results: Vec<AreaResult>,
}

impl AreaReport {
    /// Area of `method`, if it succeeded.
    pub fn area(&self, method: Method) -> Option<f64> {
        self.results
            .iter()
            .find(|r| r.method == method)
            .and_then(|r| r.area.as_ref().ok().copied())
    }
}

/// Runs every method on `ring`, each as its own task on the rayon pool.
pub fn estimate(ring: &GeoRing, policy: PlanarPolicy) -> AreaReport {
    let planar = planar::project(ring, policy);
    let results = Method::ALL
        .par_iter()
        .map(|&method| {
            let area = method.area(ring.points(), &planar);
            match &area {
                Ok(a) => log::trace!("{}: {:.2}", method, a),
                Err(e) => log::warn!("{} failed: {}", method, e),
            }
            AreaResult { method, area }
        })
        .collect();
    AreaReport {
        policy,
        planar,
        results,
    }
}
