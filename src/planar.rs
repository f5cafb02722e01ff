use core::fmt;

use crate::haversine::distance;
use crate::point::{GeoPoint, PlanarPoint};
use crate::ring::GeoRing;

/// How geographic points are laid out in the local planar frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PlanarPolicy {
    /// Signed axis offsets: x grows east, y grows north.
    #[default]
    Tangent,
    /// Unsigned fixed-axis distances, x along the meridian and y along the
    /// parallel of the origin. Every point lands in the non-negative quadrant.
    Compat,
}

impl fmt::Display for PlanarPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanarPolicy::Tangent => write!(f, "tangent"),
            PlanarPolicy::Compat => write!(f, "compat"),
        }
    }
}

/// One planar point per ring point, the first one at (0, 0).
pub fn project(ring: &GeoRing, policy: PlanarPolicy) -> Vec<PlanarPoint> {
    project_points(ring.points(), policy)
}

pub fn project_points(points: &[GeoPoint], policy: PlanarPolicy) -> Vec<PlanarPoint> {
    let Some(origin) = points.first() else {
        return Vec::new();
    };
    points
        .iter()
        .map(|p| {
            // distance along the origin meridian, then along the origin parallel
            let north = distance(origin, &p.with_lon_of(origin));
            let east = distance(origin, &origin.with_lon_of(p));
            match policy {
                PlanarPolicy::Compat => PlanarPoint { x: north, y: east },
                PlanarPolicy::Tangent => PlanarPoint {
                    x: east.copysign(p.lon() - origin.lon()),
                    y: north.copysign(p.lat() - origin.lat()),
                },
            }
        })
        .collect()
}
