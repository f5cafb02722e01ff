use crate::point::GeoPoint;

/// Spherical Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance in meters on a sphere of radius [`EARTH_RADIUS`].
pub fn distance(p: &GeoPoint, q: &GeoPoint) -> f64 {
    let lat1 = p.lat().to_radians();
    let lat2 = q.lat().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (q.lon() - p.lon()).to_radians();
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn geo(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_zero_for_same_point() {
        for p in [geo(0.0, 0.0), geo(45.3, -120.7), geo(-89.9, 179.9)] {
            assert_eq!(distance(&p, &p), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            (geo(0.0, 0.0), geo(0.01, 0.01)),
            (geo(18.88, -69.14), geo(18.9, -69.2)),
            (geo(-33.9, 151.2), geo(51.5, -0.1)),
        ];
        for (p, q) in pairs {
            assert_eq!(distance(&p, &q), distance(&q, &p));
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = distance(&geo(0.0, 0.0), &geo(1.0, 0.0));
        assert_relative_eq!(d, EARTH_RADIUS * 1f64.to_radians(), max_relative = 1e-12);
        assert_relative_eq!(d, 111_194.9, max_relative = 1e-6);
    }

    #[test]
    fn test_antipodes() {
        let d = distance(&geo(0.0, 0.0), &geo(0.0, 180.0));
        assert_relative_eq!(d, EARTH_RADIUS * std::f64::consts::PI, max_relative = 1e-12);
    }
}
