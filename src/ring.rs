use std::collections::BTreeSet;

use crate::error::AreaError;
use crate::point::{GeoBoundingBox, GeoPoint};

/// A closed polygon boundary: first point repeated at the end, at least 3
/// distinct vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoRing {
    points: Vec<GeoPoint>,
}

impl GeoRing {
    /// Validates a ring that is already closed.
    pub fn new(points: Vec<GeoPoint>) -> Result<Self, AreaError> {
        match (points.first(), points.last()) {
            (Some(first), Some(last)) if first == last => {}
            (None, _) => {
                return Err(AreaError::InputTooSmall {
                    points: 0,
                    distinct: 0,
                });
            }
            _ => return Err(AreaError::OpenRing),
        }
        let distinct = distinct_vertices(&points);
        if points.len() < 4 || distinct < 3 {
            return Err(AreaError::InputTooSmall {
                points: points.len(),
                distinct,
            });
        }
        Ok(GeoRing { points })
    }

    /// Appends the first point unless the sequence is closed already.
    pub fn close(mut points: Vec<GeoPoint>) -> Result<Self, AreaError> {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if points.len() == 1 || first != last {
                points.push(first);
            }
        }
        Self::new(points)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn origin(&self) -> &GeoPoint {
        &self.points[0]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Same boundary traversed the other way round.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        GeoRing { points }
    }

    pub fn bbox(&self) -> GeoBoundingBox {
        GeoBoundingBox::spanning(self.points[0], &self.points)
    }

    pub fn info(&self) {
        log::info!("ring: len: {}", self.len());
        log::info!("ring: distinct vertices: {}", distinct_vertices(&self.points));
        log::info!("ring: origin: {}", self.origin());
        log::info!("ring: bbox: {}", self.bbox());
    }
}

/// Number of distinct vertices, not counting the closing repeat.
pub fn distinct_vertices(points: &[GeoPoint]) -> usize {
    points.iter().collect::<BTreeSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn geo(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn triangle() -> Vec<GeoPoint> {
        vec![geo(0.0, 0.0), geo(0.0, 0.01), geo(0.01, 0.0)]
    }

    #[test]
    fn test_close_appends_first_point() {
        let ring = GeoRing::close(triangle()).unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.points()[0], ring.points()[3]);
    }

    #[test]
    fn test_close_keeps_closed_ring() {
        let mut points = triangle();
        points.push(points[0]);
        let ring = GeoRing::close(points).unwrap();
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn test_new_rejects_open_ring() {
        assert_matches!(GeoRing::new(triangle()), Err(AreaError::OpenRing));
    }

    #[test]
    fn test_too_few_points() {
        assert_matches!(
            GeoRing::close(vec![geo(0.0, 0.0), geo(1.0, 1.0)]),
            Err(AreaError::InputTooSmall {
                points: 3,
                distinct: 2
            })
        );
        assert_matches!(GeoRing::close(vec![]), Err(AreaError::InputTooSmall { .. }));
        assert_matches!(
            GeoRing::close(vec![geo(0.0, 0.0)]),
            Err(AreaError::InputTooSmall { .. })
        );
    }

    #[test]
    fn test_duplicates_do_not_count() {
        let points = vec![geo(0.0, 0.0), geo(1.0, 1.0), geo(1.0, 1.0), geo(0.0, 0.0)];
        assert_matches!(
            GeoRing::new(points),
            Err(AreaError::InputTooSmall {
                points: 4,
                distinct: 2
            })
        );
    }

    #[test]
    fn test_reversed() {
        let ring = GeoRing::close(triangle()).unwrap();
        let reversed = ring.reversed();
        assert_eq!(reversed.points()[1], ring.points()[2]);
        assert_eq!(reversed.reversed(), ring);
    }

    #[test]
    fn test_bbox() {
        let ring = GeoRing::close(triangle()).unwrap();
        let b = ring.bbox();
        assert_eq!(b.min, geo(0.0, 0.0));
        assert_eq!(b.max, geo(0.01, 0.01));
    }
}
