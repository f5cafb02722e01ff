use crate::error::AreaError;
use crate::point::{GeoPoint, PlanarPoint};

/// UTM zone (1..=60) of the mean longitude of `points`.
pub fn zone_for(points: &[GeoPoint]) -> Result<u8, AreaError> {
    if points.is_empty() {
        return Err(AreaError::ProjectionFailure(
            "no points to select a zone from".to_string(),
        ));
    }
    let mean_lon = points.iter().map(|p| p.lon()).sum::<f64>() / points.len() as f64;
    zone_for_lon(mean_lon)
}

/// 6-degree zones counted eastwards from 180°W; 180°E itself belongs to zone 60.
pub fn zone_for_lon(lon: f64) -> Result<u8, AreaError> {
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(AreaError::ProjectionFailure(format!(
            "longitude {lon} has no utm zone"
        )));
    }
    let zone = ((lon + 180.0) / 6.0).floor() as u8 + 1;
    Ok(zone.min(60))
}

pub struct UtmProjection {
    zone: u8,
    wgs84_spec: proj4rs::proj::Proj,
    dst_spec: proj4rs::proj::Proj,
}

impl UtmProjection {
    pub fn make(zone: u8) -> Result<UtmProjection, AreaError> {
        use proj4rs::proj::Proj;
        if !(1..=60).contains(&zone) {
            return Err(AreaError::ProjectionFailure(format!(
                "invalid utm zone {zone}"
            )));
        }
        let spec = format!("+proj=utm +zone={zone} +ellps=WGS84 +units=m +no_defs");
        let dst_spec = Proj::from_proj_string(spec.as_str())
            .map_err(|e| AreaError::ProjectionFailure(format!("{spec}: {e:?}")))?;

        let spec = "+proj=longlat +ellps=WGS84 +datum=WGS84 +no_defs";
        let wgs84_spec = Proj::from_proj_string(spec)
            .map_err(|e| AreaError::ProjectionFailure(format!("{spec}: {e:?}")))?;
        Ok(UtmProjection {
            zone,
            wgs84_spec,
            dst_spec,
        })
    }

    /// Projection for the zone of the mean longitude of `points`.
    pub fn for_points(points: &[GeoPoint]) -> Result<UtmProjection, AreaError> {
        let zone = zone_for(points)?;
        log::trace!("utm zone: {}", zone);
        Self::make(zone)
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    /// Easting and northing in meters.
    pub fn project(&self, geo: &GeoPoint) -> Result<PlanarPoint, AreaError> {
        let mut p = (geo.lon().to_radians(), geo.lat().to_radians());
        proj4rs::transform::transform(&self.wgs84_spec, &self.dst_spec, &mut p)
            .map_err(|e| AreaError::ProjectionFailure(format!("{geo}: {e:?}")))?;
        if !p.0.is_finite() || !p.1.is_finite() {
            return Err(AreaError::ProjectionFailure(format!(
                "{geo} projects to a non-finite point"
            )));
        }
        Ok(PlanarPoint { x: p.0, y: p.1 })
    }

    pub fn project_all(&self, points: &[GeoPoint]) -> Result<Vec<PlanarPoint>, AreaError> {
        points.iter().map(|p| self.project(p)).collect()
    }
}
