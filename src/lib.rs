pub mod area;
pub mod error;
pub mod haversine;
pub mod input;
pub mod planar;
pub mod point;
pub mod read_polygon;
pub mod reference;
pub mod ring;
pub mod svg;
pub mod utm;
pub mod write_geojson;

pub use area::{AreaReport, AreaResult, Method, estimate};
pub use error::AreaError;
pub use planar::PlanarPolicy;
pub use point::{GeoPoint, PlanarPoint};
pub use ring::GeoRing;
