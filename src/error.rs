use thiserror::Error;

/// Errors raised while building a ring or computing its area.
#[derive(Debug, Error)]
pub enum AreaError {
    /// Latitude or longitude outside the valid range, or not finite.
    #[error("invalid coordinate (lat: {lat}, lon: {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },
    /// The first and the last point of the ring differ.
    #[error("ring is not closed")]
    OpenRing,
    /// Fewer than 3 distinct vertices.
    #[error("a shape must have at least 3 points (got {points} points, {distinct} distinct)")]
    InputTooSmall { points: usize, distinct: usize },
    /// Zone selection or the UTM transform failed.
    #[error("projection failed: {0}")]
    ProjectionFailure(String),
    /// Unreadable shape file content.
    #[error("parse error: {0}")]
    Parse(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
