use std::io::{BufRead, Write};

use crate::error::AreaError;
use crate::point::GeoPoint;
use crate::ring::{GeoRing, distinct_vertices};

fn parse_line(line: &str) -> Option<GeoPoint> {
    let mut fields = line.split_whitespace();
    let lat = fields.next()?.parse().ok()?;
    let lon = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    GeoPoint::new(lat, lon).ok()
}

/// Prompts for "latitude longitude" lines until `done` or end of input, then
/// appends the first point again, even when it was typed as the last one.
pub fn collect_coordinates<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
) -> Result<GeoRing, AreaError> {
    writeln!(
        output,
        "\nEnter GPS coordinates (latitude longitude). Type 'done' when finished."
    )?;
    let mut points = Vec::new();
    let mut lines = input.lines();
    loop {
        write!(output, "Enter latitude and longitude (or 'done' to finish): ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("done") {
            break;
        }
        match parse_line(line) {
            Some(p) => points.push(p),
            None => writeln!(output, "Invalid input! Enter two numbers separated by space.")?,
        }
    }
    log::trace!("collected {} points", points.len());
    if points.len() < 3 {
        return Err(AreaError::InputTooSmall {
            points: points.len(),
            distinct: distinct_vertices(&points),
        });
    }
    let first = points[0];
    points.push(first);
    GeoRing::new(points)
}
