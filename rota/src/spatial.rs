//! Geographic types.
//!
//! Coordinates are never used to measure a route. They only serve to snap external locations onto the
//! network and to give the heuristic search its estimate.

use geo::{Distance, Euclidean, Point};

/// A WGS84 position, `x` is the longitude and `y` the latitude.
pub type Position = Point<f64>;

/// Scale turning a distance in degrees into kilometres.
pub const KM_PER_DEGREE: f64 = 111.0;

pub fn position(lat: f64, lon: f64) -> Position {
  Point::new(lon, lat)
}

/// Squared distance in coordinate space. Good enough for ranking candidates close to each other.
pub fn squared_distance(from: &Position, to: &Position) -> f64 {
  let dx = from.x() - to.x();
  let dy = from.y() - to.y();
  dx * dx + dy * dy
}

/// Straight-line distance in kilometres on the flat degree grid.
pub fn straight_line_km(from: &Position, to: &Position) -> f64 {
  Euclidean.distance(*from, *to) * KM_PER_DEGREE
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_relative_eq;

  #[test]
  fn test_straight_line_km() {
    let from = position(0.0, 0.0);
    let to = position(3.0, 4.0);

    assert_relative_eq!(straight_line_km(&from, &to), 5.0 * KM_PER_DEGREE, epsilon = 1e-9);
    assert_relative_eq!(straight_line_km(&to, &from), straight_line_km(&from, &to));
    assert_eq!(straight_line_km(&to, &to), 0.0);
  }

  #[test]
  fn test_squared_distance() {
    let from = position(-6.1626, 39.1924);
    let to = position(-6.1629, 39.1920);

    let expected = 0.0003f64.powi(2) + 0.0004f64.powi(2);
    assert_relative_eq!(squared_distance(&from, &to), expected, epsilon = 1e-12);
  }
}
