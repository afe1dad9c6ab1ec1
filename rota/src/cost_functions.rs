//! Edge cost functions. Pairing one of them with a network gives a weighted graph to search.

use crate::network::Road;
use crate::vehicle::{QualityBucket, VehicleClass};

pub fn distance_cost(road: &Road) -> f64 {
  road.length
}

/// Length scaled by congestion and by how badly the vehicle copes with the surface. Never less than the
/// length since every multiplier is at least `1.0`.
pub fn context_cost(road: &Road, vehicle: VehicleClass) -> f64 {
  road.length * road.meta.traffic_factor * vehicle.penalty(QualityBucket::of(road.meta.quality))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::network::RoadMeta;
  use approx::assert_relative_eq;

  fn road(traffic_factor: f64, quality: f64) -> Road {
    Road {
      to: 1,
      length: 2.0,
      meta: RoadMeta::default().with_traffic(traffic_factor).with_quality(quality),
    }
  }

  #[test]
  fn test_neutral_road_costs_its_length() {
    for vehicle in VehicleClass::ALL.iter() {
      assert_eq!(context_cost(&road(1.0, 1.0), *vehicle), distance_cost(&road(1.0, 1.0)));
    }
  }

  #[test]
  fn test_context_cost() {
    assert_relative_eq!(context_cost(&road(2.0, 1.0), VehicleClass::Motorcycle), 4.0, epsilon = 1e-9);
    assert_relative_eq!(context_cost(&road(1.0, 0.8), VehicleClass::Motorcycle), 2.2, epsilon = 1e-9);
    assert_relative_eq!(context_cost(&road(1.5, 0.5), VehicleClass::ThreeWheeler), 5.4, epsilon = 1e-9);
  }
}
