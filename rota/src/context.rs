//! Context-weighted search: traffic, road quality and vehicle class fold into the edge cost.

use crate::cost_functions::context_cost;
use crate::error::RoutingError;
use crate::network::{Idx, Road, RoadNetwork};
use crate::route::{route, CostBreakdown, Extras, Route};
use crate::vehicle::VehicleClass;
use log::debug;

/// Cheapest path for the vehicle under [`context_cost`].
///
/// The cost of the route is the weighted cost. The physical length of the realized path and the penalty
/// ratio between the two are reported in the [`CostBreakdown`].
pub fn weighted_path(
  network: &RoadNetwork,
  start: Idx,
  goal: Idx,
  vehicle: VehicleClass,
) -> Result<Route, RoutingError> {
  let cost = move |road: &Road| context_cost(road, vehicle);
  let mut result = route((network, cost), start, goal, |_| 0.0)?;

  if result.is_found() {
    let base_distance = network.path_length(&result.path);
    let penalty_ratio = if base_distance > 0.0 {
      result.cost / base_distance
    } else {
      1.0
    };
    result.stats.extras = Extras::CostBreakdown(CostBreakdown {
      base_distance,
      weighted_cost: result.cost,
      penalty_ratio,
    });
    debug!(
      "Weighted path {} -> {} for {}: {:.3} km, cost {:.3}, penalty ratio {:.2}",
      start, goal, vehicle, base_distance, result.cost, penalty_ratio
    );
  } else {
    debug!("No weighted path {} -> {} for {}", start, goal, vehicle);
  }
  Ok(result)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::network::RoadMeta;
  use crate::shortest::shortest_path;
  use crate::test_utils::*;
  use crate::vehicle::QualityBucket;
  use approx::assert_relative_eq;
  use rstest::rstest;

  #[rstest]
  fn test_neutral_roads_cost_their_length(
    #[values(VehicleClass::Motorcycle, VehicleClass::ThreeWheeler)] vehicle: VehicleClass,
  ) {
    let network = grid(4, 5, 0.8);

    for start in 0..network.number_of_nodes() as Idx {
      for goal in [0, 7, 19] {
        let weighted = weighted_path(&network, start, goal, vehicle).unwrap();
        let baseline = shortest_path(&network, start, goal).unwrap();

        assert_eq!(weighted.cost, baseline.cost);
        assert_eq!(weighted.path, baseline.path);
        assert_eq!(weighted.penalty_ratio(), Some(1.0));
      }
    }
  }

  #[test]
  fn test_traffic_detour() {
    let network = congested_diamond();

    let weighted = weighted_path(&network, A, D, VehicleClass::Motorcycle).unwrap();
    assert_eq!(weighted.path, vec![A, C, D]);
    assert_eq!(weighted.cost, 3.0);
    assert_eq!(weighted.distance(), 3.0);
    assert_eq!(weighted.penalty_ratio(), Some(1.0));

    assert_eq!(shortest_path(&network, A, D).unwrap().path, vec![A, B, D]);
  }

  #[test]
  fn test_cost_of_congested_path() {
    // Only the congested path is left
    let mut network = congested_diamond();
    network.remove_edge(A, C).unwrap();

    let weighted = weighted_path(&network, A, D, VehicleClass::Motorcycle).unwrap();
    assert_eq!(weighted.path, vec![A, B, D]);
    assert_eq!(weighted.cost, 4.0);
    assert_eq!(
      weighted.stats.extras,
      Extras::CostBreakdown(CostBreakdown {
        base_distance: 2.0,
        weighted_cost: 4.0,
        penalty_ratio: 2.0,
      })
    );
  }

  #[rstest]
  fn test_cost_grows_as_quality_worsens(
    #[values(VehicleClass::Motorcycle, VehicleClass::ThreeWheeler)] vehicle: VehicleClass,
  ) {
    let quality_of = |bucket: QualityBucket| match bucket {
      QualityBucket::High => 0.9,
      QualityBucket::Medium => 0.8,
      QualityBucket::Low => 0.5,
    };

    let costs: Vec<f64> = QualityBucket::ALL
      .iter()
      .map(|bucket| {
        let rough = RoadMeta::named("Creek Road").with_quality(quality_of(*bucket));
        let mut network = diamond_with(rough, RoadMeta::default());
        network.remove_edge(A, C).unwrap();
        weighted_path(&network, A, D, vehicle).unwrap().cost
      })
      .collect();

    assert_eq!(costs[0], 2.0);
    assert!(costs[0] <= costs[1]);
    assert!(costs[1] <= costs[2]);
    assert_relative_eq!(costs[2], 1.0 + vehicle.penalty(QualityBucket::Low), epsilon = 1e-9);
  }

  #[test]
  fn test_vehicles_pick_different_roads() {
    // A-B costs 1.5 * 1.3 for a motorcycle and 1.5 * 1.8 for a three-wheeler, B-D adds 1.0 against 3.0 around
    let rough = RoadMeta::named("Creek Road").with_traffic(1.5).with_quality(0.5);
    let network = diamond_with(rough, RoadMeta::default());

    let motorcycle = weighted_path(&network, A, D, VehicleClass::Motorcycle).unwrap();
    let three_wheeler = weighted_path(&network, A, D, VehicleClass::ThreeWheeler).unwrap();

    assert_eq!(motorcycle.path, vec![A, B, D]);
    assert_relative_eq!(motorcycle.cost, 2.95, epsilon = 1e-9);
    assert_eq!(three_wheeler.path, vec![A, C, D]);
    assert_relative_eq!(three_wheeler.cost, 3.0, epsilon = 1e-9);
  }

  #[test]
  fn test_unreachable_has_no_breakdown() {
    let network = disconnected();

    let weighted = weighted_path(&network, A, E, VehicleClass::ThreeWheeler).unwrap();
    assert!(!weighted.is_found());
    assert_eq!(weighted.cost, f64::INFINITY);
    assert_eq!(weighted.penalty_ratio(), None);
  }

  #[test]
  fn test_route_to_itself_has_no_penalty() {
    let network = diamond();

    let weighted = weighted_path(&network, B, B, VehicleClass::Motorcycle).unwrap();
    assert_eq!(weighted.path, vec![B]);
    assert_eq!(weighted.penalty_ratio(), Some(1.0));
  }
}
