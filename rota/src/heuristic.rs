//! Heuristic search: A* guided by the straight-line distance to the goal.

use crate::cost_functions::distance_cost;
use crate::error::RoutingError;
use crate::graph::Located;
use crate::network::{Idx, RoadNetwork};
use crate::route::{route, Extras, HeuristicFit, Route};
use crate::spatial::straight_line_km;
use log::debug;

/// Straight-line distance from a node to `goal` in kilometres.
///
/// Roads are never shorter than the straight line between their ends, so the estimate never overstates
/// the remaining road distance. Nodes without a position estimate zero.
pub fn straight_line_estimate<G>(graph: G, goal: Idx) -> impl Fn(Idx) -> f64
where
  G: Located<NodeId = Idx>,
{
  let target = graph.location(goal);
  move |node| match (graph.location(node), target) {
    (Some(from), Some(to)) => straight_line_km(&from, &to),
    _ => 0.0,
  }
}

/// Same cost as [`shortest_path`](crate::shortest::shortest_path), usually with fewer nodes visited.
pub fn heuristic_path(network: &RoadNetwork, start: Idx, goal: Idx) -> Result<Route, RoutingError> {
  let estimate = straight_line_estimate(network, goal);
  let estimate_at_start = estimate(start);
  let mut result = route((network, distance_cost), start, goal, estimate)?;

  if result.is_found() {
    let tightness = if result.cost > 0.0 {
      estimate_at_start / result.cost
    } else {
      1.0
    };
    result.stats.extras = Extras::Heuristic(HeuristicFit {
      estimate_at_start,
      tightness,
    });
    debug!(
      "Heuristic path {} -> {}: {:.3} km, {} nodes visited, tightness {:.2}",
      start, goal, result.cost, result.stats.nodes_visited, tightness
    );
  } else {
    debug!("No heuristic path {} -> {}", start, goal);
  }
  Ok(result)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::shortest::shortest_path;
  use crate::test_utils::*;
  use approx::assert_relative_eq;

  #[test]
  fn test_diamond() {
    let network = diamond();

    let route = heuristic_path(&network, A, D).unwrap();
    assert_eq!(route.path, vec![A, B, D]);
    assert_eq!(route.cost, 2.0);

    let tightness = route.tightness().unwrap();
    assert!(tightness > 0.0 && tightness <= 1.0);
  }

  #[test]
  fn test_same_cost_as_baseline() {
    let network = grid(5, 6, 0.7);

    for start in 0..network.number_of_nodes() as Idx {
      for goal in 0..network.number_of_nodes() as Idx {
        let heuristic = heuristic_path(&network, start, goal).unwrap();
        let baseline = shortest_path(&network, start, goal).unwrap();

        assert_relative_eq!(heuristic.cost, baseline.cost, epsilon = 1e-9);
        assert!(heuristic.stats.nodes_visited <= baseline.stats.nodes_visited);
      }
    }
  }

  #[test]
  fn test_explores_less_across_the_grid() {
    let network = grid(6, 6, 1.0);

    let heuristic = heuristic_path(&network, 0, 5).unwrap();
    let baseline = shortest_path(&network, 0, 5).unwrap();
    assert!(heuristic.stats.nodes_visited < baseline.stats.nodes_visited);
  }

  #[test]
  fn test_estimate() {
    let network = diamond();
    let estimate = straight_line_estimate(&network, D);

    assert_eq!(estimate(D), 0.0);
    assert_relative_eq!(estimate(A), 0.015 * 111.0, epsilon = 1e-9);
    assert_eq!(estimate(42), 0.0);
    assert!(estimate(B) < network.road_distance(B, D).unwrap());
  }

  #[test]
  fn test_unreachable_and_trivial() {
    let network = disconnected();

    let unreachable = heuristic_path(&network, A, E).unwrap();
    assert!(!unreachable.is_found());
    assert_eq!(unreachable.tightness(), None);

    let trivial = heuristic_path(&network, C, C).unwrap();
    assert_eq!(trivial.path, vec![C]);
    assert_eq!(trivial.tightness(), Some(1.0));
  }
}
