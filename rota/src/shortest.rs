//! Baseline search: shortest path by physical distance.

use crate::cost_functions::distance_cost;
use crate::error::RoutingError;
use crate::network::{Idx, RoadNetwork};
use crate::route::{route, Route};
use log::debug;

/// Dijkstra over the base road lengths. The reference all the other strategies are compared to.
pub fn shortest_path(network: &RoadNetwork, start: Idx, goal: Idx) -> Result<Route, RoutingError> {
  let result = route((network, distance_cost), start, goal, |_| 0.0)?;
  if result.is_found() {
    debug!(
      "Shortest path {} -> {}: {:.3} km, {} nodes visited",
      start, goal, result.cost, result.stats.nodes_visited
    );
  } else {
    debug!("No path {} -> {}", start, goal);
  }
  Ok(result)
}

/// Length of the shortest path in kilometres, infinite if the goal can't be reached.
pub fn shortest_distance(network: &RoadNetwork, start: Idx, goal: Idx) -> Result<f64, RoutingError> {
  shortest_path(network, start, goal).map(|route| route.cost)
}

/// Shortest path with the given roads closed. The roads are back in place when the function returns.
pub fn path_avoiding(
  network: &mut RoadNetwork,
  start: Idx,
  goal: Idx,
  blocked: &[(Idx, Idx)],
) -> Result<Route, RoutingError> {
  let closed = network.close_roads(blocked)?;
  shortest_path(&closed, start, goal)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  #[test]
  fn test_diamond() {
    let network = diamond();

    let route = shortest_path(&network, A, D).unwrap();
    assert_eq!(route.path, vec![A, B, D]);
    assert_eq!(route.cost, 2.0);
    assert_eq!(shortest_distance(&network, D, A), Ok(2.0));
  }

  #[test]
  fn test_examined_edges_are_recorded() {
    let network = diamond();

    let route = shortest_path(&network, A, D).unwrap();
    assert_eq!(route.stats.edges_examined, route.stats.explored_edges.len());
    assert_eq!(route.stats.explored_edges, vec![(A, B), (A, C), (B, A), (B, D), (C, A), (C, D)]);
  }

  #[test]
  fn test_unreachable() {
    let network = disconnected();

    assert_eq!(shortest_distance(&network, A, E), Ok(f64::INFINITY));
    assert!(shortest_path(&network, E, A).unwrap().path.is_empty());
    assert_eq!(shortest_distance(&network, E, E), Ok(0.0));
    assert_eq!(shortest_distance(&network, A, 5), Err(RoutingError::UnknownNode(5)));
  }

  #[test]
  fn test_path_avoiding() {
    let mut network = diamond();
    let before = network.clone();

    let detour = path_avoiding(&mut network, A, D, &[(A, B)]).unwrap();
    assert_eq!(detour.path, vec![A, C, D]);
    assert_eq!(detour.cost, 3.0);
    assert_eq!(network, before);

    let cut_off = path_avoiding(&mut network, A, D, &[(B, D), (C, D)]).unwrap();
    assert!(!cut_off.is_found());
    assert_eq!(network, before);
  }

  #[test]
  fn test_removing_a_road_of_the_shortest_path() {
    let network = grid(4, 4, 1.0);

    for (start, goal) in [(0, 15), (3, 12), (5, 14), (1, 11)] {
      let shortest = shortest_path(&network, start, goal).unwrap();
      for pair in shortest.path.windows(2) {
        let mut reduced = network.clone();
        reduced.remove_edge(pair[0], pair[1]).unwrap();

        let detour = shortest_path(&reduced, start, goal).unwrap();
        assert_ne!(detour.path, shortest.path);
        assert!(detour.cost >= shortest.cost);
      }
    }
  }
}
