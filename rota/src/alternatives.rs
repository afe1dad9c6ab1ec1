//! Alternative paths, found by closing the roads of the shortest path one at a time.

use crate::error::RoutingError;
use crate::network::{Idx, RoadNetwork};
use crate::route::Route;
use crate::shortest::{path_avoiding, shortest_path};
use log::debug;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlternativePath {
  pub path: Vec<Idx>,
  /// Length in kilometres.
  pub cost: f64,
}

impl From<Route> for AlternativePath {
  fn from(route: Route) -> Self {
    AlternativePath {
      path: route.path,
      cost: route.cost,
    }
  }
}

/// Up to `k` distinct paths from `start` to `goal`, cheapest first.
///
/// The shortest path always comes first. Every other candidate is the shortest path once a single road of
/// the shortest path is closed. Fewer than `k` paths are returned when there aren't enough distinct
/// candidates, none at all when the goal can't be reached. The network is left exactly as it was.
pub fn alternative_paths(
  network: &mut RoadNetwork,
  start: Idx,
  goal: Idx,
  k: usize,
) -> Result<Vec<AlternativePath>, RoutingError> {
  let primary = shortest_path(network, start, goal)?;
  if !primary.is_found() || k == 0 {
    return Ok(Vec::new());
  }

  let mut paths = vec![AlternativePath::from(primary)];
  let primary_path = paths[0].path.clone();
  for pair in primary_path.windows(2) {
    let candidate = path_avoiding(network, start, goal, &[(pair[0], pair[1])])?;
    if candidate.is_found() && paths.iter().all(|kept| kept.path != candidate.path) {
      paths.push(candidate.into());
    }
  }

  // Stable, so the primary stays ahead of candidates of equal cost
  paths.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(std::cmp::Ordering::Equal));
  debug!(
    "{} distinct paths {} -> {}, keeping {}",
    paths.len(),
    start,
    goal,
    k.min(paths.len())
  );
  paths.truncate(k);
  Ok(paths)
}
