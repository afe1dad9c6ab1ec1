//! Route finding result and the search loop shared by all strategies.

use crate::error::RoutingError;
use crate::graph::*;
use crate::network::Idx;
use crate::search_space::*;
use serde::Serialize;

/// Breakdown of a context-weighted cost.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CostBreakdown {
  /// Physical length of the realized path in kilometres.
  pub base_distance: f64,
  pub weighted_cost: f64,
  /// `weighted_cost / base_distance`, `1.0` when no penalty applied.
  pub penalty_ratio: f64,
}

/// How close the straight-line estimate at the start came to the realized cost.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeuristicFit {
  pub estimate_at_start: f64,
  pub tightness: f64,
}

/// Strategy specific statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Extras {
  None,
  CostBreakdown(CostBreakdown),
  Heuristic(HeuristicFit),
}

impl Default for Extras {
  fn default() -> Self {
    Extras::None
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SearchStats {
  pub nodes_visited: usize,
  pub edges_examined: usize,
  /// Every `(from, to)` pair examined, in order.
  pub explored_edges: Vec<(Idx, Idx)>,
  pub extras: Extras,
}

impl From<Exploration<Idx>> for SearchStats {
  fn from(exploration: Exploration<Idx>) -> Self {
    SearchStats {
      nodes_visited: exploration.nodes_visited,
      edges_examined: exploration.edges_examined,
      explored_edges: exploration.explored_edges,
      extras: Extras::None,
    }
  }
}

/// Result of a single search.
///
/// A goal which can't be reached gives an empty path and an infinite cost, which serializes as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
  pub path: Vec<Idx>,
  pub cost: f64,
  pub stats: SearchStats,
}

impl Route {
  pub fn is_found(&self) -> bool {
    !self.path.is_empty()
  }

  /// Physical length of the route. For a context-weighted route this is the length of the realized path
  /// rather than its weighted cost.
  pub fn distance(&self) -> f64 {
    match self.stats.extras {
      Extras::CostBreakdown(breakdown) => breakdown.base_distance,
      _ => self.cost,
    }
  }

  pub fn penalty_ratio(&self) -> Option<f64> {
    match self.stats.extras {
      Extras::CostBreakdown(breakdown) => Some(breakdown.penalty_ratio),
      _ => None,
    }
  }

  pub fn tightness(&self) -> Option<f64> {
    match self.stats.extras {
      Extras::Heuristic(fit) => Some(fit.tightness),
      _ => None,
    }
  }
}

/// Searches the cheapest route from `start` to `goal`.
///
/// The frontier is ordered by the cost so far plus `estimate`. With an estimate of zero this is Dijkstra,
/// with an admissible and consistent estimate it is A* and finds the same cost. The search stops as soon
/// as the goal is settled.
pub fn route<G, H>(graph: G, start: Idx, goal: Idx, estimate: H) -> Result<Route, RoutingError>
where
  G: Copy + Weighted<NodeId = Idx, Weight = f64>,
  H: Fn(Idx) -> f64,
{
  for node in [start, goal] {
    if !graph.contains_node(node) {
      return Err(RoutingError::UnknownNode(node));
    }
  }

  let mut search_space: SearchSpace<f64, Idx> = SearchSpace::new();
  search_space.init_with_key(start, estimate(start));

  while let Some((id, cost)) = search_space.pop() {
    if id == goal {
      // Need to reverse the list to get elements in the routing order
      let path = search_space.unwind(id).iter().rev().cloned().collect();
      return Ok(Route {
        path,
        cost,
        stats: search_space.into_exploration().into(),
      });
    }
    search_space.relax(graph, id, cost, &estimate);
  }

  Ok(Route {
    path: Vec::new(),
    cost: f64::INFINITY,
    stats: search_space.into_exploration().into(),
  })
}
