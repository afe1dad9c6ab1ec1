//! Route selection: runs every strategy on a segment and picks one result.

use crate::alternatives::{alternative_paths, AlternativePath};
use crate::context::weighted_path;
use crate::cost_functions::context_cost;
use crate::error::RoutingError;
use crate::heuristic::heuristic_path;
use crate::network::{Idx, RoadNetwork};
use crate::route::Route;
use crate::shortest::shortest_path;
use crate::vehicle::VehicleClass;
use log::{debug, info};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
  Baseline,
  ContextWeighted,
  Heuristic,
}

impl Strategy {
  pub const ALL: [Strategy; 3] = [Strategy::Baseline, Strategy::ContextWeighted, Strategy::Heuristic];

  pub fn name(self) -> &'static str {
    match self {
      Strategy::Baseline => "Dijkstra",
      Strategy::ContextWeighted => "Context-weighted Dijkstra",
      Strategy::Heuristic => "A*",
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      Strategy::Baseline => "shortest path by distance only",
      Strategy::ContextWeighted => "traffic, road quality and vehicle aware",
      Strategy::Heuristic => "guided by the straight-line distance to the goal",
    }
  }
}

impl fmt::Display for Strategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Thresholds deciding which strategy wins a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionPolicy {
  /// Context-weighted result wins above this penalty ratio.
  pub penalty_threshold: f64,
  /// Heuristic and baseline costs closer than this are considered equal.
  pub distance_tolerance_km: f64,
  /// Number of alternative paths reported per segment, the shortest one included.
  pub alternatives: usize,
}

impl Default for SelectionPolicy {
  fn default() -> Self {
    SelectionPolicy {
      penalty_threshold: 1.10,
      distance_tolerance_km: 0.01,
      alternatives: 2,
    }
  }
}

impl SelectionPolicy {
  /// Picks a strategy, first match wins:
  ///  1. context-weighted when the penalties are material, either on its own path or on the shortest
  ///     path it went around (`baseline_penalty_ratio`)
  ///  2. heuristic when it found the baseline cost while visiting strictly fewer nodes
  ///  3. baseline
  pub fn select(
    &self,
    baseline: &Route,
    weighted: &Route,
    heuristic: &Route,
    baseline_penalty_ratio: Option<f64>,
  ) -> Strategy {
    let material = |ratio: Option<f64>| ratio.map_or(false, |ratio| ratio > self.penalty_threshold);
    if material(weighted.penalty_ratio()) || material(baseline_penalty_ratio) {
      return Strategy::ContextWeighted;
    }

    if (heuristic.cost - baseline.cost).abs() < self.distance_tolerance_km
      && heuristic.stats.nodes_visited < baseline.stats.nodes_visited
    {
      return Strategy::Heuristic;
    }

    Strategy::Baseline
  }

  /// Runs every strategy between `start` and `goal` and selects one of the results.
  pub fn compare_segment(
    &self,
    network: &mut RoadNetwork,
    start: Idx,
    goal: Idx,
    vehicle: VehicleClass,
  ) -> Result<SegmentComparison, RoutingError> {
    let baseline = shortest_path(network, start, goal)?;
    let weighted = weighted_path(network, start, goal, vehicle)?;
    let heuristic = heuristic_path(network, start, goal)?;

    let baseline_penalty_ratio = if baseline.is_found() && baseline.cost > 0.0 {
      Some(network.path_cost(&baseline.path, |road| context_cost(road, vehicle)) / baseline.cost)
    } else {
      None
    };

    let selected = self.select(&baseline, &weighted, &heuristic, baseline_penalty_ratio);
    let alternatives = alternative_paths(network, start, goal, self.alternatives)?;
    debug!(
      "Segment {} -> {}: visited {} / {} / {} nodes, selected {}",
      start,
      goal,
      baseline.stats.nodes_visited,
      weighted.stats.nodes_visited,
      heuristic.stats.nodes_visited,
      selected
    );

    Ok(SegmentComparison {
      start,
      goal,
      baseline,
      weighted,
      heuristic,
      baseline_penalty_ratio,
      selected,
      alternatives,
    })
  }

  /// Plans the two segments of a journey through `waypoint`.
  pub fn plan_journey(
    &self,
    network: &mut RoadNetwork,
    origin: Idx,
    waypoint: Idx,
    destination: Idx,
    vehicle: VehicleClass,
  ) -> Result<Journey, RoutingError> {
    let to_waypoint = self.compare_segment(network, origin, waypoint, vehicle)?;
    let to_destination = self.compare_segment(network, waypoint, destination, vehicle)?;

    let first = to_waypoint.selected_route();
    let second = to_destination.selected_route();
    let (total_distance, total_nodes) = if first.is_found() && second.is_found() {
      (
        first.distance() + second.distance(),
        first.path.len() + second.path.len() - 1,
      )
    } else {
      (f64::INFINITY, 0)
    };

    info!(
      "Journey {} -> {} -> {} for {}: {} then {}, {:.3} km over {} nodes",
      origin,
      waypoint,
      destination,
      vehicle,
      to_waypoint.selected,
      to_destination.selected,
      total_distance,
      total_nodes
    );

    Ok(Journey {
      vehicle,
      to_waypoint,
      to_destination,
      total_distance,
      total_nodes,
    })
  }
}

/// Results of every strategy on one segment and the one selected.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentComparison {
  pub start: Idx,
  pub goal: Idx,
  pub baseline: Route,
  pub weighted: Route,
  pub heuristic: Route,
  /// Context-weighted cost of the shortest path divided by its length.
  pub baseline_penalty_ratio: Option<f64>,
  pub selected: Strategy,
  pub alternatives: Vec<AlternativePath>,
}

impl SegmentComparison {
  pub fn route(&self, strategy: Strategy) -> &Route {
    match strategy {
      Strategy::Baseline => &self.baseline,
      Strategy::ContextWeighted => &self.weighted,
      Strategy::Heuristic => &self.heuristic,
    }
  }

  pub fn selected_route(&self) -> &Route {
    self.route(self.selected)
  }

  /// Best alternative path other than the selected one, with its length difference to the selected route.
  pub fn detour(&self) -> Option<(f64, f64)> {
    let selected = self.selected_route();
    self
      .alternatives
      .iter()
      .find(|alternative| alternative.path != selected.path)
      .map(|alternative| (alternative.cost, alternative.cost - selected.distance()))
  }
}

/// Two planned segments, origin to waypoint and waypoint to destination.
///
/// Totals are infinite distance and zero nodes when either segment can't be traveled. `Display` renders a
/// human readable explanation of the choices.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Journey {
  pub vehicle: VehicleClass,
  pub to_waypoint: SegmentComparison,
  pub to_destination: SegmentComparison,
  pub total_distance: f64,
  /// Nodes of both paths, the shared waypoint counted once.
  pub total_nodes: usize,
}

impl Journey {
  pub fn segments(&self) -> [(&'static str, &SegmentComparison); 2] {
    [
      ("origin to waypoint", &self.to_waypoint),
      ("waypoint to destination", &self.to_destination),
    ]
  }
}

impl fmt::Display for Journey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Journey for a {}", self.vehicle)?;
    for (label, segment) in self.segments().iter() {
      let route = segment.selected_route();
      writeln!(f)?;
      writeln!(f, "{} ({} -> {}):", label, segment.start, segment.goal)?;
      if !route.is_found() {
        writeln!(f, "  no path")?;
        continue;
      }
      let path: Vec<String> = route.path.iter().map(|id| id.to_string()).collect();
      writeln!(f, "  algorithm: {} ({})", segment.selected, segment.selected.description())?;
      writeln!(f, "  distance: {:.3} km", route.distance())?;
      writeln!(f, "  nodes: {}", route.path.len())?;
      writeln!(f, "  path: {}", path.join(" -> "))?;
      if let Some((cost, extra)) = segment.detour() {
        writeln!(f, "  alternative: {:.3} km ({:+.3} km)", cost, extra)?;
      }
    }
    writeln!(f)?;
    write!(f, "total: {:.3} km over {} nodes", self.total_distance, self.total_nodes)
  }
}
