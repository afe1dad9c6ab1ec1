use rota::alternatives::AlternativePath;
use rota::policy::{Journey, SegmentComparison, Strategy};
use rota::route::{Extras, Route};
use rota::spatial::{position, straight_line_km, Position};
use rota::{Idx, RoadNetwork, VehicleClass};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// `[lon, lat]`
type Location = [f64; 2];

fn location(p: &Position) -> Location {
  [p.x(), p.y()]
}

/// Polyline with a precision of 5 decimals, `None` for an empty path.
fn encode_path(network: &RoadNetwork, path: &[Idx]) -> Option<String> {
  if path.is_empty() {
    return None;
  }
  let coordinates: Vec<_> = path
    .iter()
    .filter_map(|id| network.position(*id).ok())
    .map(|p| p.0)
    .collect();
  polyline::encode_coordinates(coordinates, 5).ok()
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct RequestError(String);

impl RequestError {
  pub fn with(s: &str) -> Self {
    RequestError(String::from(s))
  }
}

/// A requested location, written `lon,lat`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate(pub Position);

impl FromStr for Coordinate {
  type Err = RequestError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let coords: Vec<_> = s.split(',').map(|c| c.trim().parse::<f64>()).collect();
    if coords.len() != 2 {
      return Err(RequestError::with("Each waypoint must have two coordinates"));
    }
    match (&coords[0], &coords[1]) {
      (Ok(lon), Ok(lat)) if lon.is_finite() && lat.is_finite() => Ok(Coordinate(position(*lat, *lon))),
      _ => Err(RequestError(format!("Error in the coordinates of {}", s))),
    }
  }
}

/// Journey waypoints: origin, waypoint and destination separated by `;`.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoints(pub [Coordinate; 3]);

impl FromStr for Waypoints {
  type Err = RequestError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let result = s
      .split(';')
      .map(Coordinate::from_str)
      .collect::<Result<Vec<_>, _>>()?;
    if result.len() != 3 {
      return Err(RequestError(format!(
        "Expect exactly 3 waypoints, {} found",
        result.len()
      )));
    }
    Ok(Waypoints([result[0], result[1], result[2]]))
  }
}

impl fmt::Display for Waypoints {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let coordinates: Vec<String> = self
      .0
      .iter()
      .map(|c| format!("{},{}", c.0.x(), c.0.y()))
      .collect();
    f.write_str(&coordinates.join(";"))
  }
}

#[derive(Serialize)]
pub struct ErrorResponse {
  pub code: u16,
  pub message: String,
}

#[derive(Serialize)]
struct NodeView {
  id: Idx,
  name: String,
  location: Location,
}

#[derive(Serialize)]
struct RoadView {
  from: Idx,
  to: Idx,
  name: String,
  distance: f64,
  traffic_factor: f64,
  quality: f64,
}

#[derive(Serialize)]
pub struct NetworkResponse {
  node_count: usize,
  road_count: usize,
  consistent: bool,
  nodes: Vec<NodeView>,
  roads: Vec<RoadView>,
}

impl NetworkResponse {
  pub fn new(network: &RoadNetwork) -> Self {
    NetworkResponse {
      node_count: network.number_of_nodes(),
      road_count: network.number_of_edges(),
      consistent: network.integrity_violations().is_empty(),
      nodes: network
        .nodes()
        .map(|node| NodeView {
          id: node.id,
          name: node.name.clone(),
          location: location(&node.position),
        })
        .collect(),
      roads: network
        .roads()
        .map(|(from, road)| RoadView {
          from,
          to: road.to,
          name: road.meta.name.clone(),
          distance: road.length,
          traffic_factor: road.meta.traffic_factor,
          quality: road.meta.quality,
        })
        .collect(),
    }
  }
}

/// A location snapped onto the network.
#[derive(Serialize)]
pub struct SnappedWaypoint {
  node: Idx,
  name: String,
  location: Location,
  requested: Location,
  /// Straight-line distance between the requested location and the node.
  distance: f64,
}

impl SnappedWaypoint {
  pub fn new(network: &RoadNetwork, node: Idx, requested: &Position) -> Option<Self> {
    let snapped = network.node(node).ok()?;
    Some(SnappedWaypoint {
      node,
      name: snapped.name.clone(),
      location: location(&snapped.position),
      requested: location(requested),
      distance: straight_line_km(&snapped.position, requested),
    })
  }
}

#[derive(Serialize)]
pub struct DistanceResponse {
  pub from: Idx,
  pub to: Idx,
  /// `null` when there is no path.
  pub distance: f64,
}

#[derive(Serialize)]
pub struct RouteResponse {
  path: Vec<Idx>,
  cost: f64,
  distance: f64,
  nodes_visited: usize,
  edges_examined: usize,
  extras: Extras,
  geometry: Option<String>,
  /// Every examined edge as a pair of locations.
  explored: Vec<[Location; 2]>,
}

impl RouteResponse {
  pub fn new(network: &RoadNetwork, route: &Route) -> Self {
    let explored = route
      .stats
      .explored_edges
      .iter()
      .filter_map(|(from, to)| {
        let from = network.position(*from).ok()?;
        let to = network.position(*to).ok()?;
        Some([location(&from), location(&to)])
      })
      .collect();

    RouteResponse {
      path: route.path.clone(),
      cost: route.cost,
      distance: route.distance(),
      nodes_visited: route.stats.nodes_visited,
      edges_examined: route.stats.edges_examined,
      extras: route.stats.extras,
      geometry: encode_path(network, &route.path),
      explored,
    }
  }
}

#[derive(Serialize)]
pub struct AlternativeView {
  path: Vec<Idx>,
  cost: f64,
  geometry: Option<String>,
}

impl AlternativeView {
  pub fn new(network: &RoadNetwork, alternative: &AlternativePath) -> Self {
    AlternativeView {
      path: alternative.path.clone(),
      cost: alternative.cost,
      geometry: encode_path(network, &alternative.path),
    }
  }
}

#[derive(Serialize)]
pub struct AlternativesResponse {
  pub from: Idx,
  pub to: Idx,
  pub paths: Vec<AlternativeView>,
}

#[derive(Serialize)]
pub struct ClosureResponse {
  pub from: Idx,
  pub to: Idx,
  /// Length of the closed road, `None` if the nodes aren't directly connected.
  pub road: Option<f64>,
  pub before: f64,
  pub after: f64,
  pub detour: Vec<Idx>,
}

#[derive(Serialize)]
struct StrategyRow {
  strategy: Strategy,
  name: &'static str,
  description: &'static str,
  distance: f64,
  cost: f64,
  nodes_visited: usize,
  edges_examined: usize,
}

#[derive(Serialize)]
struct SegmentResponse {
  label: &'static str,
  start: Idx,
  goal: Idx,
  selected: Strategy,
  route: RouteResponse,
  comparison: Vec<StrategyRow>,
  baseline_penalty_ratio: Option<f64>,
  alternatives: Vec<AlternativeView>,
}

impl SegmentResponse {
  fn new(network: &RoadNetwork, label: &'static str, segment: &SegmentComparison) -> Self {
    let comparison = Strategy::ALL
      .iter()
      .map(|strategy| {
        let route = segment.route(*strategy);
        StrategyRow {
          strategy: *strategy,
          name: strategy.name(),
          description: strategy.description(),
          distance: route.distance(),
          cost: route.cost,
          nodes_visited: route.stats.nodes_visited,
          edges_examined: route.stats.edges_examined,
        }
      })
      .collect();

    SegmentResponse {
      label,
      start: segment.start,
      goal: segment.goal,
      selected: segment.selected,
      route: RouteResponse::new(network, segment.selected_route()),
      comparison,
      baseline_penalty_ratio: segment.baseline_penalty_ratio,
      alternatives: segment
        .alternatives
        .iter()
        .map(|alternative| AlternativeView::new(network, alternative))
        .collect(),
    }
  }
}

#[derive(Serialize)]
pub struct JourneyResponse {
  vehicle: VehicleClass,
  waypoints: Vec<SnappedWaypoint>,
  segments: Vec<SegmentResponse>,
  total_distance: f64,
  total_nodes: usize,
  explanation: String,
}

impl JourneyResponse {
  pub fn new(network: &RoadNetwork, journey: &Journey, waypoints: Vec<SnappedWaypoint>) -> Self {
    JourneyResponse {
      vehicle: journey.vehicle,
      waypoints,
      segments: journey
        .segments()
        .iter()
        .map(|(label, segment)| SegmentResponse::new(network, *label, *segment))
        .collect(),
      total_distance: journey.total_distance,
      total_nodes: journey.total_nodes,
      explanation: journey.to_string(),
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct JourneyQuery {
  #[serde(default)]
  pub vehicle: VehicleClass,
}
