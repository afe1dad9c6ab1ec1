use super::common::*;
use crate::error::{IntegrityViolation, RoutingError};
use crate::graph::*;
use crate::spatial::{position, squared_distance, Position};
use log::{debug, warn};

/// Undirected road network. Every road is stored twice, once in the adjacency list of each end, with the
/// same length and metadata.
///
/// Nodes are dense: the node with id `i` is stored at index `i`. Nodes are never removed, roads can be
/// removed with [`RoadNetwork::remove_edge`] or temporarily with [`RoadNetwork::close_roads`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadNetwork {
  pub(super) nodes: Vec<Node>,
  pub(super) adjacency: Vec<Vec<Road>>,
}

impl RoadNetwork {
  pub fn new() -> Self {
    Self {
      nodes: Vec::new(),
      adjacency: Vec::new(),
    }
  }

  pub fn add_node<S: Into<String>>(&mut self, name: S, lat: f64, lon: f64) -> Idx {
    let id = self.nodes.len() as Idx;
    self.nodes.push(Node {
      id,
      name: name.into(),
      position: position(lat, lon),
    });
    self.adjacency.push(Vec::new());
    id
  }

  /// Adds a road traversable in both directions.
  pub fn add_road(
    &mut self,
    from: Idx,
    to: Idx,
    length: f64,
    meta: RoadMeta,
  ) -> Result<&mut Self, RoutingError> {
    self.check(from)?;
    self.check(to)?;
    if from == to {
      return Err(RoutingError::SelfLoop(from));
    }
    if !(length.is_finite() && length > 0.0) {
      return Err(RoutingError::InvalidRoad { from, to, length });
    }
    if !meta.is_valid() {
      return Err(RoutingError::InvalidMeta {
        from,
        to,
        traffic_factor: meta.traffic_factor,
        quality: meta.quality,
      });
    }

    self.adjacency[from as usize].push(Road {
      to,
      length,
      meta: meta.clone(),
    });
    self.adjacency[to as usize].push(Road {
      to: from,
      length,
      meta,
    });
    Ok(self)
  }

  #[cfg(test)]
  pub(crate) fn insert_directed(&mut self, from: Idx, road: Road) {
    self.adjacency[from as usize].push(road);
  }

  pub fn number_of_nodes(&self) -> usize {
    self.nodes.len()
  }

  pub fn number_of_edges(&self) -> usize {
    self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
  }

  pub fn contains(&self, node: Idx) -> bool {
    (node as usize) < self.nodes.len()
  }

  pub fn node(&self, node: Idx) -> Result<&Node, RoutingError> {
    self.nodes.get(node as usize).ok_or(RoutingError::UnknownNode(node))
  }

  pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
    self.nodes.iter()
  }

  pub fn position(&self, node: Idx) -> Result<Position, RoutingError> {
    self.node(node).map(|n| n.position)
  }

  /// All roads leaving `node`, in insertion order.
  pub fn neighbors(&self, node: Idx) -> Result<&[Road], RoutingError> {
    self
      .adjacency
      .get(node as usize)
      .map(Vec::as_slice)
      .ok_or(RoutingError::UnknownNode(node))
  }

  /// Every road once, from its end with the lower id.
  pub fn roads(&self) -> impl Iterator<Item = (Idx, &Road)> + '_ {
    self.adjacency.iter().enumerate().flat_map(|(from, roads)| {
      let from = from as Idx;
      roads
        .iter()
        .filter(move |road| from < road.to)
        .map(move |road| (from, road))
    })
  }

  /// Finds the node closest to the given coordinates. Ties go to the lowest node id.
  ///
  /// Scans every node, which is fine for snapping a handful of external locations but must not be used
  /// inside a search loop.
  pub fn snap_to_nearest_node(&self, lat: f64, lon: f64) -> Option<Idx> {
    let target = position(lat, lon);
    let mut nearest: Option<(Idx, f64)> = None;
    for node in &self.nodes {
      let distance = squared_distance(&node.position, &target);
      match nearest {
        Some((_, best)) if distance >= best => {}
        _ => nearest = Some((node.id, distance)),
      }
    }

    if let Some((id, distance)) = nearest {
      debug!(
        "Snapped ({:.4}, {:.4}) to node {} ({}), d = {:.6}",
        lat,
        lon,
        id,
        self.nodes[id as usize].name,
        distance.sqrt()
      );
    }
    nearest.map(|(id, _)| id)
  }

  /// Removes the road between `from` and `to` in both directions. Removing a road which doesn't exist
  /// does nothing.
  ///
  /// The removal is permanent. Use [`RoadNetwork::close_roads`] for a closure which has to be undone.
  pub fn remove_edge(&mut self, from: Idx, to: Idx) -> Result<(), RoutingError> {
    self.check(from)?;
    self.check(to)?;
    let mut removed = Vec::new();
    self.detach(from, to, &mut removed);
    debug!("Removed road {} <-> {} ({} entries)", from, to, removed.len());
    Ok(())
  }

  /// The direct road between two nodes. The first one stored wins if there are parallel roads.
  pub fn road(&self, from: Idx, to: Idx) -> Option<&Road> {
    self.adjacency.get(from as usize)?.iter().find(|road| road.to == to)
  }

  /// Length of the direct road between two nodes, if there is one.
  pub fn road_distance(&self, from: Idx, to: Idx) -> Option<f64> {
    self.road(from, to).map(|road| road.length)
  }

  /// Physical length of a path, summing the direct road between every pair of consecutive nodes.
  pub fn path_length(&self, path: &[Idx]) -> f64 {
    self.path_cost(path, |road| road.length)
  }

  /// Cost of following a path under an edge cost function. Pairs without a direct road add nothing.
  pub fn path_cost<C: Fn(&Road) -> f64>(&self, path: &[Idx], cost: C) -> f64 {
    path
      .windows(2)
      .filter_map(|pair| self.road(pair[0], pair[1]))
      .map(cost)
      .sum()
  }

  /// Checks that every stored road has a mirrored entry with the same length and metadata. Connectivity
  /// is not checked.
  pub fn validate(&self) -> bool {
    let violations = self.integrity_violations();
    for violation in &violations {
      warn!("Road network integrity: {}", violation);
    }
    violations.is_empty()
  }

  pub fn integrity_violations(&self) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();
    for (from, road) in self.directed_roads() {
      let reverse = match self.adjacency.get(road.to as usize) {
        Some(reverse) => reverse,
        None => {
          violations.push(IntegrityViolation::DanglingEnd { from, to: road.to });
          continue;
        }
      };

      let mut candidates = reverse.iter().filter(|back| back.to == from).peekable();
      if candidates.peek().is_none() {
        violations.push(IntegrityViolation::MissingReverse { from, to: road.to });
      } else if !candidates.any(|back| back.length == road.length && back.meta == road.meta) {
        violations.push(IntegrityViolation::MismatchedReverse { from, to: road.to });
      }
    }
    violations
  }

  fn directed_roads(&self) -> impl Iterator<Item = (Idx, &Road)> + '_ {
    self
      .adjacency
      .iter()
      .enumerate()
      .flat_map(|(from, roads)| roads.iter().map(move |road| (from as Idx, road)))
  }

  fn check(&self, node: Idx) -> Result<(), RoutingError> {
    if self.contains(node) {
      Ok(())
    } else {
      Err(RoutingError::UnknownNode(node))
    }
  }

  /// Removes every entry between `from` and `to`, recording where each one was stored.
  pub(super) fn detach(&mut self, from: Idx, to: Idx, removed: &mut Vec<Detached>) {
    self.detach_directed(from, to, removed);
    self.detach_directed(to, from, removed);
  }

  // Entries are removed back to front, so replaying `removed` in reverse puts each one back at its index.
  fn detach_directed(&mut self, from: Idx, to: Idx, removed: &mut Vec<Detached>) {
    let roads = &mut self.adjacency[from as usize];
    let mut index = roads.len();
    while index > 0 {
      index -= 1;
      if roads[index].to == to {
        let road = roads.remove(index);
        removed.push(Detached {
          node: from,
          index,
          road,
        });
      }
    }
  }
}

/// A road entry taken out of an adjacency list.
#[derive(Debug)]
pub(super) struct Detached {
  pub node: Idx,
  pub index: usize,
  pub road: Road,
}

impl GraphBase for RoadNetwork {
  type NodeId = Idx;

  fn contains_node(&self, node: Idx) -> bool {
    self.contains(node)
  }
}

impl Located for RoadNetwork {
  fn location(&self, node: Idx) -> Option<Position> {
    self.nodes.get(node as usize).map(|node| node.position)
  }
}

/// Iterator over the roads leaving a node, as `(neighbor, road)` pairs.
pub struct RoadIter<'a> {
  roads: std::slice::Iter<'a, Road>,
}

impl<'a> Iterator for RoadIter<'a> {
  type Item = (Idx, &'a Road);

  fn next(&mut self) -> Option<Self::Item> {
    self.roads.next().map(|road| (road.to, road))
  }
}

impl<'a> IntoNeighbors for &'a RoadNetwork {
  type Edge = &'a Road;
  type Neighbors = RoadIter<'a>;

  fn neighbors(self, node_id: Idx) -> Self::Neighbors {
    let roads: &'a [Road] = self
      .adjacency
      .get(node_id as usize)
      .map(Vec::as_slice)
      .unwrap_or(&[]);
    RoadIter {
      roads: roads.iter(),
    }
  }
}
