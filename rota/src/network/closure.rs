use super::common::Idx;
use super::road_network::{Detached, RoadNetwork};
use crate::error::RoutingError;
use log::debug;
use std::ops::Deref;

/// Roads temporarily removed from a network.
///
/// The closure borrows the network mutably and gives read access to the reduced network through
/// `Deref`. Dropping it puts every removed entry back at its original position in the adjacency lists,
/// leaving the network equal to what it was before the closure. This also happens when the closure is
/// dropped while unwinding.
pub struct RoadClosure<'a> {
  network: &'a mut RoadNetwork,
  detached: Vec<Detached>,
}

impl RoadNetwork {
  /// Closes the roads between each pair of nodes until the returned guard is dropped.
  ///
  /// Pairs without a road are ignored. Fails without closing anything if a pair references an unknown
  /// node.
  pub fn close_roads(&mut self, roads: &[(Idx, Idx)]) -> Result<RoadClosure<'_>, RoutingError> {
    if let Some(&unknown) = roads
      .iter()
      .flat_map(|(from, to)| [from, to])
      .find(|node| !self.contains(**node))
    {
      return Err(RoutingError::UnknownNode(unknown));
    }

    let mut detached = Vec::new();
    for &(from, to) in roads {
      self.detach(from, to, &mut detached);
    }
    debug!("Closed {} roads ({} entries)", roads.len(), detached.len());

    Ok(RoadClosure {
      network: self,
      detached,
    })
  }
}

impl RoadClosure<'_> {
  /// Number of adjacency entries removed by the closure, two for every closed road.
  pub fn closed_entries(&self) -> usize {
    self.detached.len()
  }
}

impl Deref for RoadClosure<'_> {
  type Target = RoadNetwork;

  fn deref(&self) -> &RoadNetwork {
    self.network
  }
}

impl Drop for RoadClosure<'_> {
  fn drop(&mut self) {
    for entry in self.detached.drain(..).rev() {
      self.network.adjacency[entry.node as usize].insert(entry.index, entry.road);
    }
  }
}
