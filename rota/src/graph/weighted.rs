use crate::graph::IntoNeighbors;
use std::fmt::Debug;
use std::ops::Add;

/// Trait representing an edge weight(cost) in weighted graph
///
/// Road costs are floating point, so only a partial order is required. Weights are expected to be
/// finite and non-negative.
pub trait Weight<T = Self>: Default + Add<Output = T> + PartialOrd + Copy + Debug {}
impl<T> Weight for T where T: Default + Add<Output = T> + PartialOrd + Copy + Debug {}

/// Weighted graph
///
/// The weight is defined as a cost of traversing a single edge. The same graph can be searched under
/// several cost models by pairing it with different cost functions.
pub trait Weighted: IntoNeighbors {
  type Weight: Weight;
  fn edge_weight(&self, edge: Self::Edge) -> Self::Weight;
}

/// The tuple of a graph plus cost function can implement a weighted graph
impl<G: IntoNeighbors, W: Weight, C: Fn(G::Edge) -> W> Weighted for (G, C) {
  type Weight = W;

  fn edge_weight(&self, edge: G::Edge) -> Self::Weight {
    (self.1)(edge)
  }
}
