use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Iterator;

// ====== Basic traits =====

/// Requirements for a node identifier
pub trait Identifier: Eq + Hash + Copy + Debug {}
impl<T> Identifier for T where T: Eq + Hash + Copy + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;

  /// Returns `true` if `node` is a node of the graph. Searches use it to reject unknown endpoints before
  /// touching the adjacency structure.
  fn contains_node(&self, node: Self::NodeId) -> bool;
}

// ====== Neighbors access =====

/// Trait for defining graph connectivity
///
/// `neighbors()` for node `u` must return every pair `(v, e)` such that the edge `e` can be traveled from
/// `u` to `v`. Road networks are undirected, so an edge shows up in the neighbors of both of its ends.
///
/// The edge is handed out by value, which is why it has to be cheap to copy. Graphs stored in memory
/// implement the trait on a reference and use a reference to their edge record as `Edge`.
pub trait IntoNeighbors: GraphBase {
  type Edge: Copy;
  type Neighbors: Iterator<Item = (Self::NodeId, Self::Edge)>;
  fn neighbors(self, node: Self::NodeId) -> Self::Neighbors;
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;

  fn contains_node(&self, node: Self::NodeId) -> bool {
    (*self).contains_node(node)
  }
}

impl<G: GraphBase, T> GraphBase for (G, T) {
  type NodeId = G::NodeId;

  fn contains_node(&self, node: Self::NodeId) -> bool {
    self.0.contains_node(node)
  }
}

impl<G: IntoNeighbors, T> IntoNeighbors for (G, T) {
  type Edge = G::Edge;
  type Neighbors = G::Neighbors;

  fn neighbors(self, node_id: G::NodeId) -> Self::Neighbors {
    self.0.neighbors(node_id)
  }
}
