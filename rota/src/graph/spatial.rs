use crate::graph::GraphBase;
use crate::spatial::Position;

/// Defines how to obtain the position of a graph node
///
/// Positions are only used to estimate the remaining distance during a search, never to measure a route.
pub trait Located: GraphBase {
  fn location(&self, node: Self::NodeId) -> Option<Position>;
}

impl<'a, G: Located> Located for &'a G {
  fn location(&self, node: Self::NodeId) -> Option<Position> {
    (*self).location(node)
  }
}

impl<G: Located, T> Located for (G, T) {
  fn location(&self, node: Self::NodeId) -> Option<Position> {
    self.0.location(node)
  }
}
