use crate::graph::*;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

#[derive(Copy, Clone)]
struct State<W: Weight, N: Identifier> {
  key: W,
  id: N,
}

impl<W: Weight, N: Identifier> Ord for State<W, N> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc
    other.key.partial_cmp(&self.key).unwrap_or(Ordering::Equal)
  }
}

// `PartialOrd` needs to be implemented as well.
impl<W: Weight, N: Identifier> PartialOrd for State<W, N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<W: Weight, N: Identifier> PartialEq for State<W, N> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl<W: Weight, N: Identifier> Eq for State<W, N> {}

struct Label<W: Weight, N: Identifier> {
  cost: W,
  parent: N,
}

/// What a search looked at, collected while it runs.
pub struct Exploration<N: Identifier> {
  pub nodes_visited: usize,
  pub edges_examined: usize,
  pub explored_edges: Vec<(N, N)>,
}

/// Frontier and labels of a best-first search.
///
/// The frontier is ordered by a key which is the cost so far plus an optional estimate of the remaining
/// cost. Stale frontier entries are not removed when a node gets a better label: they are skipped when
/// popped, once the node is settled.
pub struct SearchSpace<W: Weight, N: Identifier> {
  pq: BinaryHeap<State<W, N>>,
  resolved: HashMap<N, Label<W, N>>,
  settled: HashSet<N>,
  exploration: Exploration<N>,
}

impl<W: Weight, N: Identifier> SearchSpace<W, N> {
  pub fn new() -> Self {
    SearchSpace {
      pq: BinaryHeap::new(),
      resolved: HashMap::new(),
      settled: HashSet::new(),
      exploration: Exploration {
        nodes_visited: 0,
        edges_examined: 0,
        explored_edges: Vec::new(),
      },
    }
  }

  pub fn init_with_key(&mut self, node: N, key: W) {
    self.resolve(node, node, Default::default(), key);
  }

  /// Pops the frontier until a node which is not settled yet comes out, settles it and returns it with
  /// its final cost.
  pub fn pop(&mut self) -> Option<(N, W)> {
    while let Some(State { id, .. }) = self.pq.pop() {
      if !self.settled.insert(id) {
        continue;
      }
      self.exploration.nodes_visited += 1;
      return self.resolved.get(&id).map(|label| (id, label.cost));
    }
    None
  }

  /// Relaxes every edge leaving a settled node.
  ///
  /// Every examined edge is recorded, including the ones leading back to settled nodes and the ones
  /// which don't improve the label of their target.
  pub fn relax<G, H>(&mut self, graph: G, node: N, cost: W, estimate: H)
  where
    G: Copy + Weighted<Weight = W, NodeId = N>,
    H: Fn(N) -> W,
  {
    for (target_id, edge) in graph.neighbors(node) {
      self.exploration.edges_examined += 1;
      self.exploration.explored_edges.push((node, target_id));

      if self.settled.contains(&target_id) {
        continue;
      }

      let path_cost: W = cost + graph.edge_weight(edge);
      if let Some(target_state) = self.resolved.get(&target_id) {
        if !(path_cost < target_state.cost) {
          continue;
        }
      }

      self.resolve(target_id, node, path_cost, path_cost + estimate(target_id));
    }
  }

  /// Returns the node sequence from `node` back to the search origin.
  pub fn unwind(&self, node: N) -> Vec<N> {
    let mut result: Vec<N> = Vec::new();

    let mut current_node = node;
    while let Some(label) = self.resolved.get(&current_node) {
      result.push(current_node);
      if current_node == label.parent {
        break;
      }
      current_node = label.parent;
    }
    result
  }

  pub fn into_exploration(self) -> Exploration<N> {
    self.exploration
  }

  fn resolve(&mut self, node: N, parent_node: N, path_cost: W, key: W) {
    self.resolved.insert(
      node,
      Label {
        cost: path_cost,
        parent: parent_node,
      },
    );
    self.pq.push(State { key, id: node });
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::network::{Road, RoadMeta, RoadNetwork};
  use crate::test_utils::*;

  #[test]
  fn test_pop_and_relax() {
    let network = diamond();
    let weighted_graph = (&network, |road: &Road| road.length);

    let mut search_space = SearchSpace::<f64, u32>::new();
    search_space.init_with_key(A, 0.0);

    let mut order = Vec::new();
    while let Some((id, cost)) = search_space.pop() {
      order.push((id, cost));
      search_space.relax(weighted_graph, id, cost, |_| 0.0);
    }

    assert_eq!(order, vec![(A, 0.0), (B, 1.0), (C, 1.5), (D, 2.0)]);
    assert_eq!(search_space.unwind(D), vec![D, B, A]);
    assert_eq!(search_space.unwind(A), vec![A]);

    let exploration = search_space.into_exploration();
    assert_eq!(exploration.nodes_visited, 4);
    // Every node relaxes all of its roads, including the ones leading back
    assert_eq!(exploration.edges_examined, 8);
    assert_eq!(exploration.explored_edges[0], (A, B));
  }

  #[test]
  fn test_stale_entries_are_skipped() {
    let mut network = RoadNetwork::new();
    let far = network.add_node("far", 0.0, 0.0);
    let near = network.add_node("near", 0.0, 0.01);
    let start = network.add_node("start", 0.01, 0.0);
    network
      .add_road(start, far, 5.0, RoadMeta::default())
      .unwrap()
      .add_road(start, near, 1.0, RoadMeta::default())
      .unwrap()
      .add_road(near, far, 1.0, RoadMeta::default())
      .unwrap();
    let weighted_graph = (&network, |road: &Road| road.length);

    let mut search_space = SearchSpace::<f64, u32>::new();
    search_space.init_with_key(start, 0.0);

    let mut settled = Vec::new();
    while let Some((id, cost)) = search_space.pop() {
      settled.push((id, cost));
      search_space.relax(weighted_graph, id, cost, |_| 0.0);
    }

    // `far` is pushed at 5.0 first, the entry left behind by the improvement to 2.0 is dropped
    assert_eq!(settled, vec![(start, 0.0), (near, 1.0), (far, 2.0)]);
    assert_eq!(search_space.unwind(far), vec![far, near, start]);
    assert_eq!(search_space.into_exploration().nodes_visited, 3);
  }

  #[test]
  fn test_integer_weights() {
    let network = diamond();
    let weighted_graph = (&network, |road: &Road| (road.length * 2.0) as u32);

    let mut search_space = SearchSpace::<u32, u32>::new();
    search_space.init_with_key(D, 0);

    let mut last = None;
    while let Some((id, cost)) = search_space.pop() {
      last = Some((id, cost));
      search_space.relax(weighted_graph, id, cost, |_| 0);
    }

    assert_eq!(last, Some((A, 4)));
  }
}
