use rota::{Idx, RoutingError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a road network file.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("failed to read {path:?}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("malformed network file: {0}")]
  Json(#[from] serde_json::Error),
  #[error("node {0} is declared more than once")]
  DuplicateNode(Idx),
  /// Node ids must run from zero without gaps.
  #[error("node id {id} is out of range, {count} nodes must be numbered 0 to {}", count.saturating_sub(1))]
  SparseNodeIds { id: Idx, count: usize },
  #[error("edge #{edge} references undeclared node {node}")]
  UnknownEndpoint { edge: usize, node: Idx },
  #[error("edge #{edge} is invalid: {source}")]
  InvalidEdge {
    edge: usize,
    #[source]
    source: RoutingError,
  },
}
