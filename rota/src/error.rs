//! Errors raised by the road network and the searches running on it.

use crate::network::Idx;
use thiserror::Error;

/// Errors surfaced to callers of the network and of the query functions.
///
/// An unreachable goal is not an error: searches report it as a route with an empty path and an
/// infinite cost.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoutingError {
  /// A query or a road references a node which was never added to the network.
  #[error("node {0} is not part of the road network")]
  UnknownNode(Idx),
  /// A road length must be positive and finite.
  #[error("road {from} <-> {to} has invalid length {length}")]
  InvalidRoad { from: Idx, to: Idx, length: f64 },
  /// Traffic must be a finite multiplier of at least `1.0` and quality must lie in `[0, 1]`.
  #[error("road {from} <-> {to} has invalid traffic factor {traffic_factor} or quality {quality}")]
  InvalidMeta {
    from: Idx,
    to: Idx,
    traffic_factor: f64,
    quality: f64,
  },
  /// A road must connect two different intersections.
  #[error("road starts and ends at node {0}")]
  SelfLoop(Idx),
}

/// A defect in the adjacency structure found by [`RoadNetwork::validate`](crate::network::RoadNetwork::validate).
///
/// Violations are diagnostics: the network stays usable but routes computed on it are suspect.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntegrityViolation {
  #[error("road {from} -> {to} has no reverse entry")]
  MissingReverse { from: Idx, to: Idx },
  #[error("road {from} -> {to} differs from its reverse entry")]
  MismatchedReverse { from: Idx, to: Idx },
  #[error("road {from} -> {to} leads to a node outside the network")]
  DanglingEnd { from: Idx, to: Idx },
}
