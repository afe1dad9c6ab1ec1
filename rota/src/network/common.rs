use crate::spatial::Position;
use serde::{Deserialize, Serialize};

// Node id
pub type Idx = u32;

/// A road intersection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub id: Idx,
  pub name: String,
  pub position: Position,
}

impl Node {
  pub fn lat(&self) -> f64 {
    self.position.y()
  }

  pub fn lon(&self) -> f64 {
    self.position.x()
  }
}

/// Attributes shared by both directions of a road.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadMeta {
  pub name: String,
  /// Congestion multiplier, `1.0` for a free-flowing road.
  pub traffic_factor: f64,
  /// Surface quality in `[0, 1]`, `1.0` being the best surface.
  pub quality: f64,
}

impl Default for RoadMeta {
  fn default() -> Self {
    Self {
      name: String::from("Unknown"),
      traffic_factor: 1.0,
      quality: 1.0,
    }
  }
}

impl RoadMeta {
  pub fn named<S: Into<String>>(name: S) -> Self {
    Self {
      name: name.into(),
      ..Default::default()
    }
  }

  pub fn with_traffic(mut self, traffic_factor: f64) -> Self {
    self.traffic_factor = traffic_factor;
    self
  }

  pub fn with_quality(mut self, quality: f64) -> Self {
    self.quality = quality;
    self
  }

  pub fn is_valid(&self) -> bool {
    self.traffic_factor.is_finite() && self.traffic_factor >= 1.0 && (0.0..=1.0).contains(&self.quality)
  }
}

/// One direction of a road segment as stored in the adjacency list of its origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Road {
  pub to: Idx,
  /// Physical length in kilometres.
  pub length: f64,
  pub meta: RoadMeta,
}
