//! Layout of the network file.
//!
//! ```json
//! {
//!   "nodes": [{"id": 0, "lat": -6.1624, "lon": 39.1923, "name": "Darajani"}],
//!   "edges": [{"from": 0, "to": 1, "distance": 0.42, "road_name": "Creek Road", "traffic_factor": 1.4}]
//! }
//! ```

use rota::{Idx, RoadMeta};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
  pub nodes: Vec<NodeRecord>,
  #[serde(default)]
  pub edges: Vec<EdgeRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
  pub id: Idx,
  pub lat: f64,
  pub lon: f64,
  #[serde(default)]
  pub name: String,
}

/// An undirected road. `distance` is the base length in kilometres.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
  pub from: Idx,
  pub to: Idx,
  pub distance: f64,
  #[serde(default = "unknown_road")]
  pub road_name: String,
  #[serde(default = "neutral")]
  pub traffic_factor: f64,
  #[serde(default = "neutral")]
  pub quality: f64,
}

fn unknown_road() -> String {
  RoadMeta::default().name
}

fn neutral() -> f64 {
  1.0
}

impl EdgeRecord {
  pub fn meta(&self) -> RoadMeta {
    RoadMeta::named(self.road_name.as_str())
      .with_traffic(self.traffic_factor)
      .with_quality(self.quality)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_edge_defaults() {
    let edge: EdgeRecord = serde_json::from_str(r#"{"from": 0, "to": 1, "distance": 0.5}"#).unwrap();

    assert_eq!(edge.meta(), RoadMeta::default());
    assert_eq!(edge.road_name, "Unknown");
  }

  #[test]
  fn test_edge_metadata() {
    let edge: EdgeRecord = serde_json::from_str(
      r#"{"from": 3, "to": 1, "distance": 0.5, "road_name": "Creek Road", "traffic_factor": 1.6, "quality": 0.7}"#,
    )
    .unwrap();

    assert_eq!(
      edge.meta(),
      RoadMeta::named("Creek Road").with_traffic(1.6).with_quality(0.7)
    );
  }

  #[test]
  fn test_network_without_edges() {
    let file: NetworkFile = serde_json::from_str(r#"{"nodes": [{"id": 0, "lat": 1.0, "lon": 2.0}]}"#).unwrap();

    assert!(file.edges.is_empty());
    assert_eq!(file.nodes[0].name, "");
  }
}
