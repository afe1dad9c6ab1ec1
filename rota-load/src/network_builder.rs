use crate::error::LoadError;
use crate::records::{NetworkFile, NodeRecord};
use log::{info, warn};
use rota::RoadNetwork;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads a network from a JSON file, see [`NetworkFile`] for the layout.
pub fn import_network_json<P: AsRef<Path>>(path: P) -> Result<RoadNetwork, LoadError> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|source| LoadError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  read_network(BufReader::new(file))
}

pub fn read_network<R: Read>(reader: R) -> Result<RoadNetwork, LoadError> {
  let file: NetworkFile = serde_json::from_reader(reader)?;
  build_network(&file)
}

/// Builds the network and runs the integrity check once. Violations are logged, not fatal.
pub fn build_network(file: &NetworkFile) -> Result<RoadNetwork, LoadError> {
  let count = file.nodes.len();
  let mut slots: Vec<Option<&NodeRecord>> = vec![None; count];
  for record in &file.nodes {
    let slot = slots
      .get_mut(record.id as usize)
      .ok_or(LoadError::SparseNodeIds { id: record.id, count })?;
    if slot.is_some() {
      return Err(LoadError::DuplicateNode(record.id));
    }
    *slot = Some(record);
  }

  // Every slot is taken: ids are unique and all below the node count
  let mut network = RoadNetwork::new();
  for record in slots.into_iter().flatten() {
    network.add_node(record.name.as_str(), record.lat, record.lon);
  }

  for (index, edge) in file.edges.iter().enumerate() {
    for node in [edge.from, edge.to] {
      if !network.contains(node) {
        return Err(LoadError::UnknownEndpoint { edge: index, node });
      }
    }
    network
      .add_road(edge.from, edge.to, edge.distance, edge.meta())
      .map_err(|source| LoadError::InvalidEdge {
        edge: index,
        source,
      })?;
  }

  info!(
    "Built road network with {} nodes and {} roads",
    network.number_of_nodes(),
    network.number_of_edges()
  );
  if !network.validate() {
    warn!("Road network failed validation, routes may be wrong");
  }
  Ok(network)
}
