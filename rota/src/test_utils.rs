use crate::network::*;
use crate::spatial::KM_PER_DEGREE;

pub const A: Idx = 0;
pub const B: Idx = 1;
pub const C: Idx = 2;
pub const D: Idx = 3;
pub const E: Idx = 4;

/// A-B-D is 2 km long, A-C-D 3 km. Straight lines between the nodes are shorter than the roads.
pub fn diamond() -> RoadNetwork {
  diamond_with(RoadMeta::named("Creek Road"), RoadMeta::named("Market Street"))
}

/// The diamond with traffic doubled along A-B-D, which brings its weighted cost to 4.0.
pub fn congested_diamond() -> RoadNetwork {
  diamond_with(
    RoadMeta::named("Creek Road").with_traffic(2.0),
    RoadMeta::named("Market Street").with_traffic(2.0),
  )
}

/// The diamond with custom metadata on the roads A-B and B-D.
pub fn diamond_with(a_to_b: RoadMeta, b_to_d: RoadMeta) -> RoadNetwork {
  let mut network = RoadNetwork::new();
  network.add_node("A", 0.0, 0.0);
  network.add_node("B", 0.0045, 0.0075);
  network.add_node("C", -0.0045, 0.0075);
  network.add_node("D", 0.0, 0.015);

  network
    .add_road(A, B, 1.0, a_to_b)
    .unwrap()
    .add_road(B, D, 1.0, b_to_d)
    .unwrap()
    .add_road(A, C, 1.5, RoadMeta::named("Harbour Road"))
    .unwrap()
    .add_road(C, D, 1.5, RoadMeta::named("Harbour Road"))
    .unwrap();
  network
}

/// The diamond plus a node E without any road.
pub fn disconnected() -> RoadNetwork {
  let mut network = diamond();
  network.add_node("E", 0.01, 0.01);
  network
}

/// Grid of `rows x cols` intersections `spacing_km` apart, numbered row by row. Road lengths vary between
/// one and one and a half times the spacing so that shortest paths are mostly unique, and never get
/// shorter than the straight line.
pub fn grid(rows: u32, cols: u32, spacing_km: f64) -> RoadNetwork {
  let step = spacing_km / KM_PER_DEGREE;
  let mut network = RoadNetwork::new();
  for row in 0..rows {
    for col in 0..cols {
      network.add_node(format!("{}x{}", row, col), row as f64 * step, col as f64 * step);
    }
  }

  let id = |row: u32, col: u32| row * cols + col;
  let length = |from: Idx, to: Idx| spacing_km * (1.0 + 0.1 * ((from * 7 + to * 3) % 6) as f64);
  for row in 0..rows {
    for col in 0..cols {
      let from = id(row, col);
      if col + 1 < cols {
        let to = id(row, col + 1);
        let meta = RoadMeta::named(format!("Row {}", row));
        network.add_road(from, to, length(from, to), meta).unwrap();
      }
      if row + 1 < rows {
        let to = id(row + 1, col);
        let meta = RoadMeta::named(format!("Column {}", col));
        network.add_road(from, to, length(from, to), meta).unwrap();
      }
    }
  }
  network
}
