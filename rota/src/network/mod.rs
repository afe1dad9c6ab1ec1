//! Road network data structure.
//!
//! [`RoadNetwork`] stores intersections and the roads between them as adjacency lists. It is the only
//! source of distances for every search in the crate. Roads can be closed temporarily with
//! [`RoadNetwork::close_roads`], which hands out a [`RoadClosure`] guard restoring them on drop.

mod closure;
mod common;
mod road_network;

pub use closure::*;
pub use common::*;
pub use road_network::*;
