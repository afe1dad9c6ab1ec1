//! Routing on a road network with several notions of the best route.
//!
//! Every strategy returns a [`Route`](route::Route) carrying its own search statistics, so that the
//! results can be compared and a [`SelectionPolicy`](policy::SelectionPolicy) can pick one per segment.

pub mod alternatives;
pub mod context;
pub mod cost_functions;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod network;
pub mod policy;
pub mod route;
pub mod shortest;
pub mod spatial;
pub mod vehicle;

mod search_space;

#[cfg(test)]
mod test_utils;

pub use alternatives::{alternative_paths, AlternativePath};
pub use context::weighted_path;
pub use error::RoutingError;
pub use heuristic::heuristic_path;
pub use network::{Idx, RoadMeta, RoadNetwork};
pub use policy::{Journey, SelectionPolicy, Strategy};
pub use route::Route;
pub use shortest::{path_avoiding, shortest_distance, shortest_path};
pub use vehicle::VehicleClass;
