//! Set of traits for defining a graph abstraction.
//!
//! The module contains traits for defining an undirected graph whose edges carry data, and a weighted
//! view of it obtained by pairing the graph with a cost function. Graphs which know where their nodes are
//! implement [`Located`].
//!
mod graph;
mod spatial;
mod weighted;

pub use graph::*;
pub use spatial::*;
pub use weighted::*;
