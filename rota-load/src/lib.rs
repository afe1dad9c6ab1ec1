//! Loads road networks from JSON files.

mod error;
mod network_builder;
pub mod records;

pub use error::LoadError;
pub use network_builder::*;
