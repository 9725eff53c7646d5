#![deny(missing_docs)]

//! Directed hop multigraph with coordinate-deduplicated towers, its
//! undirected projection, and snapshot document serialization.

mod hopgraph;
mod serialization;
mod undirected;

pub use hopgraph::{HopGraph, HopLink, Tower, TowerSighting};
pub use serialization::{graph_from_json, graph_from_yaml, graph_to_json, graph_to_yaml};
pub use undirected::{EdgeKey, UndirectedView};
