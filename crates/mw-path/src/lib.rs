#![deny(missing_docs)]

//! Path analysis engine: proximity selection, shortest-path latency and
//! stretch metrics, k-shortest-path enumeration with a stretch stopping
//! rule, and single-edge-removal redundancy.

mod dijkstra;
mod engine;
mod flags;
mod metrics;
mod yen;

pub use dijkstra::{hop_distance, shortest_path, WeightedPath};
pub use engine::{analyze, proximity_towers, LatencyReport, ProximityTower};
pub use flags::AnalysisOpts;
pub use metrics::{write_rows, MetricsRow, MetricsValues};
pub use yen::SimplePaths;
