#![deny(missing_docs)]

//! Core identifiers, coordinate types, and the geodesic distance model shared
//! by the microwave backhaul reconstruction crates.

use serde::{Deserialize, Serialize};

pub mod coords;
pub mod errors;
pub mod geo;
pub mod provenance;

pub use coords::{CoordKey, GeoPoint, Site};
pub use errors::{ErrorInfo, MwError};
pub use geo::{chord_distance_km, EARTH_RADIUS_KM};
pub use provenance::SchemaVersion;

/// Identifier for a tower node within a hop graph.
///
/// Ids are assigned sequentially on first sighting of a coordinate pair and
/// are dense within a single graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Identifier for a regulatory license.
///
/// License ids are opaque upstream strings; comparisons trim surrounding
/// whitespace since the ledgers are hand-assembled text files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LicenseId(String);

impl LicenseId {
    /// Creates a license identifier, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Returns the normalized textual form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LicenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
