//! Coordinate value types used for tower identity and site anchors.

use serde::{Deserialize, Serialize};

/// Scale factor used when quantizing degrees for identity comparison.
///
/// Regulatory filings carry coordinates formatted to five decimal places, so
/// two sightings of the same tower agree once rounded at 1e-5 degrees.
const QUANTIZE_SCALE: f64 = 100_000.0;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north.
    pub lat_deg: f64,
    /// Longitude in decimal degrees, positive east.
    pub lon_deg: f64,
}

impl GeoPoint {
    /// Creates a point from decimal degrees.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.lon_deg.to_radians()
    }

    /// Returns the quantized identity key for this point.
    pub fn key(&self) -> CoordKey {
        CoordKey::from_point(self)
    }
}

/// Hashable identity key for a coordinate pair.
///
/// Raw floating point degrees make fragile map keys; the key stores each
/// coordinate quantized to 1e-5 degrees as an integer so that towers reported
/// with equal printed precision collapse to one node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CoordKey {
    lat_q: i64,
    lon_q: i64,
}

impl CoordKey {
    /// Quantizes a point into its identity key.
    pub fn from_point(point: &GeoPoint) -> Self {
        Self {
            lat_q: (point.lat_deg * QUANTIZE_SCALE).round() as i64,
            lon_q: (point.lon_deg * QUANTIZE_SCALE).round() as i64,
        }
    }

    /// Returns the quantized latitude component.
    pub fn lat_quantized(&self) -> i64 {
        self.lat_q
    }

    /// Returns the quantized longitude component.
    pub fn lon_quantized(&self) -> i64 {
        self.lon_q
    }
}

/// A fixed endpoint of interest, such as a data center.
///
/// Sites are proximity anchors for path analysis; they are never members of
/// the tower graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Display name for the site.
    pub name: String,
    /// Location of the site.
    pub point: GeoPoint,
}

impl Site {
    /// Creates a named site at the given location.
    pub fn new(name: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            name: name.into(),
            point,
        }
    }
}
