//! Geodesic distance model.

use crate::coords::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the 3-D chord distance between two points in kilometers.
///
/// Each point is projected onto a sphere of radius [`EARTH_RADIUS_KM`] and
/// the Euclidean distance between the projections is returned. The chord is a
/// small-angle proxy for great-circle ground distance, accurate at the
/// corridor scale (under roughly 2000 km) this system operates on.
pub fn chord_distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (x1, y1, z1) = project(a);
    let (x2, y2, z2) = project(b);
    ((x2 - x1).powi(2) + (y2 - y1).powi(2) + (z2 - z1).powi(2)).sqrt()
}

fn project(point: &GeoPoint) -> (f64, f64, f64) {
    let lat = point.lat_rad();
    let lon = point.lon_rad();
    (
        EARTH_RADIUS_KM * lat.cos() * lon.sin(),
        EARTH_RADIUS_KM * lat.sin(),
        EARTH_RADIUS_KM * lat.cos() * lon.cos(),
    )
}
