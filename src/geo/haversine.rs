//! Haversine great-circle distance
//!
//! Distance between two points on a sphere of the Earth's mean radius.
//! The formula is numerically stable for small distances, which is what a
//! proximity listing mostly deals in.

use super::point::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
///
/// Pure and total over valid `GeoPoint`s; the result is always non-negative.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = to.lat_rad() - from.lat_rad();
    let d_lon = to.lon_rad() - from.lon_rad();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat_rad().cos() * to.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
