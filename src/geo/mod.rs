//! Geographic distance and proximity ranking
//!
//! The ranker is the one non-trivial piece of the service: it computes the
//! great-circle distance from a reference point to every school and returns
//! the schools in ascending-distance order.
//!
//! # Guarantees
//!
//! - Pure and stateless; safe to call concurrently from any handler
//! - Length-preserving: every input record appears exactly once in the output
//! - Stable sort: equal distances keep their input order

mod haversine;
mod point;
mod ranker;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use point::{CoordinateError, GeoPoint, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use ranker::{rank_by_distance, RankedSchool};
