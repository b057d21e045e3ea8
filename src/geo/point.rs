//! Validated geographic coordinates
//!
//! `GeoPoint::new` is the checked constructor used at every boundary: it
//! only accepts finite, in-range degree values. Stored records rebuild their
//! point directly (`SchoolRecord::location`) because their coordinates
//! already passed this check at creation time.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Valid latitude degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Coordinate rejection reasons.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// NaN or infinite input
    #[error("{axis} is not a finite number")]
    NotFinite { axis: &'static str },

    /// Finite but outside the valid degree range
    #[error("{axis} {value} out of range [{min}, {max}]")]
    OutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// A point on the Earth's surface in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point after checking both coordinates are finite and within
    /// the valid degree ranges. Zero is a valid coordinate on both axes.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        check_axis("latitude", latitude, LATITUDE_RANGE)?;
        check_axis("longitude", longitude, LONGITUDE_RANGE)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

fn check_axis(
    axis: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<(), CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NotFinite { axis });
    }
    if !range.contains(&value) {
        return Err(CoordinateError::OutOfRange {
            axis,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}
