//! School record types
//!
//! A `NewSchool` is validated creation input; a `SchoolRecord` is what the
//! store persists and hands back. Identity (`id`) and `created_at` belong to
//! the store, which mints both at insert time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Validated input for creating a school.
///
/// By the time a `NewSchool` exists, name and address are known non-empty and
/// the location carries finite, in-range coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub location: GeoPoint,
}

/// A persisted school record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolRecord {
    /// Opaque unique identifier, assigned at creation, immutable
    pub id: String,
    pub name: String,
    pub address: String,
    /// Degrees, [-90, 90]
    pub latitude: f64,
    /// Degrees, [-180, 180]
    pub longitude: f64,
    /// Creation timestamp, assigned by the store
    pub created_at: DateTime<Utc>,
}

impl SchoolRecord {
    /// Builds a record from validated input, stamping it with the given id
    /// and the current time.
    pub fn create(id: impl Into<String>, new: NewSchool) -> Self {
        Self {
            id: id.into(),
            name: new.name,
            address: new.address,
            latitude: new.location.latitude,
            longitude: new.location.longitude,
            created_at: Utc::now(),
        }
    }

    /// The record's coordinates as a point.
    ///
    /// Stored coordinates were validated at the creation boundary, so this
    /// never fails.
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
