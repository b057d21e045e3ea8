//! School domain records
//!
//! The record shapes shared by the store, the ranker, and the HTTP surface.
//! Records are created once, never updated or deleted, and read in bulk.

mod record;

pub use record::{NewSchool, SchoolRecord};
