//! Record store for school records
//!
//! The store is the only stateful collaborator in the service. It owns record
//! identity (ids are minted here) and exposes exactly two operations: insert
//! and fetch-all. Records are never updated or deleted.
//!
//! Two implementations:
//!
//! - [`MemorySchoolStore`]: `RwLock`-backed, for tests and ephemeral serving
//! - [`DiskSchoolStore`]: durable append-only file, checksum-verified on read
//!
//! A store handle is opened once at process startup, shared behind `Arc`
//! across request handlers, and dropped on shutdown.

mod disk;
mod errors;
mod frame;
mod memory;

pub use disk::DiskSchoolStore;
pub use errors::{Severity, StoreError, StoreErrorCode, StoreResult};
pub use memory::MemorySchoolStore;

use crate::school::{NewSchool, SchoolRecord};

/// Persistence contract for school records.
pub trait SchoolStore: Send + Sync {
    /// Persists a new school and returns the stored record, including the
    /// id and timestamp the store assigned.
    fn insert(&self, new: NewSchool) -> StoreResult<SchoolRecord>;

    /// Returns every stored record, in insertion order.
    fn fetch_all(&self) -> StoreResult<Vec<SchoolRecord>>;
}
