//! In-memory school store
//!
//! Used by tests and ephemeral serving. Same contract as the disk store,
//! minus durability.

use std::sync::RwLock;

use uuid::Uuid;

use crate::school::{NewSchool, SchoolRecord};

use super::errors::{StoreError, StoreResult};
use super::SchoolStore;

/// `RwLock`-backed store holding records in insertion order.
#[derive(Debug, Default)]
pub struct MemorySchoolStore {
    records: RwLock<Vec<SchoolRecord>>,
}

impl MemorySchoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SchoolStore for MemorySchoolStore {
    fn insert(&self, new: NewSchool) -> StoreResult<SchoolRecord> {
        let record = SchoolRecord::create(Uuid::new_v4().to_string(), new);

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::write_failed_no_source("store lock poisoned"))?;
        records.push(record.clone());

        Ok(record)
    }

    fn fetch_all(&self) -> StoreResult<Vec<SchoolRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::write_failed_no_source("store lock poisoned"))?;
        Ok(records.clone())
    }
}
