//! Durable school store backed by an append-only file
//!
//! Records live in `<data_dir>/data/schools.dat` as checksummed frames.
//! On open, the whole file is scanned: every frame's checksum is verified and
//! the records are loaded into memory, so `fetch_all` never touches the disk
//! on the request path. Inserts append one frame and fsync before the
//! operation is acknowledged.
//!
//! Records are never rewritten in place, so a partial append at the tail is
//! the only failure a crash can leave behind, and the checksum scan reports
//! it explicitly on the next open. A failed append inside a running process
//! is rolled back immediately: the file is truncated to the last durable
//! frame so later inserts never land behind a torn one. If even the rollback
//! fails the store refuses further writes.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use uuid::Uuid;

use crate::school::{NewSchool, SchoolRecord};

use super::errors::{StoreError, StoreResult};
use super::frame::{decode_frame, encode_frame, MIN_FRAME_SIZE};
use super::SchoolStore;

/// File name of the record log inside the data directory.
const STORE_FILE: &str = "schools.dat";

#[derive(Debug)]
struct DiskStoreInner {
    file: File,
    records: Vec<SchoolRecord>,
    /// Byte length of the file up to the last fully durable frame.
    durable_len: u64,
    /// Set when a failed append could not be rolled back; all further
    /// inserts are refused because the tail is no longer trustworthy.
    poisoned: bool,
}

/// Append-only durable store.
#[derive(Debug)]
pub struct DiskSchoolStore {
    store_path: PathBuf,
    inner: Mutex<DiskStoreInner>,
}

impl DiskSchoolStore {
    /// Opens or creates the store under `<data_dir>/data/`.
    ///
    /// Scans any existing file, verifying every frame. A corrupt frame fails
    /// the open; the store never serves from a file it cannot fully verify.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let data_subdir = data_dir.join("data");
        let store_path = data_subdir.join(STORE_FILE);

        if !data_subdir.exists() {
            fs::create_dir_all(&data_subdir).map_err(|e| {
                StoreError::io_error(
                    format!("failed to create data directory: {}", data_subdir.display()),
                    e,
                )
            })?;
        }

        let records = Self::scan(&store_path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&store_path)
            .map_err(|e| {
                StoreError::io_error(
                    format!("failed to open store file: {}", store_path.display()),
                    e,
                )
            })?;

        let durable_len = file
            .metadata()
            .map_err(|e| {
                StoreError::io_error(
                    format!("failed to stat store file: {}", store_path.display()),
                    e,
                )
            })?
            .len();

        Ok(Self {
            store_path,
            inner: Mutex::new(DiskStoreInner {
                file,
                records,
                durable_len,
                poisoned: false,
            }),
        })
    }

    /// Drops an incompletely appended frame by truncating back to the last
    /// durable length.
    fn discard_torn_tail(file: &File, durable_len: u64) -> std::io::Result<()> {
        file.set_len(durable_len)?;
        file.sync_all()
    }

    /// Reads and verifies every frame in the store file.
    fn scan(store_path: &Path) -> StoreResult<Vec<SchoolRecord>> {
        let data = match fs::read(store_path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::read_failed(
                    format!("failed to read store file: {}", store_path.display()),
                    e,
                ))
            }
        };

        let mut records = Vec::new();
        let mut offset = 0usize;

        while offset < data.len() {
            if data.len() - offset < MIN_FRAME_SIZE {
                return Err(StoreError::corruption_at_offset(
                    offset as u64,
                    format!("trailing garbage: {} bytes", data.len() - offset),
                ));
            }
            let (record, consumed) = decode_frame(&data[offset..], offset as u64)?;
            records.push(record);
            offset += consumed;
        }

        Ok(records)
    }

    /// Path of the underlying store file.
    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SchoolStore for DiskSchoolStore {
    fn insert(&self, new: NewSchool) -> StoreResult<SchoolRecord> {
        let record = SchoolRecord::create(Uuid::new_v4().to_string(), new);
        let frame = encode_frame(&record)?;

        let mut inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::write_failed_no_source("store lock poisoned"))?;

        if inner.poisoned {
            return Err(StoreError::corruption(
                "store has an unrecovered torn tail; refusing writes",
            ));
        }

        // fsync before acknowledging; the insert is not done until it is durable
        let appended = inner
            .file
            .write_all(&frame)
            .and_then(|_| inner.file.sync_all());

        if let Err(e) = appended {
            // roll the file back so later inserts never land behind a torn frame
            if Self::discard_torn_tail(&inner.file, inner.durable_len).is_err() {
                inner.poisoned = true;
            }
            return Err(StoreError::write_failed(
                format!("failed to append record {}", record.id),
                e,
            ));
        }

        inner.durable_len += frame.len() as u64;
        inner.records.push(record.clone());

        Ok(record)
    }

    fn fetch_all(&self) -> StoreResult<Vec<SchoolRecord>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::write_failed_no_source("store lock poisoned"))?;
        Ok(inner.records.clone())
    }
}
