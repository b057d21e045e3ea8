//! Store Durability and Integrity Tests
//!
//! - Inserted records survive a close and reopen
//! - Corruption in the store file is an explicit failure, never ignored
//! - Memory and disk stores honor the same contract

use std::fs;

use schooldir::geo::GeoPoint;
use schooldir::school::NewSchool;
use schooldir::store::{DiskSchoolStore, MemorySchoolStore, SchoolStore};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn new_school(name: &str, lat: f64, lon: f64) -> NewSchool {
    NewSchool {
        name: name.to_string(),
        address: format!("{} Avenue", name),
        location: GeoPoint::new(lat, lon).unwrap(),
    }
}

// =============================================================================
// Durability
// =============================================================================

#[test]
fn test_records_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    let ids: Vec<String> = {
        let store = DiskSchoolStore::open(temp_dir.path()).unwrap();
        (0..10)
            .map(|i| {
                store
                    .insert(new_school(&format!("school-{}", i), f64::from(i), f64::from(i)))
                    .unwrap()
                    .id
            })
            .collect()
    };

    let store = DiskSchoolStore::open(temp_dir.path()).unwrap();
    let all = store.fetch_all().unwrap();

    assert_eq!(all.len(), 10);
    let fetched_ids: Vec<_> = all.iter().map(|r| r.id.clone()).collect();
    assert_eq!(fetched_ids, ids, "insertion order must survive reopen");
}

#[test]
fn test_full_record_contents_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    let inserted = {
        let store = DiskSchoolStore::open(temp_dir.path()).unwrap();
        store.insert(new_school("Roundtrip High", 48.2082, 16.3738)).unwrap()
    };

    let store = DiskSchoolStore::open(temp_dir.path()).unwrap();
    let fetched = &store.fetch_all().unwrap()[0];

    assert_eq!(*fetched, inserted);
    assert_eq!(fetched.name, "Roundtrip High");
    assert_eq!(fetched.latitude, 48.2082);
    assert_eq!(fetched.longitude, 16.3738);
}

// =============================================================================
// Corruption Is Never Ignored
// =============================================================================

#[test]
fn test_flipped_byte_fails_open() {
    let temp_dir = TempDir::new().unwrap();

    let store_path = {
        let store = DiskSchoolStore::open(temp_dir.path()).unwrap();
        store.insert(new_school("victim", 1.0, 1.0)).unwrap();
        store.path().to_path_buf()
    };

    let mut contents = fs::read(&store_path).unwrap();
    let mid = contents.len() / 2;
    contents[mid] ^= 0xFF;
    fs::write(&store_path, contents).unwrap();

    let err = DiskSchoolStore::open(temp_dir.path()).unwrap_err();
    assert!(err.is_fatal(), "corruption must be fatal");
    assert!(
        err.to_string().to_lowercase().contains("checksum")
            || err.to_string().to_lowercase().contains("corrupt"),
        "error should name the corruption, got: {}",
        err
    );
}

#[test]
fn test_truncated_file_fails_open() {
    let temp_dir = TempDir::new().unwrap();

    let store_path = {
        let store = DiskSchoolStore::open(temp_dir.path()).unwrap();
        store.insert(new_school("a", 1.0, 1.0)).unwrap();
        store.insert(new_school("b", 2.0, 2.0)).unwrap();
        store.path().to_path_buf()
    };

    // Simulate a torn append by cutting the tail mid-frame
    let contents = fs::read(&store_path).unwrap();
    fs::write(&store_path, &contents[..contents.len() - 5]).unwrap();

    assert!(DiskSchoolStore::open(temp_dir.path()).is_err());
}

#[test]
fn test_intact_records_before_corruption_are_not_served() {
    // The store refuses to open at all rather than serve a partial view
    let temp_dir = TempDir::new().unwrap();

    let store_path = {
        let store = DiskSchoolStore::open(temp_dir.path()).unwrap();
        store.insert(new_school("first", 1.0, 1.0)).unwrap();
        store.insert(new_school("second", 2.0, 2.0)).unwrap();
        store.path().to_path_buf()
    };

    let mut contents = fs::read(&store_path).unwrap();
    let last = contents.len() - 1;
    contents[last] ^= 0xFF;
    fs::write(&store_path, contents).unwrap();

    assert!(DiskSchoolStore::open(temp_dir.path()).is_err());
}

// =============================================================================
// Contract Parity Between Implementations
// =============================================================================

#[test]
fn test_memory_and_disk_agree_on_contract() {
    let temp_dir = TempDir::new().unwrap();
    let disk = DiskSchoolStore::open(temp_dir.path()).unwrap();
    let memory = MemorySchoolStore::new();

    for store in [&disk as &dyn SchoolStore, &memory as &dyn SchoolStore] {
        let record = store.insert(new_school("parity", 5.0, 6.0)).unwrap();
        assert!(!record.id.is_empty());

        let all = store.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, record.id);
    }
}

#[test]
fn test_empty_store_lists_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = DiskSchoolStore::open(temp_dir.path()).unwrap();
    assert!(store.fetch_all().unwrap().is_empty());
    assert!(store.is_empty());
}
