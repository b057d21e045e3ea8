//! Proximity Ranking Property Tests
//!
//! Properties:
//! - rank is length-preserving; empty in, empty out
//! - self-distance is zero; distance is symmetric
//! - known distances come out in ascending order
//! - insert-then-list round-trip puts the record first at distance ~0

use schooldir::geo::{haversine_km, rank_by_distance, GeoPoint};
use schooldir::school::{NewSchool, SchoolRecord};
use schooldir::store::{MemorySchoolStore, SchoolStore};

// =============================================================================
// Test Utilities
// =============================================================================

fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).expect("test coordinates must be valid")
}

fn school(name: &str, lat: f64, lon: f64) -> SchoolRecord {
    SchoolRecord::create(
        name,
        NewSchool {
            name: name.to_string(),
            address: format!("{} Street", name),
            location: point(lat, lon),
        },
    )
}

// =============================================================================
// Ranker Properties
// =============================================================================

#[test]
fn test_rank_preserves_length() {
    let records: Vec<_> = (0..25)
        .map(|i| school(&format!("s{}", i), f64::from(i) - 12.0, f64::from(i * 3) - 36.0))
        .collect();

    let ranked = rank_by_distance(point(5.0, 5.0), records);
    assert_eq!(ranked.len(), 25);
}

#[test]
fn test_rank_empty_input() {
    assert!(rank_by_distance(point(0.0, 0.0), Vec::new()).is_empty());
}

#[test]
fn test_self_distance_is_zero() {
    let p = point(-33.8688, 151.2093);
    assert!(haversine_km(p, p).abs() < 1e-9);
}

#[test]
fn test_distance_symmetric() {
    let a = point(40.7128, -74.0060);
    let b = point(34.0522, -118.2437);
    assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
}

#[test]
fn test_known_distances_rank_ascending() {
    // d1 < d2 < d3 from the reference point
    let records = vec![
        school("d3", 30.0, 30.0),
        school("d1", 1.0, 1.0),
        school("d2", 10.0, 10.0),
    ];

    let ranked = rank_by_distance(point(0.0, 0.0), records);

    let names: Vec<_> = ranked.iter().map(|r| r.school.name.as_str()).collect();
    assert_eq!(names, vec!["d1", "d2", "d3"]);

    for pair in ranked.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
}

#[test]
fn test_origin_scenario() {
    // Reference (0,0); records at (0,0), (0,1), (1,0).
    // Ranked: co-located record first at ~0, then the two ~111.19 km records.
    let records = vec![
        school("north", 1.0, 0.0),
        school("origin", 0.0, 0.0),
        school("east", 0.0, 1.0),
    ];

    let ranked = rank_by_distance(point(0.0, 0.0), records);

    assert_eq!(ranked[0].school.name, "origin");
    assert!(ranked[0].distance.abs() < 1e-9);
    assert!((ranked[1].distance - 111.19).abs() < 0.05);
    assert!((ranked[2].distance - 111.19).abs() < 0.05);
}

#[test]
fn test_every_distance_non_negative() {
    let records = vec![
        school("a", 89.0, 179.0),
        school("b", -89.0, -179.0),
        school("c", 0.0, 0.0),
    ];
    for ranked in rank_by_distance(point(45.0, -45.0), records) {
        assert!(ranked.distance >= 0.0);
    }
}

// =============================================================================
// Store Round-Trip
// =============================================================================

#[test]
fn test_insert_then_list_round_trip() {
    let store = MemorySchoolStore::new();

    store
        .insert(NewSchool {
            name: "Elsewhere School".to_string(),
            address: "1 Far Road".to_string(),
            location: point(40.0, -3.0),
        })
        .unwrap();
    let target = store
        .insert(NewSchool {
            name: "Target School".to_string(),
            address: "2 Near Lane".to_string(),
            location: point(-12.05, -77.04),
        })
        .unwrap();

    // List with the target's own coordinates as the reference point
    let ranked = rank_by_distance(target.location(), store.fetch_all().unwrap());

    assert_eq!(ranked[0].school.id, target.id);
    assert!(ranked[0].distance.abs() < 1e-9);
}
