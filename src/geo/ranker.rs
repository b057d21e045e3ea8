//! Proximity ranking of school records
//!
//! Takes the store's unordered records and produces them in ascending
//! distance from a reference point. Stateless; ranked results are computed
//! fresh on every listing request and never cached.

use serde::Serialize;

use super::haversine::haversine_km;
use super::point::GeoPoint;
use crate::school::SchoolRecord;

/// A school record augmented with its distance from a query point.
///
/// Transient response type; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSchool {
    #[serde(flatten)]
    pub school: SchoolRecord,
    /// Great-circle distance from the reference point, in kilometers
    pub distance: f64,
}

/// Ranks records by great-circle distance from `reference`, ascending.
///
/// Length-preserving: every input record appears exactly once in the output.
/// The sort is stable, so records at equal distance keep their input order.
pub fn rank_by_distance(reference: GeoPoint, records: Vec<SchoolRecord>) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = records
        .into_iter()
        .map(|school| {
            let distance = haversine_km(reference, school.location());
            RankedSchool { school, distance }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::school::NewSchool;

    fn school(id: &str, lat: f64, lon: f64) -> SchoolRecord {
        SchoolRecord::create(
            id,
            NewSchool {
                name: format!("School {}", id),
                address: "1 Test Lane".to_string(),
                location: GeoPoint::new(lat, lon).unwrap(),
            },
        )
    }

    fn origin() -> GeoPoint {
        GeoPoint::new(0.0, 0.0).unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(rank_by_distance(origin(), vec![]).is_empty());
    }

    #[test]
    fn test_length_preserving() {
        let records = vec![
            school("a", 10.0, 10.0),
            school("b", -5.0, 3.0),
            school("c", 0.0, 0.0),
        ];
        let ranked = rank_by_distance(origin(), records);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_ascending_order() {
        let records = vec![
            school("far", 10.0, 10.0),
            school("near", 0.1, 0.1),
            school("mid", 2.0, 2.0),
        ];
        let ranked = rank_by_distance(origin(), records);

        assert_eq!(ranked[0].school.id, "near");
        assert_eq!(ranked[1].school.id, "mid");
        assert_eq!(ranked[2].school.id, "far");
        assert!(ranked[0].distance <= ranked[1].distance);
        assert!(ranked[1].distance <= ranked[2].distance);
    }

    #[test]
    fn test_spec_scenario_from_origin() {
        // Records at (0,0), (0,1), (1,0) from reference (0,0):
        // first is the co-located record, the other two tie at ~111.19 km
        let records = vec![
            school("east", 0.0, 1.0),
            school("here", 0.0, 0.0),
            school("north", 1.0, 0.0),
        ];
        let ranked = rank_by_distance(origin(), records);

        assert_eq!(ranked[0].school.id, "here");
        assert!(ranked[0].distance.abs() < 1e-9);
        assert!((ranked[1].distance - 111.19).abs() < 0.05);
        assert!((ranked[2].distance - 111.19).abs() < 0.05);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Two records at the same coordinates
        let records = vec![
            school("first", 1.0, 1.0),
            school("second", 1.0, 1.0),
            school("closest", 0.0, 0.0),
        ];
        let ranked = rank_by_distance(origin(), records);

        assert_eq!(ranked[0].school.id, "closest");
        assert_eq!(ranked[1].school.id, "first");
        assert_eq!(ranked[2].school.id, "second");
    }

    #[test]
    fn test_serializes_flat_with_distance() {
        let ranked = rank_by_distance(origin(), vec![school("a", 0.0, 0.0)]);
        let json = serde_json::to_value(&ranked[0]).unwrap();

        assert_eq!(json["id"], "a");
        assert_eq!(json["name"], "School a");
        assert!(json["distance"].is_number());
    }
}
