//! Integration tests for coordinate normalization and equality.

use simplelatlng::{
    degrees_equal, normalize_latitude, normalize_longitude, to_fixed, FixedDegree, LatLng,
    LatLngError,
};
use simplelatlng_int_test::test_util::{point, random_points};
use std::collections::{HashMap, HashSet};

#[test]
fn test_antimeridian_wraparound() {
    assert_eq!(point(0.0, 190.0).longitude(), -170.0);
    assert_eq!(point(0.0, -190.0).longitude(), 170.0);
    assert_eq!(point(0.0, 1990.0).longitude(), -170.0);
    assert_eq!(point(0.0, -180.0).longitude(), 180.0);
    assert_eq!(point(0.0, 180.0).longitude(), 180.0);
}

#[test]
fn test_latitude_clamps_to_poles() {
    assert_eq!(point(91.0, 10.0), point(90.0, 0.0));
    assert_eq!(point(-1000.0, 10.0), point(-90.0, 0.0));
    assert_eq!(point(f64::INFINITY, 10.0), point(90.0, 0.0));
}

#[test]
fn test_pole_collapse_ignores_longitude() {
    let reference = point(90.0, 0.0);
    for lng in [-179.0, -45.0, 0.0, 33.3, 180.0, 7293.1298383] {
        assert_eq!(point(90.0, lng), reference);
        assert_eq!(point(90.0, lng).longitude_fixed(), FixedDegree::ZERO);
    }
    assert_eq!(
        LatLng::new(f64::NEG_INFINITY, f64::NAN).unwrap(),
        point(-90.0, 0.0)
    );
}

#[test]
fn test_invalid_coordinates_are_rejected() {
    let cases = [
        (f64::NAN, 0.0),
        (f64::NAN, f64::NAN),
        (0.0, f64::NAN),
        (45.0, f64::INFINITY),
        (-45.0, f64::NEG_INFINITY),
    ];
    for (lat, lng) in cases {
        assert!(
            matches!(LatLng::new(lat, lng), Err(LatLngError::InvalidCoordinate(_))),
            "({}, {})",
            lat,
            lng
        );
    }
}

#[test]
fn test_normalization_idempotence_over_random_inputs() {
    for p in random_points(17, 5_000) {
        let again = point(p.latitude(), p.longitude());
        assert_eq!(again, p);
        assert_eq!(normalize_latitude(p.latitude()), p.latitude());
        assert_eq!(normalize_longitude(p.longitude()), p.longitude());
    }
}

#[test]
fn test_equality_matches_degrees_equal() {
    let pairs = [
        (33.987123, 33.9871234, true),
        (33.987123, 33.9871239, false),
        (-0.0000004, 0.0, true),
        (12.3456781, 12.3456784, true),
        (12.3456784, 12.3456786, false),
    ];
    for (a, b, equal) in pairs {
        assert_eq!(degrees_equal(a, b), equal, "{} vs {}", a, b);
        assert_eq!(point(a, 0.0) == point(b, 0.0), equal, "{} vs {}", a, b);
        assert_eq!(point(0.0, a) == point(0.0, b), equal, "{} vs {}", a, b);
    }
}

#[test]
fn test_hash_agrees_with_equality() {
    let mut seen: HashMap<LatLng, usize> = HashMap::new();
    *seen.entry(point(10.0, 20.0)).or_default() += 1;
    *seen.entry(point(10.0000004, 20.0000004)).or_default() += 1;
    *seen.entry(point(10.0, 380.0)).or_default() += 1;
    *seen.entry(point(10.000001, 20.0)).or_default() += 1;
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[&point(10.0, 20.0)], 3);

    let poles: HashSet<LatLng> = [-30.0, 0.0, 150.0]
        .iter()
        .map(|&lng| point(90.0, lng))
        .collect();
    assert_eq!(poles.len(), 1);
}

#[test]
fn test_fixed_point_accessors() {
    let p = point(44.869797, -6.599944);
    assert_eq!(p.latitude_fixed().micros(), 44_869_797);
    assert_eq!(p.longitude_fixed().micros(), -6_599_944);
    assert_eq!(to_fixed(p.latitude()).unwrap(), 44_869_797);
}

#[test]
fn test_set_latitude_longitude_keeps_value_on_error() {
    let mut p = point(1.0, 2.0);
    let err = p.set_latitude_longitude(3.0, f64::INFINITY).unwrap_err();
    assert!(matches!(err, LatLngError::InvalidCoordinate(_)));
    assert_eq!(p, point(1.0, 2.0));

    p.set_latitude_longitude(-91.0, 55.0).unwrap();
    assert_eq!(p, point(-90.0, 0.0));
    assert!(p.is_polar());
}

#[test]
fn test_serde_revalidates_input() {
    let p: LatLng = serde_json::from_str(r#"{"latitude":45.0,"longitude":-472.067}"#).unwrap();
    assert_eq!(p, point(45.0, -112.067));

    let many: Vec<LatLng> = serde_json::from_str(
        r#"[{"latitude":0.0,"longitude":0.0},{"latitude":100.0,"longitude":12.0}]"#,
    )
    .unwrap();
    assert_eq!(many, vec![point(0.0, 0.0), point(90.0, 0.0)]);

    assert!(serde_json::from_str::<LatLng>(r#"{"latitude":"north","longitude":0.0}"#).is_err());
    assert!(serde_json::from_str::<LatLng>(r#"{"latitude":0.0}"#).is_err());
}

#[test]
fn test_display() {
    assert_eq!(point(0.0, 0.0).to_string(), "(0.000000,0.000000)");
    assert_eq!(point(-33.8688, 151.2093).to_string(), "(-33.868800,151.209300)");
    assert_eq!(point(0.0, -180.0).to_string(), "(0.000000,180.000000)");
}
