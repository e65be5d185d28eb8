//! Integration tests for great-circle distance, bearing and travel.

use simplelatlng::tool::{
    angular_distance_degrees, distance, distance_to_degrees, distance_with, initial_bearing,
    normalize_bearing, travel, travel_with,
};
use simplelatlng::{LatLngConfig, LatLngError, LengthUnit};
use simplelatlng_int_test::test_util::{
    assert_close, cleanup, create_test_context, create_test_context_with_radius, point,
    random_points, run_test,
};

#[test]
fn test_distance_between_cities() {
    run_test(
        create_test_context,
        |_ctx| {
            let phoenix = point(33.45, -112.067);
            let albuquerque = point(35.1108, -106.61);
            assert_close(
                distance(&phoenix, &albuquerque, LengthUnit::Kilometer),
                534.219,
                0.001,
            );
            assert_close(distance(&phoenix, &albuquerque, LengthUnit::Mile), 331.948, 0.001);

            let london = point(51.5074, -0.1278);
            let paris = point(48.8566, 2.3522);
            assert_close(distance(&london, &paris, LengthUnit::Kilometer), 343.557, 0.001);
            assert_close(
                distance(&london, &paris, LengthUnit::Meter),
                343_556.546,
                0.01,
            );
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_distance_is_symmetric_and_zero_on_self() {
    run_test(
        create_test_context,
        |_ctx| {
            let points = random_points(3, 200);
            for pair in points.windows(2) {
                let forward = distance(&pair[0], &pair[1], LengthUnit::Kilometer);
                let backward = distance(&pair[1], &pair[0], LengthUnit::Kilometer);
                assert_close(forward, backward, 1e-9);
                assert_eq!(distance(&pair[0], &pair[0], LengthUnit::Kilometer), 0.0);
            }
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_antipodal_distance_is_half_circumference() {
    run_test(
        create_test_context,
        |_ctx| {
            let half = distance(&point(0.0, 0.0), &point(0.0, 180.0), LengthUnit::Kilometer);
            assert_close(half, std::f64::consts::PI * 6371.009, 1e-6);
            assert_close(
                angular_distance_degrees(&point(90.0, 0.0), &point(-90.0, 0.0)),
                180.0,
                1e-9,
            );
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_custom_earth_radius_changes_lengths() {
    run_test(
        || create_test_context_with_radius(3958.8, LengthUnit::Mile),
        |ctx| {
            let phoenix = point(33.45, -112.067);
            let albuquerque = point(35.1108, -106.61);
            assert_eq!(ctx.config().earth_radius(LengthUnit::Mile), 3958.8);
            assert_close(distance(&phoenix, &albuquerque, LengthUnit::Mile), 331.952, 0.001);

            let default = LatLngConfig::default();
            assert_close(
                distance_with(&phoenix, &albuquerque, LengthUnit::Mile, &default),
                331.948,
                0.001,
            );
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_distance_to_degrees() {
    run_test(
        create_test_context,
        |_ctx| {
            assert_close(
                distance_to_degrees(100.0, LengthUnit::Kilometer),
                0.899320,
                1e-6,
            );
            assert_close(
                distance_to_degrees(100_000.0, LengthUnit::Meter),
                0.899320,
                1e-6,
            );
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_initial_bearing() {
    let london = point(51.5074, -0.1278);
    assert_close(initial_bearing(&london, &point(48.8566, 2.3522)), 148.116, 0.001);
    assert_close(initial_bearing(&london, &point(40.7128, -74.006)), 288.330, 0.001);
    assert_close(initial_bearing(&point(0.0, 0.0), &point(10.0, 0.0)), 0.0, 1e-9);
    assert_close(initial_bearing(&point(0.0, 0.0), &point(0.0, 10.0)), 90.0, 1e-9);
    assert_close(initial_bearing(&point(0.0, 0.0), &point(-10.0, 0.0)), 180.0, 1e-9);
    assert_close(initial_bearing(&point(0.0, 0.0), &point(0.0, -10.0)), 270.0, 1e-9);
}

#[test]
fn test_normalize_bearing() {
    assert_eq!(normalize_bearing(-90.0), 270.0);
    assert_eq!(normalize_bearing(720.0), 0.0);
    assert_eq!(normalize_bearing(45.0), 45.0);
    assert!(normalize_bearing(f64::NAN).is_nan());
    assert!(normalize_bearing(f64::INFINITY).is_nan());
}

#[test]
fn test_travel_reaches_destination() {
    run_test(
        create_test_context,
        |_ctx| {
            let phoenix = point(33.45, -112.067);
            let albuquerque = point(35.1108, -106.61);
            let bearing = initial_bearing(&phoenix, &albuquerque);
            let km = distance(&phoenix, &albuquerque, LengthUnit::Kilometer);
            let arrived = travel(&phoenix, bearing, km, LengthUnit::Kilometer)?;
            assert_eq!(arrived, albuquerque);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_travel_wraps_longitude() {
    run_test(
        create_test_context,
        |_ctx| {
            let one_degree = std::f64::consts::PI * 6371.009 / 180.0;

            let east = travel(&point(0.0, 179.5), 90.0, one_degree, LengthUnit::Kilometer)?;
            assert_eq!(east, point(0.0, -179.5));

            // crossing the pole flips to the opposite meridian
            let over = travel(&point(89.0, 10.0), 0.0, 2.0 * one_degree, LengthUnit::Kilometer)?;
            assert_eq!(over, point(89.0, -170.0));
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_travel_rejects_non_finite_input() {
    let config = LatLngConfig::default();
    let start = point(10.0, 10.0);
    for (bearing, length) in [(f64::NAN, 1.0), (90.0, f64::INFINITY), (f64::INFINITY, 1.0)] {
        assert!(matches!(
            travel_with(&start, bearing, length, LengthUnit::Kilometer, &config),
            Err(LatLngError::InvalidCoordinate(_))
        ));
    }
}
