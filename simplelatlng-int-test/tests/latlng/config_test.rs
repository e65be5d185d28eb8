//! Integration tests for the global Earth radius configuration.

use simplelatlng::tool::distance;
use simplelatlng::window::{length_to_latitude_delta, CircularWindow};
use simplelatlng::{LatLngConfig, LatLngError, LengthUnit, EARTH_MEAN_RADIUS_KILOMETERS};
use simplelatlng_int_test::test_util::{
    assert_close, cleanup, create_test_context, create_test_context_with_radius, point, run_test,
};

#[test]
fn test_default_configuration() {
    run_test(
        create_test_context,
        |ctx| {
            assert_eq!(
                ctx.config().earth_radius(LengthUnit::Kilometer),
                EARTH_MEAN_RADIUS_KILOMETERS
            );
            assert_eq!(ctx.config(), &LatLngConfig::default());
            assert_eq!(LatLngConfig::global().as_ref(), ctx.config());
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_radius_is_available_in_every_unit() {
    let config = LatLngConfig::default();
    for unit in LengthUnit::ALL {
        assert_close(
            config.earth_radius(unit),
            LengthUnit::Kilometer.convert_to(unit, EARTH_MEAN_RADIUS_KILOMETERS),
            1e-9,
        );
    }
    assert_close(config.earth_radius(LengthUnit::NauticalMile), 3440.069, 0.001);
}

#[test]
fn test_invalid_radius_is_rejected() {
    for radius in [0.0, -6371.0, f64::NAN, f64::NEG_INFINITY] {
        match LatLngConfig::with_earth_radius(radius, LengthUnit::Kilometer) {
            Err(LatLngError::InvalidConfig(message)) => assert!(message.contains("km")),
            other => panic!("expected invalid config for {}, got {:?}", radius, other),
        }
    }
}

#[test]
fn test_swapping_radius_affects_later_calls_only() {
    run_test(
        || create_test_context_with_radius(1.0, LengthUnit::Kilometer),
        |ctx| {
            let a = point(0.0, 0.0);
            let b = point(0.0, 90.0);
            assert_close(
                distance(&a, &b, LengthUnit::Kilometer),
                std::f64::consts::FRAC_PI_2,
                1e-12,
            );

            let held = LatLngConfig::global();
            LatLngConfig::set_global(LatLngConfig::with_earth_radius(2.0, LengthUnit::Kilometer)?);
            assert_close(distance(&a, &b, LengthUnit::Kilometer), std::f64::consts::PI, 1e-12);
            assert_eq!(held.earth_radius(LengthUnit::Kilometer), 1.0);
            assert_eq!(ctx.config().earth_radius(LengthUnit::Kilometer), 1.0);

            LatLngConfig::reset_global();
            assert_eq!(LatLngConfig::global().as_ref(), &LatLngConfig::default());
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_length_windows_follow_configuration() {
    run_test(
        || create_test_context_with_radius(180.0 / std::f64::consts::PI, LengthUnit::Kilometer),
        |_ctx| {
            // one kilometer per degree
            assert_close(length_to_latitude_delta(5.0, LengthUnit::Kilometer), 5.0, 1e-12);
            let window = CircularWindow::with_length(point(0.0, 0.0), 10.0, LengthUnit::Kilometer)?;
            assert_eq!(window.radius(), 10.0);
            assert_close(window.radius_in(LengthUnit::Meter), 10_000.0, 1e-6);
            Ok(())
        },
        cleanup,
    );
}

#[test]
fn test_cleanup_restores_previous_configuration() {
    run_test(
        || create_test_context_with_radius(42.0, LengthUnit::Mile),
        |_ctx| {
            assert_eq!(LatLngConfig::global().earth_radius(LengthUnit::Mile), 42.0);
            Ok(())
        },
        cleanup,
    );
    run_test(
        create_test_context,
        |_ctx| {
            assert_eq!(
                LatLngConfig::global().earth_radius(LengthUnit::Kilometer),
                EARTH_MEAN_RADIUS_KILOMETERS
            );
            Ok(())
        },
        cleanup,
    );
}
