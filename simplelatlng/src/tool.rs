//! Great-circle calculations on a spherical Earth.
//!
//! Functions that return a length read the Earth radius from the global
//! [`LatLngConfig`] snapshot. The `*_with` variants take an explicit
//! configuration instead.

use crate::config::LatLngConfig;
use crate::errors::{LatLngError, LatLngResult};
use crate::latlng::LatLng;
use crate::units::LengthUnit;

/// Central angle between two points, in radians (haversine).
pub fn distance_in_radians(point1: &LatLng, point2: &LatLng) -> f64 {
    let lat1 = point1.latitude_radians();
    let lat2 = point2.latitude_radians();
    let d_lat = (lat2 - lat1).abs();
    let d_lng = (point2.longitude() - point1.longitude()).to_radians().abs();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Central angle between two points, in degrees.
pub fn angular_distance_degrees(point1: &LatLng, point2: &LatLng) -> f64 {
    distance_in_radians(point1, point2).to_degrees()
}

/// Great-circle distance using the global Earth radius.
pub fn distance(point1: &LatLng, point2: &LatLng, unit: LengthUnit) -> f64 {
    distance_with(point1, point2, unit, &LatLngConfig::global())
}

/// Great-circle distance using the radius in `config`.
pub fn distance_with(
    point1: &LatLng,
    point2: &LatLng,
    unit: LengthUnit,
    config: &LatLngConfig,
) -> f64 {
    distance_in_radians(point1, point2) * config.earth_radius(unit)
}

/// Converts a surface distance to the central angle it subtends, in degrees.
pub fn distance_to_degrees(distance: f64, unit: LengthUnit) -> f64 {
    distance_to_degrees_with(distance, unit, &LatLngConfig::global())
}

pub fn distance_to_degrees_with(distance: f64, unit: LengthUnit, config: &LatLngConfig) -> f64 {
    (distance / config.earth_radius(unit)).to_degrees()
}

/// Initial bearing from `start` towards `end`, in radians within `(-π, π]`.
pub fn initial_bearing_in_radians(start: &LatLng, end: &LatLng) -> f64 {
    let lat1 = start.latitude_radians();
    let lat2 = end.latitude_radians();
    let d_lng = (end.longitude() - start.longitude()).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    y.atan2(x)
}

/// Initial bearing from `start` towards `end`, in degrees within `[0, 360)`.
pub fn initial_bearing(start: &LatLng, end: &LatLng) -> f64 {
    normalize_bearing(initial_bearing_in_radians(start, end).to_degrees())
}

/// Reduces a bearing to `[0, 360)`. NaN and infinities yield NaN.
pub fn normalize_bearing(bearing: f64) -> f64 {
    if !bearing.is_finite() {
        return f64::NAN;
    }
    let reduced = bearing % 360.0;
    if reduced < 0.0 {
        reduced + 360.0
    } else {
        reduced
    }
}

/// The point reached by travelling `distance` from `start` along the great
/// circle with the given initial bearing (degrees clockwise from north).
///
/// # Errors
/// Returns [`LatLngError::InvalidCoordinate`] when the bearing or distance
/// is not finite.
pub fn travel(
    start: &LatLng,
    bearing: f64,
    distance: f64,
    unit: LengthUnit,
) -> LatLngResult<LatLng> {
    travel_with(start, bearing, distance, unit, &LatLngConfig::global())
}

pub fn travel_with(
    start: &LatLng,
    bearing: f64,
    distance: f64,
    unit: LengthUnit,
    config: &LatLngConfig,
) -> LatLngResult<LatLng> {
    if !bearing.is_finite() || !distance.is_finite() {
        return Err(LatLngError::InvalidCoordinate(format!(
            "cannot travel {} {} on bearing {}",
            distance, unit, bearing
        )));
    }

    let angle = distance / config.earth_radius(unit);
    let theta = bearing.to_radians();
    let lat1 = start.latitude_radians();
    let lng1 = start.longitude_radians();

    let lat2 = (lat1.sin() * angle.cos() + lat1.cos() * angle.sin() * theta.cos()).asin();
    let lng2 = lng1
        + (theta.sin() * angle.sin() * lat1.cos()).atan2(angle.cos() - lat1.sin() * lat2.sin());
    LatLng::new(lat2.to_degrees(), lng2.to_degrees())
}
