use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::degree::{to_fixed, FixedDegree};
use crate::errors::{LatLngError, LatLngResult};
use crate::latlng::LatLng;
use crate::tool::angular_distance_degrees;
use crate::units::LengthUnit;
use crate::window::{latitude_delta_to_length, length_to_latitude_delta, LatLngWindow};

/// A window bounded by a great-circle radius around its center.
///
/// The radius is an angle, so a window of radius 20 around the north pole
/// covers every point at latitude 70 or above.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CircularWindowRepr", into = "CircularWindowRepr")]
pub struct CircularWindow {
    center: LatLng,
    radius: FixedDegree,
}

#[derive(Serialize, Deserialize)]
struct CircularWindowRepr {
    center: LatLng,
    radius: f64,
}

impl TryFrom<CircularWindowRepr> for CircularWindow {
    type Error = LatLngError;

    fn try_from(repr: CircularWindowRepr) -> Result<Self, Self::Error> {
        CircularWindow::new(repr.center, repr.radius)
    }
}

impl From<CircularWindow> for CircularWindowRepr {
    fn from(window: CircularWindow) -> Self {
        CircularWindowRepr {
            center: window.center,
            radius: window.radius(),
        }
    }
}

impl CircularWindow {
    /// Creates a window from a radius in degrees.
    ///
    /// The magnitude of the radius is used, capped at 360 degrees.
    ///
    /// # Errors
    /// Returns [`LatLngError::InvalidWindow`] if the radius is NaN.
    pub fn new(center: LatLng, radius_degrees: f64) -> LatLngResult<Self> {
        if radius_degrees.is_nan() {
            return Err(LatLngError::InvalidWindow(
                "radius must be a number".to_string(),
            ));
        }
        let radius = FixedDegree::from_degrees(radius_degrees.abs().min(360.0))
            .map_err(LatLngError::into_window)?;
        Ok(Self { center, radius })
    }

    /// Creates a window from a radius measured along the surface.
    pub fn with_length(center: LatLng, radius: f64, unit: LengthUnit) -> LatLngResult<Self> {
        Self::new(center, length_to_latitude_delta(radius, unit))
    }

    /// Radius in degrees.
    pub fn radius(&self) -> f64 {
        self.radius.degrees()
    }

    /// Radius measured along the surface.
    pub fn radius_in(&self, unit: LengthUnit) -> f64 {
        latitude_delta_to_length(self.radius.degrees(), unit)
    }

    pub fn radius_fixed(&self) -> FixedDegree {
        self.radius
    }

    /// Like [`LatLngWindow::filter_copy`], ordered by distance from the
    /// center. Elements at equal distance keep their original order.
    pub fn filter_copy_sort<'a, E, F>(&self, items: &'a [E], location: F) -> Vec<&'a E>
    where
        F: Fn(&E) -> &LatLng,
    {
        let mut found: Vec<(f64, &'a E)> = items
            .iter()
            .filter_map(|item| {
                let distance = angular_distance_degrees(&self.center, location(item));
                self.within(distance).then_some((distance, item))
            })
            .collect();
        found.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        found.into_iter().map(|(_, item)| item).collect()
    }

    fn within(&self, distance_degrees: f64) -> bool {
        match to_fixed(distance_degrees) {
            Ok(distance) => distance <= self.radius.micros(),
            Err(_) => false,
        }
    }
}

impl LatLngWindow for CircularWindow {
    fn center(&self) -> LatLng {
        self.center
    }

    fn contains(&self, point: &LatLng) -> bool {
        self.within(angular_distance_degrees(&self.center, point))
    }

    fn overlaps(&self, other: &CircularWindow) -> bool {
        match to_fixed(angular_distance_degrees(&self.center, &other.center)) {
            Ok(distance) => distance <= (self.radius + other.radius).micros(),
            Err(_) => false,
        }
    }
}
