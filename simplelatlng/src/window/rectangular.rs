use log::trace;
use serde::{Deserialize, Serialize};

use crate::degree::FixedDegree;
use crate::errors::{LatLngError, LatLngResult};
use crate::latlng::{normalize_latitude, normalize_longitude, normalize_longitude_micros, LatLng};
use crate::units::LengthUnit;
use crate::window::{
    latitude_delta_to_length, length_to_latitude_delta, length_to_longitude_delta,
    longitude_delta_to_length, LatLngWindow,
};

/// A window bounded by two parallels and two meridians.
///
/// Longitude is measured eastward from the left edge, so a window whose
/// left edge is east of its right edge wraps across the antimeridian.
///
/// ## Example
///
/// ```rust
/// use simplelatlng::window::{LatLngWindow, RectangularWindow};
/// use simplelatlng::LatLng;
///
/// let window = RectangularWindow::new(LatLng::new(45.0, -67.5).unwrap(), 30.0, 45.0).unwrap();
/// assert_eq!(window.left_longitude(), -90.0);
/// assert_eq!(window.right_longitude(), -45.0);
/// assert!(window.contains(&LatLng::new(30.0, -405.0).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RectangularWindowRepr", into = "RectangularWindowRepr")]
pub struct RectangularWindow {
    center: LatLng,
    latitude_delta: FixedDegree,
    longitude_delta: FixedDegree,
    min_latitude: FixedDegree,
    max_latitude: FixedDegree,
    left_longitude: FixedDegree,
    right_longitude: FixedDegree,
    // eastward extent from the left edge; THREE_SIXTY covers every longitude
    longitude_span: FixedDegree,
    crosses_antimeridian: bool,
}

#[derive(Serialize, Deserialize)]
struct RectangularWindowRepr {
    center: LatLng,
    latitude_delta: f64,
    longitude_delta: f64,
}

impl TryFrom<RectangularWindowRepr> for RectangularWindow {
    type Error = LatLngError;

    fn try_from(repr: RectangularWindowRepr) -> Result<Self, Self::Error> {
        RectangularWindow::new(repr.center, repr.latitude_delta, repr.longitude_delta)
    }
}

impl From<RectangularWindow> for RectangularWindowRepr {
    fn from(window: RectangularWindow) -> Self {
        RectangularWindowRepr {
            center: window.center,
            latitude_delta: window.latitude_delta(),
            longitude_delta: window.longitude_delta(),
        }
    }
}

impl RectangularWindow {
    /// Creates a window centered on `center` spanning the given degrees.
    ///
    /// # Arguments
    /// * `center` - the middle of the window
    /// * `latitude_delta` - total north-south extent, magnitude capped at 180
    /// * `longitude_delta` - total east-west extent, magnitude capped at 360
    ///
    /// # Errors
    /// Returns [`LatLngError::InvalidWindow`] if either delta is NaN or infinite.
    pub fn new(center: LatLng, latitude_delta: f64, longitude_delta: f64) -> LatLngResult<Self> {
        if !latitude_delta.is_finite() {
            return Err(LatLngError::InvalidWindow(format!(
                "invalid latitude delta: {}",
                latitude_delta
            )));
        }
        if !longitude_delta.is_finite() {
            return Err(LatLngError::InvalidWindow(format!(
                "invalid longitude delta: {}",
                longitude_delta
            )));
        }

        let latitude_delta = latitude_delta.abs().min(180.0);
        let longitude_delta = longitude_delta.abs().min(360.0);

        let center_lat = center.latitude();
        let max_latitude = fixed(normalize_latitude(center_lat + latitude_delta / 2.0))?;
        let min_latitude = fixed(normalize_latitude(center_lat - latitude_delta / 2.0))?;

        let center_lng = center.longitude();
        let raw_right = center_lng + longitude_delta / 2.0;
        let raw_left = center_lng - longitude_delta / 2.0;
        let crosses_antimeridian = raw_right > 180.0 || raw_left < -180.0;
        let right_longitude = wrapped(normalize_longitude(raw_right))?;
        let left_longitude = wrapped(normalize_longitude(raw_left))?;

        let latitude_delta = fixed(latitude_delta)?;
        let longitude_delta = fixed(longitude_delta)?;
        let mut longitude_span = (right_longitude - left_longitude).wrap_positive();
        // Both edges can round onto the same meridian when the gap between
        // them is below a micro-degree.
        if longitude_delta >= FixedDegree::THREE_SIXTY
            || (longitude_span == FixedDegree::ZERO && longitude_delta > FixedDegree::ONE_EIGHTY)
        {
            longitude_span = FixedDegree::THREE_SIXTY;
        }

        trace!(
            "Rectangular window around {}: latitude [{}, {}], longitude {} + {}",
            center,
            min_latitude,
            max_latitude,
            left_longitude,
            longitude_span
        );

        Ok(Self {
            center,
            latitude_delta,
            longitude_delta,
            min_latitude,
            max_latitude,
            left_longitude,
            right_longitude,
            longitude_span,
            crosses_antimeridian,
        })
    }

    /// Creates a window from surface lengths.
    ///
    /// The longitude delta is derived along the parallel through the center.
    pub fn with_lengths(
        center: LatLng,
        width: f64,
        height: f64,
        unit: LengthUnit,
    ) -> LatLngResult<Self> {
        let latitude_delta = length_to_latitude_delta(height, unit);
        let longitude_delta = length_to_longitude_delta(width, unit, center.latitude());
        Self::new(center, latitude_delta, longitude_delta)
    }

    /// Creates a square window from a single surface length.
    pub fn with_size(center: LatLng, size: f64, unit: LengthUnit) -> LatLngResult<Self> {
        Self::with_lengths(center, size, size, unit)
    }

    /// Creates the window spanned by its north-east and south-west corners.
    ///
    /// The window runs eastward from the south-west corner, so corners on
    /// opposite sides of the antimeridian produce a wrapping window.
    ///
    /// # Errors
    /// Returns [`LatLngError::InvalidWindow`] if the north-east corner lies
    /// south of the south-west corner, or if either corner is a pole.
    pub fn from_corners(northeast: LatLng, southwest: LatLng) -> LatLngResult<Self> {
        if northeast.is_polar() || southwest.is_polar() {
            return Err(LatLngError::InvalidWindow(format!(
                "corners cannot be polar: {} {}",
                northeast, southwest
            )));
        }
        if northeast.latitude_fixed() < southwest.latitude_fixed() {
            return Err(LatLngError::InvalidWindow(format!(
                "north-east corner {} is south of south-west corner {}",
                northeast, southwest
            )));
        }

        let latitude_delta = northeast.latitude() - southwest.latitude();
        let longitude_delta =
            (northeast.longitude_fixed() - southwest.longitude_fixed()).wrap_positive();
        let center = LatLng::new(
            (northeast.latitude() + southwest.latitude()) / 2.0,
            southwest.longitude() + longitude_delta.degrees() / 2.0,
        )
        .map_err(LatLngError::into_window)?;
        Self::new(center, latitude_delta, longitude_delta.degrees())
    }

    pub fn min_latitude(&self) -> f64 {
        self.min_latitude.degrees()
    }

    pub fn max_latitude(&self) -> f64 {
        self.max_latitude.degrees()
    }

    /// Western edge.
    pub fn left_longitude(&self) -> f64 {
        self.left_longitude.degrees()
    }

    /// Eastern edge.
    pub fn right_longitude(&self) -> f64 {
        self.right_longitude.degrees()
    }

    pub fn latitude_delta(&self) -> f64 {
        self.latitude_delta.degrees()
    }

    pub fn longitude_delta(&self) -> f64 {
        self.longitude_delta.degrees()
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.crosses_antimeridian
    }

    /// North-south extent along the surface.
    pub fn height(&self, unit: LengthUnit) -> f64 {
        latitude_delta_to_length(self.latitude_delta.degrees(), unit)
    }

    /// East-west extent along the parallel through the center.
    pub fn width(&self, unit: LengthUnit) -> f64 {
        longitude_delta_to_length(
            self.longitude_delta.degrees(),
            unit,
            self.center.latitude(),
        )
    }

    fn offset_from_left(&self, longitude: FixedDegree) -> FixedDegree {
        (longitude - self.left_longitude).wrap_positive()
    }
}

impl LatLngWindow for RectangularWindow {
    fn center(&self) -> LatLng {
        self.center
    }

    fn contains(&self, point: &LatLng) -> bool {
        let latitude = point.latitude_fixed();
        if latitude < self.min_latitude || latitude > self.max_latitude {
            return false;
        }
        self.offset_from_left(point.longitude_fixed()) <= self.longitude_span
    }

    fn overlaps(&self, other: &RectangularWindow) -> bool {
        if other.max_latitude < self.min_latitude || other.min_latitude > self.max_latitude {
            return false;
        }
        self.offset_from_left(other.left_longitude) <= self.longitude_span
            || other.offset_from_left(self.left_longitude) <= other.longitude_span
    }
}

fn fixed(degrees: f64) -> LatLngResult<FixedDegree> {
    FixedDegree::from_degrees(degrees).map_err(LatLngError::into_window)
}

fn wrapped(longitude: f64) -> LatLngResult<FixedDegree> {
    let longitude = fixed(longitude)?;
    Ok(FixedDegree::from_micros(normalize_longitude_micros(
        longitude.micros(),
    )))
}
