//! Canonical latitude/longitude values.
//!
//! A [`LatLng`] always satisfies:
//! - latitude in `[-90, 90]`, clamped to the nearest pole on overflow
//! - longitude in `(-180, 180]`, reduced modulo 360
//! - longitude is zero at either pole
//!
//! Both components are stored as [`FixedDegree`] so equality and hashing
//! happen at micro-degree precision.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::degree::FixedDegree;
use crate::errors::{LatLngError, LatLngResult};

const FULL_TURN_MICROS: i64 = FixedDegree::THREE_SIXTY.micros();
const HALF_TURN_MICROS: i64 = FixedDegree::ONE_EIGHTY.micros();

/// Clamps a latitude to `[-90, 90]`. NaN stays NaN.
pub fn normalize_latitude(degrees: f64) -> f64 {
    if degrees.is_nan() {
        return f64::NAN;
    }
    degrees.clamp(-90.0, 90.0)
}

/// Reduces a longitude into `(-180, 180]`.
///
/// `-180` maps to `180`. NaN and infinities yield NaN.
pub fn normalize_longitude(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return f64::NAN;
    }
    let reduced = degrees % 360.0;
    if reduced > 180.0 {
        reduced - 360.0
    } else if reduced <= -180.0 {
        reduced + 360.0
    } else {
        reduced
    }
}

pub(crate) fn normalize_longitude_micros(micros: i64) -> i64 {
    let reduced = micros % FULL_TURN_MICROS;
    if reduced > HALF_TURN_MICROS {
        reduced - FULL_TURN_MICROS
    } else if reduced <= -HALF_TURN_MICROS {
        reduced + FULL_TURN_MICROS
    } else {
        reduced
    }
}

/// A point on the globe.
///
/// ## Example
///
/// ```rust
/// use simplelatlng::LatLng;
///
/// let point = LatLng::new(33.45, -472.067).unwrap();
/// assert_eq!(point.latitude(), 33.45);
/// assert_eq!(point.longitude(), -112.067);
///
/// // Longitude collapses at the poles.
/// let pole = LatLng::new(95.0, 42.0).unwrap();
/// assert_eq!(pole, LatLng::new(90.0, 0.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatLng {
    latitude: FixedDegree,
    longitude: FixedDegree,
}

#[derive(Serialize, Deserialize)]
struct LatLngRepr {
    latitude: f64,
    longitude: f64,
}

impl Serialize for LatLng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        LatLngRepr {
            latitude: self.latitude(),
            longitude: self.longitude(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LatLng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = LatLngRepr::deserialize(deserializer)?;
        LatLng::new(repr.latitude, repr.longitude).map_err(serde::de::Error::custom)
    }
}

impl LatLng {
    /// Creates a normalized point.
    ///
    /// # Arguments
    /// * `latitude` - degrees; values beyond a pole clamp to it, infinities included
    /// * `longitude` - degrees; any finite value is reduced into `(-180, 180]`
    ///
    /// # Errors
    /// Returns [`LatLngError::InvalidCoordinate`] when the latitude is NaN, or
    /// when the longitude is NaN or infinite and the point is not polar.
    pub fn new(latitude: f64, longitude: f64) -> LatLngResult<Self> {
        let (latitude, longitude) = Self::normalized(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a point directly from micro-degree components.
    ///
    /// Out of range values are normalized the same way [`LatLng::new`] does.
    pub fn from_fixed(latitude: FixedDegree, longitude: FixedDegree) -> Self {
        let latitude = FixedDegree::from_micros(
            latitude
                .micros()
                .clamp(-FixedDegree::NINETY.micros(), FixedDegree::NINETY.micros()),
        );
        let longitude = if latitude.abs() == FixedDegree::NINETY {
            FixedDegree::ZERO
        } else {
            FixedDegree::from_micros(normalize_longitude_micros(longitude.micros()))
        };
        Self {
            latitude,
            longitude,
        }
    }

    /// A point drawn uniformly from the latitude and longitude ranges.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let latitude = rng.gen_range(-FixedDegree::NINETY.micros()..=FixedDegree::NINETY.micros());
        let longitude = rng.gen_range(-HALF_TURN_MICROS + 1..=HALF_TURN_MICROS);
        Self::from_fixed(
            FixedDegree::from_micros(latitude),
            FixedDegree::from_micros(longitude),
        )
    }

    fn normalized(latitude: f64, longitude: f64) -> LatLngResult<(FixedDegree, FixedDegree)> {
        let lat = normalize_latitude(latitude);
        if lat.is_nan() {
            return Err(LatLngError::InvalidCoordinate(format!(
                "latitude must be a number, got {}",
                latitude
            )));
        }
        let lat = FixedDegree::from_degrees(lat).map_err(LatLngError::into_coordinate)?;
        if lat.abs() == FixedDegree::NINETY {
            return Ok((lat, FixedDegree::ZERO));
        }

        let lng = normalize_longitude(longitude);
        if lng.is_nan() {
            return Err(LatLngError::InvalidCoordinate(format!(
                "longitude must be a finite number, got {}",
                longitude
            )));
        }
        let lng = FixedDegree::from_degrees(lng).map_err(LatLngError::into_coordinate)?;
        // 179.9999996 rounds up to the excluded bound.
        let lng = FixedDegree::from_micros(normalize_longitude_micros(lng.micros()));
        Ok((lat, lng))
    }

    /// Replaces both components at once.
    ///
    /// On error the point keeps its previous value.
    pub fn set_latitude_longitude(&mut self, latitude: f64, longitude: f64) -> LatLngResult<()> {
        let (latitude, longitude) = Self::normalized(latitude, longitude)?;
        self.latitude = latitude;
        self.longitude = longitude;
        Ok(())
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude.degrees()
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude.degrees()
    }

    pub fn latitude_fixed(&self) -> FixedDegree {
        self.latitude
    }

    pub fn longitude_fixed(&self) -> FixedDegree {
        self.longitude
    }

    pub fn latitude_radians(&self) -> f64 {
        self.latitude().to_radians()
    }

    pub fn longitude_radians(&self) -> f64 {
        self.longitude().to_radians()
    }

    /// Whether the point sits exactly on a pole.
    pub fn is_polar(&self) -> bool {
        self.latitude.abs() == FixedDegree::NINETY
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.latitude, self.longitude)
    }
}
