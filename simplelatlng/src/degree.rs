//! Fixed-point degree arithmetic.
//!
//! Every angle that takes part in an equality, ordering or containment
//! decision is first converted to a signed count of micro-degrees. Two
//! angles are the same angle when their micro-degree counts match, which
//! keeps equality, hashing and the window predicates consistent with each
//! other.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::{Add, Neg, Sub};

use crate::errors::{LatLngError, LatLngResult};

/// Smallest distinguishable angle, in degrees.
pub const DEGREE_TOLERANCE: f64 = 1e-6;

/// Smallest distinguishable angle, in radians.
pub const RADIAN_TOLERANCE: f64 = DEGREE_TOLERANCE * std::f64::consts::PI / 180.0;

/// Micro-degrees per degree.
pub(crate) const MICROS_PER_DEGREE: i64 = 1_000_000;

/// An angle stored as whole micro-degrees.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FixedDegree(i64);

impl FixedDegree {
    pub const ZERO: FixedDegree = FixedDegree(0);
    pub const NINETY: FixedDegree = FixedDegree(90 * MICROS_PER_DEGREE);
    pub const ONE_EIGHTY: FixedDegree = FixedDegree(180 * MICROS_PER_DEGREE);
    pub const THREE_SIXTY: FixedDegree = FixedDegree(360 * MICROS_PER_DEGREE);

    /// Wraps a raw micro-degree count.
    pub const fn from_micros(micros: i64) -> Self {
        FixedDegree(micros)
    }

    /// Converts a floating point angle, failing on NaN or infinity.
    pub fn from_degrees(degrees: f64) -> LatLngResult<Self> {
        to_fixed(degrees).map(FixedDegree)
    }

    /// The raw micro-degree count.
    pub const fn micros(self) -> i64 {
        self.0
    }

    /// The angle in floating point degrees.
    pub fn degrees(self) -> f64 {
        to_float(self.0)
    }

    pub const fn abs(self) -> Self {
        FixedDegree(self.0.abs())
    }

    /// Reduces the angle into `[0, 360)`.
    pub const fn wrap_positive(self) -> Self {
        FixedDegree(self.0.rem_euclid(Self::THREE_SIXTY.0))
    }
}

impl Add for FixedDegree {
    type Output = FixedDegree;

    fn add(self, rhs: FixedDegree) -> FixedDegree {
        FixedDegree(self.0 + rhs.0)
    }
}

impl Sub for FixedDegree {
    type Output = FixedDegree;

    fn sub(self, rhs: FixedDegree) -> FixedDegree {
        FixedDegree(self.0 - rhs.0)
    }
}

impl Neg for FixedDegree {
    type Output = FixedDegree;

    fn neg(self) -> FixedDegree {
        FixedDegree(-self.0)
    }
}

impl Display for FixedDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let per_degree = MICROS_PER_DEGREE as u64;
        write!(
            f,
            "{}{}.{:06}",
            sign,
            magnitude / per_degree,
            magnitude % per_degree
        )
    }
}

/// Converts degrees to micro-degrees, rounding to the nearest whole unit.
///
/// # Errors
/// Returns [`LatLngError::InvalidDegree`] when `degrees` is NaN or infinite.
pub fn to_fixed(degrees: f64) -> LatLngResult<i64> {
    fixed_with_tolerance(degrees, DEGREE_TOLERANCE)
}

/// Converts micro-degrees back to floating point degrees.
pub fn to_float(fixed: i64) -> f64 {
    fixed as f64 / MICROS_PER_DEGREE as f64
}

/// Whether two angles in degrees are equal at micro-degree precision.
///
/// NaN and infinite operands are never equal to anything.
pub fn degrees_equal(a: f64, b: f64) -> bool {
    match (to_fixed(a), to_fixed(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Whether two angles in radians are equal at the radian equivalent of a
/// micro-degree.
pub fn radians_equal(a: f64, b: f64) -> bool {
    match (
        fixed_with_tolerance(a, RADIAN_TOLERANCE),
        fixed_with_tolerance(b, RADIAN_TOLERANCE),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn fixed_with_tolerance(value: f64, tolerance: f64) -> LatLngResult<i64> {
    if !value.is_finite() {
        return Err(LatLngError::InvalidDegree(format!(
            "cannot convert {} to fixed point",
            value
        )));
    }
    Ok((value / tolerance).round() as i64)
}
