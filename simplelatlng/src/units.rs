//! Length units used by distance calculations and length-based windows.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A unit of length, defined by how many of it make up one kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Mile,
    NauticalMile,
    Rod,
}

impl LengthUnit {
    /// The unit every scale factor is relative to.
    pub const PRIMARY: LengthUnit = LengthUnit::Kilometer;

    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Mile,
        LengthUnit::NauticalMile,
        LengthUnit::Rod,
    ];

    /// Units of `self` per kilometer.
    pub const fn scale_factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1000.0,
            LengthUnit::Kilometer => 1.0,
            LengthUnit::Mile => 0.621_371_2,
            LengthUnit::NauticalMile => 0.539_956_8,
            LengthUnit::Rod => 198.838_781_5,
        }
    }

    /// Converts `value`, measured in `self`, to `to`.
    pub fn convert_to(self, to: LengthUnit, value: f64) -> f64 {
        if self == to {
            return value;
        }
        let primary = if self == Self::PRIMARY {
            value
        } else {
            value / self.scale_factor()
        };
        primary * to.scale_factor()
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            LengthUnit::Meter => 0,
            LengthUnit::Kilometer => 1,
            LengthUnit::Mile => 2,
            LengthUnit::NauticalMile => 3,
            LengthUnit::Rod => 4,
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Mile => "mi",
            LengthUnit::NauticalMile => "nmi",
            LengthUnit::Rod => "rd",
        };
        f.write_str(name)
    }
}
