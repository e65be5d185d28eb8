//! Process-wide configuration for distance calculations.
//!
//! The configuration is an immutable snapshot. Changing the Earth radius
//! builds a new snapshot and swaps it in, so a distance calculation that
//! already holds a snapshot keeps a consistent radius table for its whole
//! run.
//!
//! ```rust
//! use simplelatlng::{LatLngConfig, LengthUnit};
//!
//! let config = LatLngConfig::with_earth_radius(6378.137, LengthUnit::Kilometer).unwrap();
//! assert_eq!(config.earth_radius(LengthUnit::Meter), 6_378_137.0);
//! ```

use log::debug;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

use crate::errors::{LatLngError, LatLngResult};
use crate::units::LengthUnit;

/// The Earth's mean radius in kilometers.
pub const EARTH_MEAN_RADIUS_KILOMETERS: f64 = 6371.009;

/// Earth radius pre-computed in every supported unit.
#[derive(Debug, Clone, PartialEq)]
pub struct LatLngConfig {
    earth_radius: [f64; LengthUnit::ALL.len()],
}

impl Default for LatLngConfig {
    fn default() -> Self {
        Self::from_radius(EARTH_MEAN_RADIUS_KILOMETERS, LengthUnit::Kilometer)
    }
}

impl LatLngConfig {
    /// Creates a configuration for a sphere of the given radius.
    ///
    /// # Errors
    /// Returns [`LatLngError::InvalidConfig`] if the radius is not a positive
    /// finite number.
    pub fn with_earth_radius(radius: f64, unit: LengthUnit) -> LatLngResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(LatLngError::InvalidConfig(format!(
                "earth radius must be positive and finite, got {} {}",
                radius, unit
            )));
        }
        Ok(Self::from_radius(radius, unit))
    }

    fn from_radius(radius: f64, unit: LengthUnit) -> Self {
        let mut earth_radius = [0.0; LengthUnit::ALL.len()];
        for to in LengthUnit::ALL {
            earth_radius[to.index()] = unit.convert_to(to, radius);
        }
        Self { earth_radius }
    }

    /// Earth radius in the requested unit.
    pub fn earth_radius(&self, unit: LengthUnit) -> f64 {
        self.earth_radius[unit.index()]
    }

    /// The current process-wide snapshot.
    pub fn global() -> Arc<LatLngConfig> {
        global_slot().read().clone()
    }

    /// Replaces the process-wide snapshot.
    pub fn set_global(config: LatLngConfig) {
        debug!(
            "Setting global earth radius to {} km",
            config.earth_radius(LengthUnit::Kilometer)
        );
        *global_slot().write() = Arc::new(config);
    }

    /// Restores the mean Earth radius as the process-wide snapshot.
    pub fn reset_global() {
        Self::set_global(LatLngConfig::default());
    }
}

fn global_slot() -> &'static RwLock<Arc<LatLngConfig>> {
    static GLOBAL: OnceLock<RwLock<Arc<LatLngConfig>>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(Arc::new(LatLngConfig::default())))
}
