//! Spatial windows over the globe.
//!
//! A window is a region that answers two questions at micro-degree
//! precision: does it contain a point, and does it overlap another window of
//! the same shape.
//!
//! ## Features
//!
//! - **Circular windows**: great-circle radius around a center
//! - **Rectangular windows**: latitude/longitude spans that may wrap the antimeridian
//! - **Collection filtering**: retain or copy the elements that fall inside a window
//!
//! ## Example
//!
//! ```rust
//! use simplelatlng::window::{LatLngWindow, RectangularWindow};
//! use simplelatlng::LatLng;
//!
//! let window = RectangularWindow::new(LatLng::new(0.0, 180.0).unwrap(), 40.0, 20.0).unwrap();
//! assert!(window.crosses_antimeridian());
//! assert!(window.contains(&LatLng::new(0.0, -175.0).unwrap()));
//! assert!(!window.contains(&LatLng::new(0.0, 160.0).unwrap()));
//! ```

mod circular;
mod rectangular;

pub use circular::CircularWindow;
pub use rectangular::RectangularWindow;

use serde::{Deserialize, Serialize};

use crate::config::LatLngConfig;
use crate::latlng::LatLng;
use crate::units::LengthUnit;

/// Common behavior of every window shape.
pub trait LatLngWindow {
    fn center(&self) -> LatLng;

    /// Whether the point lies inside the window, boundary included.
    fn contains(&self, point: &LatLng) -> bool;

    /// Whether the two windows share at least one point.
    fn overlaps(&self, other: &Self) -> bool
    where
        Self: Sized;

    /// Removes every element whose location is outside the window.
    fn filter<E, F>(&self, items: &mut Vec<E>, location: F)
    where
        F: Fn(&E) -> &LatLng,
    {
        items.retain(|item| self.contains(location(item)));
    }

    /// Collects references to the elements whose location is inside the
    /// window, in their original order.
    fn filter_copy<'a, E, F>(&self, items: &'a [E], location: F) -> Vec<&'a E>
    where
        F: Fn(&E) -> &LatLng,
    {
        items
            .iter()
            .filter(|item| self.contains(location(item)))
            .collect()
    }
}

/// A window of either shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Window {
    Circular(CircularWindow),
    Rectangular(RectangularWindow),
}

impl Window {
    pub fn center(&self) -> LatLng {
        match self {
            Window::Circular(window) => window.center(),
            Window::Rectangular(window) => window.center(),
        }
    }

    pub fn contains(&self, point: &LatLng) -> bool {
        match self {
            Window::Circular(window) => window.contains(point),
            Window::Rectangular(window) => window.contains(point),
        }
    }

    /// Overlap test between windows of the same shape.
    ///
    /// Returns `None` when the shapes differ.
    pub fn overlaps(&self, other: &Window) -> Option<bool> {
        match (self, other) {
            (Window::Circular(a), Window::Circular(b)) => Some(a.overlaps(b)),
            (Window::Rectangular(a), Window::Rectangular(b)) => Some(a.overlaps(b)),
            _ => None,
        }
    }
}

impl From<CircularWindow> for Window {
    fn from(window: CircularWindow) -> Self {
        Window::Circular(window)
    }
}

impl From<RectangularWindow> for Window {
    fn from(window: RectangularWindow) -> Self {
        Window::Rectangular(window)
    }
}

/// Latitude span, in degrees, covered by a north-south length.
pub fn length_to_latitude_delta(length: f64, unit: LengthUnit) -> f64 {
    (length / LatLngConfig::global().earth_radius(unit)).to_degrees()
}

/// North-south length covered by a latitude span in degrees.
pub fn latitude_delta_to_length(delta: f64, unit: LengthUnit) -> f64 {
    LatLngConfig::global().earth_radius(unit) * delta.to_radians()
}

/// Longitude span, in degrees, covered by an east-west length measured along
/// the parallel at `latitude`.
pub fn length_to_longitude_delta(length: f64, unit: LengthUnit, latitude: f64) -> f64 {
    let radius = LatLngConfig::global().earth_radius(unit);
    (length / (radius * latitude.to_radians().cos())).to_degrees()
}

/// East-west length of a longitude span measured along the parallel at
/// `latitude`.
pub fn longitude_delta_to_length(delta: f64, unit: LengthUnit, latitude: f64) -> f64 {
    LatLngConfig::global().earth_radius(unit) * delta.to_radians() * latitude.to_radians().cos()
}
