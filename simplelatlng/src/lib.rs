//! # SimpleLatLng - Fixed-Precision Geographic Coordinates
//!
//! This crate provides latitude/longitude values whose equality, hashing and
//! spatial predicates all agree at micro-degree precision, together with a
//! geohash codec and circular and rectangular windows built on the same
//! numeric model.
//!
//! ## Features
//!
//! - **Fixed-Point Degrees**: Angles compared as whole micro-degrees
//! - **Canonical Coordinates**: Latitude clamped at the poles, longitude wrapped into `(-180, 180]`
//! - **Geohash Codec**: 12-character hashes that decode back to the exact micro-degree
//! - **Spatial Windows**: Circular and rectangular regions, antimeridian aware
//! - **Great-Circle Tools**: Haversine distance, bearings and destination points
//! - **Configurable Earth Radius**: Swappable global snapshot or explicit configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use simplelatlng::window::{CircularWindow, LatLngWindow};
//! use simplelatlng::{geohash, tool, LatLng, LengthUnit};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let start = LatLng::new(33.45, -112.067)?;
//! let end = geohash::decode("9whpwp8znzw2")?;
//!
//! let miles = tool::distance(&start, &end, LengthUnit::Mile);
//! assert!(miles > 300.0 && miles < 340.0);
//!
//! let window = CircularWindow::with_length(start, 400.0, LengthUnit::Mile)?;
//! assert!(window.contains(&end));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod degree;
pub mod errors;
pub mod geohash;
pub mod latlng;
pub mod tool;
pub mod units;
pub mod window;

pub use config::{LatLngConfig, EARTH_MEAN_RADIUS_KILOMETERS};
pub use degree::{degrees_equal, radians_equal, to_fixed, to_float, FixedDegree, DEGREE_TOLERANCE};
pub use errors::{LatLngError, LatLngResult};
pub use latlng::{normalize_latitude, normalize_longitude, LatLng};
pub use units::LengthUnit;
pub use window::{CircularWindow, LatLngWindow, RectangularWindow, Window};
