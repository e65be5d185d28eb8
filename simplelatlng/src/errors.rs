use thiserror::Error;

/// Errors raised while building coordinates, windows or decoding geohashes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatLngError {
    #[error("Invalid degree value: {0}")]
    InvalidDegree(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid geohash: {0}")]
    InvalidGeohash(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LatLngError {
    /// Re-labels a degree conversion failure as a coordinate failure.
    ///
    /// Other variants pass through untouched.
    pub(crate) fn into_coordinate(self) -> Self {
        match self {
            LatLngError::InvalidDegree(msg) => LatLngError::InvalidCoordinate(msg),
            other => other,
        }
    }

    /// Re-labels a degree conversion failure as a window failure.
    pub(crate) fn into_window(self) -> Self {
        match self {
            LatLngError::InvalidDegree(msg) => LatLngError::InvalidWindow(msg),
            other => other,
        }
    }
}

pub type LatLngResult<T> = Result<T, LatLngError>;
