//! Coordinate-boundary error type.
//!
//! The geodesy math itself is total and never returns these; they arise only
//! from validating constructors such as [`GeoPoint::try_new`], which guard
//! the boundary where coordinates enter from user input or data files.
//!
//! [`GeoPoint::try_new`]: crate::GeoPoint::try_new

use thiserror::Error;

/// Errors produced when a coordinate fails range validation.
#[derive(Debug, Error)]
pub enum NavError {
    /// Latitude outside `[-90, 90]` or not finite.
    #[error("invalid latitude {0}: must be finite and within [-90, 90]")]
    InvalidLatitude(f64),

    /// Longitude outside `[-180, 180]` or not finite.
    #[error("invalid longitude {0}: must be finite and within [-180, 180]")]
    InvalidLongitude(f64),
}

/// Shorthand result type for validating operations.
pub type NavResult<T> = Result<T, NavError>;
