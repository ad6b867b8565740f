//! City-directory error type.

use thiserror::Error;

/// Errors produced by `nav-cities`.
#[derive(Debug, Error)]
pub enum CityError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type CityResult<T> = Result<T, CityError>;
