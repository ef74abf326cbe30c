//! Error types for the ocean grid.

use crate::Location;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Location {location} out of bounds for {height}x{width} grid")]
    OutOfBounds {
        location: Location,
        height: usize,
        width: usize,
    },

    #[error("Invalid grid dimensions: {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
