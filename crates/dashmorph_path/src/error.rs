//! Path error types

use thiserror::Error;

/// Errors that can occur when reading SVG path data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Malformed path data string
    #[error("Path data parsing error: {0}")]
    Parse(String),
}

impl From<svgtypes::Error> for PathError {
    fn from(e: svgtypes::Error) -> Self {
        PathError::Parse(e.to_string())
    }
}
