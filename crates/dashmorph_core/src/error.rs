//! Core error types

use thiserror::Error;

/// Errors returned by line collection edit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// The collection already holds the maximum number of lines
    #[error("Line limit reached: at most {max} lines are allowed")]
    LimitReached { max: usize },

    /// The collection holds the minimum number of lines
    #[error("Cannot remove line: at least {min} line(s) must remain")]
    MinimumReached { min: usize },

    /// Line index outside the collection
    #[error("Line index {index} out of range (collection has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    /// Point index outside the selected point list
    #[error("Point index {index} out of range (state has {len} points)")]
    PointOutOfRange { index: usize, len: usize },

    /// Removing the point would leave the state undrawable
    #[error("A state needs at least {min} anchor points")]
    TooFewAnchors { min: usize },
}

/// Errors returned when building output configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Class name is not a valid CSS identifier
    #[error("Invalid class name '{name}': {reason}")]
    InvalidClassName { name: String, reason: &'static str },

    /// Size value is not a positive finite number
    #[error("Invalid {field}: {value} (must be a positive number)")]
    InvalidSize { field: &'static str, value: f64 },

    /// Unknown toggle method name
    #[error("Unknown method '{0}' (expected 'checkbox' or 'class')")]
    UnknownMethod(String),

    /// Unknown line state name
    #[error("Unknown state '{0}' (expected 'menu' or 'close')")]
    UnknownState(String),
}
