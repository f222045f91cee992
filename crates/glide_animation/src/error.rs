//! Animation error types

use thiserror::Error;

/// Errors raised while constructing animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Duration must be finite and strictly positive
    #[error("Invalid animation duration: {0} (must be finite and > 0 seconds)")]
    InvalidDuration(f32),
}

/// Errors raised while parsing easing names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EasingParseError {
    /// No curve with this name exists
    #[error("Unknown easing function: {0}")]
    Unknown(String),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
