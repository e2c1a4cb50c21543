// Error types: action decoding and track construction

use thiserror::Error;

/// Action Errors
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum ActionError {
    #[error("Action code {0} is outside the range 0-6")]
    OutOfRange(i64),
}

/// Track Errors
#[derive(Error, Debug, PartialEq, Copy, Clone)]
pub enum TrackError {
    #[error("Track geometry must be finite")]
    NonFinite,
    #[error("Inner radius must be positive, got {0}")]
    InvalidInnerRadius(f64),
    #[error("Inner radius {inner} must be smaller than outer radius {outer}")]
    InvalidRadii { inner: f64, outer: f64 },
}
