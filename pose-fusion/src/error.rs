//! Error types for pose-fusion crate.

use thiserror::Error;

/// Errors that can occur when building a fusion source.
#[derive(Debug, Error)]
pub enum FusionError {
    /// Blend weight outside the accepted range.
    #[error("blend weight out of range: {alpha} not in [0, 1]")]
    InvalidAlpha {
        /// The rejected blend weight.
        alpha: f64,
    },

    /// Invalid device descriptor.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FusionError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Result type for fusion construction.
pub type Result<T> = std::result::Result<T, FusionError>;
