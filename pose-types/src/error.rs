//! Error types for pose data.

use thiserror::Error;

/// Errors that can occur when working with pose data.
#[derive(Debug, Error)]
pub enum PoseError {
    /// A quaternion with (near-)zero norm cannot be normalized.
    #[error("quaternion has zero norm")]
    ZeroNormQuaternion,

    /// A value expected to be finite was NaN or infinite.
    #[error("non-finite value: {context}")]
    NonFinite {
        /// Where the non-finite value was found.
        context: String,
    },
}

impl PoseError {
    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(context: impl Into<String>) -> Self {
        Self::NonFinite {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PoseError::ZeroNormQuaternion;
        assert!(err.to_string().contains("zero norm"));

        let err = PoseError::non_finite("blended yaw");
        assert!(err.to_string().contains("non-finite"));
        assert!(err.to_string().contains("blended yaw"));
    }
}
