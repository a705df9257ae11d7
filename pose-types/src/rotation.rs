//! Orientation types for tracked devices.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PoseError;

/// A 3D orientation as a unit quaternion.
///
/// # Quaternion Convention
///
/// Stored as `[w, x, y, z]` where `w` is the scalar part. The quaternion
/// should be normalized (unit length). A rotation is interchangeable with
/// an (roll, pitch, yaw) Euler triple through the angle bridge in
/// `pose-fusion`; each axis is independently meaningful, because fused
/// rotations are assembled from one Euler component per source channel.
///
/// # Example
///
/// ```
/// use pose_types::Rotation;
///
/// let rotation = Rotation::identity();
/// assert_eq!(rotation.components(), [1.0, 0.0, 0.0, 0.0]);
/// assert!(rotation.is_normalized(1e-10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rotation {
    /// Unit quaternion: `[w, x, y, z]`.
    quat: [f64; 4],
}

impl Rotation {
    /// Creates a rotation from quaternion components `[w, x, y, z]`.
    ///
    /// The components are taken as-is; call [`Rotation::normalized`] if
    /// the input may not be unit length.
    #[must_use]
    pub const fn new(quat: [f64; 4]) -> Self {
        Self { quat }
    }

    /// Creates the identity rotation (no rotation).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            quat: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Returns the quaternion components `[w, x, y, z]`.
    #[must_use]
    pub const fn components(self) -> [f64; 4] {
        self.quat
    }

    /// Returns the quaternion norm (should be ~1.0 for valid rotations).
    #[must_use]
    pub fn norm(self) -> f64 {
        let [w, x, y, z] = self.quat;
        w.mul_add(w, x.mul_add(x, y.mul_add(y, z * z))).sqrt()
    }

    /// Normalizes the quaternion to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::ZeroNormQuaternion`] if the quaternion has
    /// (near-)zero length, and [`PoseError::NonFinite`] if any component
    /// is not a finite number.
    pub fn normalized(self) -> Result<Self, PoseError> {
        if !self.is_finite() {
            return Err(PoseError::non_finite("quaternion component"));
        }
        let norm = self.norm();
        if norm < 1e-10 {
            return Err(PoseError::ZeroNormQuaternion);
        }
        let [w, x, y, z] = self.quat;
        Ok(Self {
            quat: [w / norm, x / norm, y / norm, z / norm],
        })
    }

    /// Checks if the quaternion is approximately unit length.
    #[must_use]
    pub fn is_normalized(self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() < tolerance
    }

    /// Checks that every component is a finite number.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.quat.iter().all(|c| c.is_finite())
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

/// An incremental rotation with its elapsed time.
///
/// Represents integrated rotation since the previous sample of a fast
/// angular-rate stream. The yaw component of the incremental rotation is
/// consumed as an angular velocity by the complementary yaw filter.
///
/// # Example
///
/// ```
/// use pose_types::AngularRateSample;
///
/// let sample = AngularRateSample::zero();
/// assert_eq!(sample.dt, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngularRateSample {
    /// Rotation since the previous sample.
    pub delta: Rotation,
    /// Elapsed time covered by `delta`, in seconds.
    pub dt: f64,
}

impl AngularRateSample {
    /// Creates an angular-rate sample.
    #[must_use]
    pub const fn new(delta: Rotation, dt: f64) -> Self {
        Self { delta, dt }
    }

    /// Creates a zero sample (no rotation, no elapsed time).
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            delta: Rotation::identity(),
            dt: 0.0,
        }
    }
}

impl Default for AngularRateSample {
    fn default() -> Self {
        Self::zero()
    }
}
