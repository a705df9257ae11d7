//! Angle utilities bridging per-axis scalars and 3D rotations.
//!
//! Fusion assembles one rotation from Euler components supplied by
//! independently-tracked channels, so the only rotation math it needs is
//! the canonical-range wrap and the Euler/quaternion bridge.

use std::f64::consts::{PI, TAU};

use glam::{DQuat, EulerRot};
use pose_types::Rotation;

/// Wraps an angle into the canonical range [-π, π].
///
/// Correct for multi-revolution inputs, not just small overshoot.
///
/// # Example
///
/// ```
/// use std::f64::consts::{PI, TAU};
/// use pose_fusion::wrap_angle;
///
/// assert!((wrap_angle(0.5) - 0.5).abs() < 1e-12);
/// assert!((wrap_angle(0.5 + 3.0 * TAU) - 0.5).abs() < 1e-9);
/// assert!(wrap_angle(PI + 0.1) < 0.0);
/// ```
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Builds a rotation from (roll, pitch, yaw) Euler angles in radians.
///
/// Uses ZYX (yaw-pitch-roll) rotation order. This function and
/// [`euler_from_rotation`] are the sole bridge between per-axis scalar
/// angles and the fused 3D rotation.
#[must_use]
pub fn rotation_from_euler(roll: f64, pitch: f64, yaw: f64) -> Rotation {
    let q = DQuat::from_euler(EulerRot::ZYX, yaw, pitch, roll);
    Rotation::new([q.w, q.x, q.y, q.z])
}

/// Extracts (roll, pitch, yaw) Euler angles in radians from a rotation.
///
/// Uses ZYX (yaw-pitch-roll) rotation order, the inverse of
/// [`rotation_from_euler`].
#[must_use]
pub fn euler_from_rotation(rotation: Rotation) -> (f64, f64, f64) {
    let [w, x, y, z] = rotation.components();
    let (yaw, pitch, roll) = DQuat::from_xyzw(x, y, z, w).to_euler(EulerRot::ZYX);
    (roll, pitch, yaw)
}
