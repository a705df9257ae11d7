//! Linear motion types with source-reported validity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A linear velocity reading from one channel.
///
/// The validity flag is reported by the data source; it is never derived
/// from the vector contents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VelocityReading {
    /// Linear velocity in m/s: `[x, y, z]`.
    pub linear: [f64; 3],
    /// Whether the source considers the reading usable.
    pub valid: bool,
}

impl VelocityReading {
    /// Creates a velocity reading.
    #[must_use]
    pub const fn new(linear: [f64; 3], valid: bool) -> Self {
        Self { linear, valid }
    }

    /// Creates a zero, invalid reading.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            linear: [0.0, 0.0, 0.0],
            valid: false,
        }
    }
}

impl Default for VelocityReading {
    fn default() -> Self {
        Self::zero()
    }
}

/// A linear acceleration reading from one channel.
///
/// The validity flag is reported by the data source; it is never derived
/// from the vector contents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccelerationReading {
    /// Linear acceleration in m/s²: `[x, y, z]`.
    pub linear: [f64; 3],
    /// Whether the source considers the reading usable.
    pub valid: bool,
}

impl AccelerationReading {
    /// Creates an acceleration reading.
    #[must_use]
    pub const fn new(linear: [f64; 3], valid: bool) -> Self {
        Self { linear, valid }
    }

    /// Creates a zero, invalid reading.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            linear: [0.0, 0.0, 0.0],
            valid: false,
        }
    }
}

impl Default for AccelerationReading {
    fn default() -> Self {
        Self::zero()
    }
}

/// Fused position, velocity, and acceleration for one tracked device.
///
/// Each of the nine scalars is updated independently by an axis-combined
/// position source, so a per-axis read failure leaves just that scalar at
/// its previous value. The validity flags cover the whole vector: they
/// are true only when every contributing axis reported its value valid.
///
/// # Example
///
/// ```
/// use pose_types::PositionSample;
///
/// let sample = PositionSample::zero();
/// assert_eq!(sample.position, [0.0, 0.0, 0.0]);
/// assert!(!sample.velocity_valid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSample {
    /// Position in meters: `[x, y, z]`.
    pub position: [f64; 3],
    /// Linear velocity in m/s: `[x, y, z]`.
    pub velocity: [f64; 3],
    /// Whether all contributing velocity axes reported valid data.
    pub velocity_valid: bool,
    /// Linear acceleration in m/s²: `[x, y, z]`.
    pub acceleration: [f64; 3],
    /// Whether all contributing acceleration axes reported valid data.
    pub acceleration_valid: bool,
}

impl PositionSample {
    /// Creates a zero sample with invalid velocity and acceleration.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            velocity: [0.0, 0.0, 0.0],
            velocity_valid: false,
            acceleration: [0.0, 0.0, 0.0],
            acceleration_valid: false,
        }
    }
}

impl Default for PositionSample {
    fn default() -> Self {
        Self::zero()
    }
}
