//! Pose fusion for motion-tracked devices.
//!
//! Fuses per-axis orientation and position readings supplied by
//! independent tracking channels into a single coherent pose estimate.
//! A head or hand tracker often exposes separate signals for roll,
//! pitch, and yaw (the latter sometimes as both a fast, drift-prone
//! angular-rate stream and a slow, absolute-but-noisy stream) and
//! separate per-axis position signals; this crate combines them into one
//! rotation and one position/velocity/acceleration triple.
//!
//! # Sources
//!
//! - [`OrientationSource`] - Direct, axis-combined, or complementary-
//!   filtered rotation fusion
//! - [`PositionSource`] - Direct or axis-combined position fusion
//! - [`PoseSource`] - One device's orientation + position, pulled once
//!   per update tick
//!
//! # Channel Boundary
//!
//! The host tracking runtime implements [`Channel`] and
//! [`TrackingContext`]; fusion only pulls timestamped readings through
//! that contract and never calls back into the host. All flow is a
//! synchronous per-tick pull, and each source owns its channel handles
//! exclusively.
//!
//! # Configuration
//!
//! Devices are described declaratively; see [`DeviceParams`],
//! [`OrientationParams`], and [`PositionParams`]. Recognition of a
//! bundle is structural (exact key sets), and an absent bundle means the
//! degree of freedom is untracked.
//!
//! # Example
//!
//! ```
//! use pose_fusion::OrientationParams;
//!
//! let bundle: OrientationParams = serde_json::from_str(
//!     r#"{
//!         "roll": "/imu/roll",
//!         "pitch": "/imu/pitch",
//!         "yawFast": "/imu/gyro_yaw",
//!         "yawAccurate": "/camera/yaw",
//!         "alpha": 0.95
//!     }"#,
//! )
//! .unwrap();
//! assert!(matches!(bundle, OrientationParams::Filtered(_)));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod angle;
mod channel;
mod config;
mod error;
mod orientation;
mod pose;
mod position;

#[cfg(test)]
mod testkit;

// Re-export angle utilities
pub use angle::{euler_from_rotation, rotation_from_euler, wrap_angle};

// Re-export the channel boundary
pub use channel::{Channel, ReadError, ReadResult, TrackingContext};

// Re-export configuration types
pub use config::{
    CombinedOrientationParams, CombinedPositionParams, DeviceParams, FilteredOrientationParams,
    OrientationParams, PositionParams,
};

// Re-export sources
pub use orientation::{
    AxisCombinedOrientation, DirectOrientation, FilteredOrientation, OrientationSource,
};
pub use pose::{FusedPose, PoseSource};
pub use position::{AxisCombinedPosition, DirectPosition, PositionSource};

// Re-export error types
pub use error::{FusionError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        Channel, DeviceParams, FusedPose, FusionError, OrientationParams, OrientationSource,
        PoseSource, PositionParams, PositionSource, ReadError, ReadResult, TrackingContext,
        euler_from_rotation, rotation_from_euler, wrap_angle,
    };
}
