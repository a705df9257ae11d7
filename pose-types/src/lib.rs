//! Hardware-agnostic pose and motion data types for tracked devices.
//!
//! This crate provides the foundational types for fused head/hand tracking
//! data used across:
//! - Fusion filters (`pose-fusion`)
//! - Tracking runtime adapters (real hardware drivers)
//! - Recording and playback tools
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no math-library dependencies. It can be
//! used in:
//! - Device drivers
//! - Offline analysis tools
//! - Simulation environments
//!
//! # Types
//!
//! - [`Rotation`] - 3D orientation as a unit quaternion
//! - [`AngularRateSample`] - Incremental rotation with elapsed time
//! - [`PositionSample`] - Position/velocity/acceleration with validity flags
//! - [`VelocityReading`] / [`AccelerationReading`] - Per-read linear motion
//! - [`Timestamp`] - Nanosecond-precision timing
//!
//! # Conventions
//!
//! Quaternions are stored as `[w, x, y, z]` with `w` the scalar part.
//! Positions are meters, velocities m/s, accelerations m/s², angles
//! radians. Validity flags are reported by the data source, never
//! inferred from the vector contents.
//!
//! # Example
//!
//! ```
//! use pose_types::{Rotation, Timestamp};
//!
//! let rotation = Rotation::identity();
//! assert!(rotation.is_normalized(1e-10));
//!
//! let ts = Timestamp::from_secs_f64(0.5);
//! assert_eq!(ts.as_nanos(), 500_000_000);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod motion;
mod rotation;
mod time;

pub use error::PoseError;
pub use motion::{AccelerationReading, PositionSample, VelocityReading};
pub use rotation::{AngularRateSample, Rotation};
pub use time::Timestamp;
