//! Boundary contract with the host tracking runtime.
//!
//! The tracking runtime supplies timestamped raw readings for named
//! logical sensor paths. Fusion sources depend on it only through the
//! [`Channel`] read contract: every read is a non-blocking, bounded-time
//! call that either yields a value or reports no usable value this tick.

use pose_types::{AccelerationReading, AngularRateSample, Rotation, Timestamp, VelocityReading};
use thiserror::Error;

/// A channel read produced no usable value this tick.
///
/// The runtime's status signal is two-valued; fusion treats any
/// non-success identically and applies the per-variant degradation
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("channel read reported no usable value")]
pub struct ReadError;

/// Result of a single channel read.
pub type ReadResult<T> = std::result::Result<T, ReadError>;

/// A single named, independently-readable raw signal stream.
///
/// Handles are owned exclusively by the fusion source that opened them;
/// they are never shared between sources and are released when the
/// owning source is dropped. Reads take `&mut self` because decoding may
/// advance stream-internal state.
pub trait Channel {
    /// Reads the channel's current rotation.
    fn read_rotation(&mut self, time: Timestamp) -> ReadResult<Rotation>;

    /// Reads the channel's incremental rotation since its previous
    /// sample, with the elapsed time it covers.
    fn read_angular_rate(&mut self, time: Timestamp) -> ReadResult<AngularRateSample>;

    /// Reads the channel's current position in meters.
    fn read_position(&mut self, time: Timestamp) -> ReadResult<[f64; 3]>;

    /// Reads the channel's current linear velocity.
    fn read_velocity(&mut self, time: Timestamp) -> ReadResult<VelocityReading>;

    /// Reads the channel's current linear acceleration.
    fn read_acceleration(&mut self, time: Timestamp) -> ReadResult<AccelerationReading>;
}

/// Access to the host tracking runtime's channel namespace.
///
/// Opening a channel never fails loudly: a path that does not resolve
/// yields a channel whose reads fail, matching the runtime's
/// silent-failure contract. Fusion does not validate handles beyond
/// using them.
pub trait TrackingContext {
    /// The channel handle type this runtime produces.
    type Channel: Channel;

    /// Opens the channel for a logical sensor path.
    fn open_channel(&mut self, path: &str) -> Self::Channel;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_display() {
        assert!(ReadError.to_string().contains("no usable value"));
    }
}
