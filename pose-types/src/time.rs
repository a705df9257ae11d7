//! Time types for tracking data.
//!
//! Provides nanosecond-precision timing for raw readings and fused poses.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nanosecond-precision timestamp.
///
/// Used for all readings so that fusion can relate samples pulled from
/// independently-tracked channels on the same update tick.
///
/// # Example
///
/// ```
/// use pose_types::Timestamp;
///
/// let ts = Timestamp::from_secs_f64(1.5);
/// assert!((ts.as_secs_f64() - 1.5).abs() < 1e-9);
///
/// let ts_nanos = Timestamp::from_nanos(1_500_000_000);
/// assert_eq!(ts, ts_nanos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    /// Nanoseconds since epoch (or session start).
    nanos: u64,
}

impl Timestamp {
    /// Creates a timestamp from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Creates a timestamp from seconds (floating point).
    ///
    /// Negative inputs clamp to zero.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_secs_f64(secs: f64) -> Self {
        let nanos = (secs * 1e9).max(0.0) as u64;
        Self { nanos }
    }

    /// Returns the timestamp as nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.nanos
    }

    /// Returns the timestamp as seconds (floating point).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Returns the zero timestamp.
    #[must_use]
    pub const fn zero() -> Self {
        Self { nanos: 0 }
    }

    /// Checks if this is the zero timestamp.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// Returns the elapsed seconds since an earlier timestamp.
    ///
    /// Returns `None` if `earlier` is after `self`.
    #[must_use]
    pub fn elapsed_secs_since(self, earlier: Self) -> Option<f64> {
        let delta = self.nanos.checked_sub(earlier.nanos)?;
        Some(Self::from_nanos(delta).as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_secs_roundtrip() {
        let ts = Timestamp::from_secs_f64(2.25);
        assert_eq!(ts.as_nanos(), 2_250_000_000);
        assert!((ts.as_secs_f64() - 2.25).abs() < 1e-9);
    }

    #[test]
    fn negative_secs_clamp_to_zero() {
        let ts = Timestamp::from_secs_f64(-1.0);
        assert!(ts.is_zero());
    }

    #[test]
    fn ordering() {
        let a = Timestamp::from_nanos(100);
        let b = Timestamp::from_nanos(200);
        assert!(a < b);
    }

    #[test]
    fn elapsed_secs() {
        let a = Timestamp::from_secs_f64(1.0);
        let b = Timestamp::from_secs_f64(1.5);
        let dt = b.elapsed_secs_since(a);
        assert!(dt.is_some());
        assert!((dt.unwrap() - 0.5).abs() < 1e-9);
        assert!(a.elapsed_secs_since(b).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn timestamp_serialization() {
        let ts = Timestamp::from_nanos(42);
        let json = serde_json::to_string(&ts).ok();
        assert!(json.is_some());
    }
}
