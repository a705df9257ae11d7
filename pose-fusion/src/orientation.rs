//! Orientation sources: fused rotation from one or more channels.
//!
//! Three variants, chosen once at construction from the device
//! descriptor:
//!
//! - [`DirectOrientation`] - one channel supplies the whole rotation
//! - [`AxisCombinedOrientation`] - three channels, one Euler angle each
//! - [`FilteredOrientation`] - per-axis channels plus a complementary
//!   filter blending a fast and an absolute yaw stream
//!
//! Every variant either returns a fully-populated rotation or reports
//! failure; a partially-updated rotation is never observable.

use std::f64::consts::{FRAC_PI_2, TAU};

use pose_types::{Rotation, Timestamp};

use crate::angle::{euler_from_rotation, rotation_from_euler, wrap_angle};
use crate::channel::{Channel, ReadResult, TrackingContext};
use crate::config::{CombinedOrientationParams, FilteredOrientationParams, OrientationParams};
use crate::error::{FusionError, Result};

/// The fast yaw stream reports incremental rotations with a full-turn
/// factor missing; this rescale is a known quirk of the upstream HDK
/// angular-rate report, not a general law.
const FULL_TURN_SCALE: f64 = TAU;

/// One channel with the last rotation it successfully decoded.
///
/// Axis-combined variants never fail a sample over a single bad read;
/// the previous decoded value stands in for that tick.
#[derive(Debug)]
struct AxisChannel<C> {
    channel: C,
    last: Rotation,
}

impl<C: Channel> AxisChannel<C> {
    fn open<T>(ctx: &mut T, path: &str) -> Self
    where
        T: TrackingContext<Channel = C>,
    {
        Self {
            channel: ctx.open_channel(path),
            last: Rotation::identity(),
        }
    }

    fn read(&mut self, time: Timestamp) -> Rotation {
        if let Ok(rotation) = self.channel.read_rotation(time) {
            self.last = rotation;
        }
        self.last
    }
}

/// Complementary filter state for the yaw axis.
///
/// Owned exclusively by one [`FilteredOrientation`]; updated exactly once
/// per sample, committing the new state only after the blended output is
/// fully computed.
#[derive(Debug)]
struct YawFilter {
    last_yaw: f64,
    alpha: f64,
}

impl YawFilter {
    fn new(alpha: f64) -> Self {
        Self {
            last_yaw: 0.0,
            alpha,
        }
    }

    /// Blends one tick of the fast and absolute yaw streams.
    ///
    /// `z_accurate` is the absolute stream's yaw angle, `dzdt_fast` the
    /// fast stream's incremental yaw, `dt` the elapsed time the increment
    /// covers.
    fn update(&mut self, z_accurate: f64, dzdt_fast: f64, dt: f64) -> f64 {
        let dt = dt * FULL_TURN_SCALE;

        let dz_fast = wrap_angle(dt * dzdt_fast);
        let z_accurate = wrap_angle(z_accurate);

        // A ±π wrap event puts the absolute yaw and the stored yaw on
        // opposite sides of the discontinuity; blending across it would
        // integrate a fictitious near-2π jump.
        let mut last = self.last_yaw;
        if (z_accurate < -FRAC_PI_2 && last > FRAC_PI_2)
            || (z_accurate > FRAC_PI_2 && last < -FRAC_PI_2)
        {
            tracing::trace!(z_accurate, last, "yaw wrap crossing, snapping filter state");
            last = z_accurate;
        }

        let mut z_out = self.alpha * (last + dz_fast) + (1.0 - self.alpha) * z_accurate;

        // Bogus fast-stream data on startup can blend to NaN; the
        // absolute stream is usable on its own.
        if !z_out.is_finite() {
            tracing::trace!("non-finite blended yaw, using absolute stream");
            z_out = z_accurate;
        }

        let z_out = wrap_angle(z_out);
        self.last_yaw = z_out;
        z_out
    }
}

/// Orientation source wrapping exactly one channel.
///
/// `sample` propagates the channel's success or failure unchanged; there
/// is no retry and no substitution.
#[derive(Debug)]
pub struct DirectOrientation<C> {
    channel: C,
}

impl<C: Channel> DirectOrientation<C> {
    /// Opens the single orientation channel.
    pub fn open<T>(ctx: &mut T, path: &str) -> Self
    where
        T: TrackingContext<Channel = C>,
    {
        tracing::debug!(path, "opened direct orientation source");
        Self {
            channel: ctx.open_channel(path),
        }
    }

    /// Reads the channel's current rotation.
    ///
    /// # Errors
    ///
    /// Propagates the underlying read failure unchanged.
    pub fn sample(&mut self, time: Timestamp) -> ReadResult<Rotation> {
        self.channel.read_rotation(time)
    }
}

/// Orientation source combining one Euler angle from each of three
/// channels.
///
/// Each physical axis may be tracked by a differently-calibrated sensor;
/// taking only the authoritative component from each read keeps
/// cross-axis error out of the fused rotation.
#[derive(Debug)]
pub struct AxisCombinedOrientation<C> {
    roll: AxisChannel<C>,
    pitch: AxisChannel<C>,
    yaw: AxisChannel<C>,
}

impl<C: Channel> AxisCombinedOrientation<C> {
    /// Opens the three per-axis channels.
    pub fn open<T>(ctx: &mut T, params: &CombinedOrientationParams) -> Self
    where
        T: TrackingContext<Channel = C>,
    {
        tracing::debug!(
            roll = %params.roll,
            pitch = %params.pitch,
            yaw = %params.yaw,
            "opened axis-combined orientation source"
        );
        Self {
            roll: AxisChannel::open(ctx, &params.roll),
            pitch: AxisChannel::open(ctx, &params.pitch),
            yaw: AxisChannel::open(ctx, &params.yaw),
        }
    }

    /// Reads all three channels and reassembles the matching components.
    ///
    /// Always yields a rotation; a failed per-channel read falls back to
    /// that channel's previous decoded value.
    pub fn sample(&mut self, time: Timestamp) -> Rotation {
        let (roll, _, _) = euler_from_rotation(self.roll.read(time));
        let (_, pitch, _) = euler_from_rotation(self.pitch.read(time));
        let (_, _, yaw) = euler_from_rotation(self.yaw.read(time));
        rotation_from_euler(roll, pitch, yaw)
    }
}

/// Orientation source with a complementary filter on the yaw axis.
///
/// Roll and pitch come straight from their channels as in
/// [`AxisCombinedOrientation`]. Yaw blends a fast, drift-prone
/// angular-rate stream with a slow absolute stream: the filter integrates
/// the fast increments and pulls toward the absolute angle with weight
/// `1 - alpha`.
#[derive(Debug)]
pub struct FilteredOrientation<C> {
    roll: AxisChannel<C>,
    pitch: AxisChannel<C>,
    yaw_fast: C,
    yaw_accurate: AxisChannel<C>,
    filter: YawFilter,
}

impl<C: Channel> FilteredOrientation<C> {
    /// Opens the four channels and initializes the yaw filter.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::InvalidAlpha`] if the blend weight is not a
    /// finite number in [0, 1].
    pub fn open<T>(ctx: &mut T, params: &FilteredOrientationParams) -> Result<Self>
    where
        T: TrackingContext<Channel = C>,
    {
        if !params.alpha.is_finite() || !(0.0..=1.0).contains(&params.alpha) {
            return Err(FusionError::InvalidAlpha {
                alpha: params.alpha,
            });
        }

        tracing::info!(alpha = params.alpha, "initialized complementary yaw filter");

        Ok(Self {
            roll: AxisChannel::open(ctx, &params.roll),
            pitch: AxisChannel::open(ctx, &params.pitch),
            yaw_fast: ctx.open_channel(&params.yaw_fast),
            yaw_accurate: AxisChannel::open(ctx, &params.yaw_accurate),
            filter: YawFilter::new(params.alpha),
        })
    }

    /// Reads all four channels and emits the filtered rotation.
    ///
    /// Always yields a rotation; failed reads degrade to the previous
    /// decoded value (roll, pitch, absolute yaw) or a zero increment
    /// (fast yaw).
    pub fn sample(&mut self, time: Timestamp) -> Rotation {
        let (roll, _, _) = euler_from_rotation(self.roll.read(time));
        let (_, pitch, _) = euler_from_rotation(self.pitch.read(time));

        let accurate = self.yaw_accurate.read(time);
        let rate = self.yaw_fast.read_angular_rate(time).unwrap_or_default();

        let (_, _, z_accurate) = euler_from_rotation(accurate);
        let (_, _, dzdt_fast) = euler_from_rotation(rate.delta);

        let yaw = self.filter.update(z_accurate, dzdt_fast, rate.dt);
        rotation_from_euler(roll, pitch, yaw)
    }
}

/// A fused orientation source, variant fixed at construction.
#[derive(Debug)]
pub enum OrientationSource<C> {
    /// One channel supplies the whole rotation.
    Direct(DirectOrientation<C>),
    /// Three channels, one Euler angle each.
    AxisCombined(AxisCombinedOrientation<C>),
    /// Per-axis channels with a complementary yaw filter.
    Filtered(FilteredOrientation<C>),
}

impl<C: Channel> OrientationSource<C> {
    /// Builds the source variant selected by the parameter bundle.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::InvalidAlpha`] if a filtered bundle carries
    /// an out-of-range blend weight.
    pub fn from_params<T>(ctx: &mut T, params: &OrientationParams) -> Result<Self>
    where
        T: TrackingContext<Channel = C>,
    {
        match params {
            OrientationParams::Single(path) => {
                Ok(Self::Direct(DirectOrientation::open(ctx, path)))
            }
            OrientationParams::Filtered(filtered) => {
                Ok(Self::Filtered(FilteredOrientation::open(ctx, filtered)?))
            }
            OrientationParams::Combined(combined) => Ok(Self::AxisCombined(
                AxisCombinedOrientation::open(ctx, combined),
            )),
        }
    }

    /// Pulls one fused rotation for this tick.
    ///
    /// # Errors
    ///
    /// Only the [`OrientationSource::Direct`] variant surfaces read
    /// failures; both axis-combined variants always succeed and degrade
    /// per channel instead.
    pub fn sample(&mut self, time: Timestamp) -> ReadResult<Rotation> {
        match self {
            Self::Direct(source) => source.sample(time),
            Self::AxisCombined(source) => Ok(source.sample(time)),
            Self::Filtered(source) => Ok(source.sample(time)),
        }
    }
}
