//! Position sources: fused position, velocity, and acceleration.
//!
//! Two variants, chosen once at construction:
//!
//! - [`DirectPosition`] - one channel supplies all three quantities
//! - [`AxisCombinedPosition`] - three channels, one axis each, updated
//!   independently and tolerant of per-axis read failure

use pose_types::{PositionSample, Timestamp};

use crate::channel::{Channel, ReadError, ReadResult, TrackingContext};
use crate::config::{CombinedPositionParams, PositionParams};

/// Position source wrapping one channel that supplies position,
/// velocity, and acceleration together.
#[derive(Debug)]
pub struct DirectPosition<C> {
    channel: C,
}

impl<C: Channel> DirectPosition<C> {
    /// Opens the single position channel.
    pub fn open<T>(ctx: &mut T, path: &str) -> Self
    where
        T: TrackingContext<Channel = C>,
    {
        tracing::debug!(path, "opened direct position source");
        Self {
            channel: ctx.open_channel(path),
        }
    }

    /// Reads position, velocity, and acceleration in one tick.
    ///
    /// All three reads are issued regardless of individual outcomes; the
    /// combined status is their logical AND.
    ///
    /// # Errors
    ///
    /// Fails if any of the three reads fails; no partial result is
    /// applied.
    pub fn sample(&mut self, time: Timestamp) -> ReadResult<PositionSample> {
        let position = self.channel.read_position(time);
        let velocity = self.channel.read_velocity(time);
        let acceleration = self.channel.read_acceleration(time);

        let (Ok(position), Ok(velocity), Ok(acceleration)) = (position, velocity, acceleration)
        else {
            return Err(ReadError);
        };

        Ok(PositionSample {
            position,
            velocity: velocity.linear,
            velocity_valid: velocity.valid,
            acceleration: acceleration.linear,
            acceleration_valid: acceleration.valid,
        })
    }
}

/// Position source combining one axis from each of three channels.
///
/// Owns the running output state: a per-axis read failure leaves just
/// that scalar at its previous value, so the sample degrades to stale
/// data on the failed axis instead of failing the call.
#[derive(Debug)]
pub struct AxisCombinedPosition<C> {
    axes: [C; 3],
    state: PositionSample,
}

impl<C: Channel> AxisCombinedPosition<C> {
    /// Opens the three per-axis channels.
    pub fn open<T>(ctx: &mut T, params: &CombinedPositionParams) -> Self
    where
        T: TrackingContext<Channel = C>,
    {
        tracing::debug!(
            x = %params.x,
            y = %params.y,
            z = %params.z,
            "opened axis-combined position source"
        );
        Self {
            axes: [
                ctx.open_channel(&params.x),
                ctx.open_channel(&params.y),
                ctx.open_channel(&params.z),
            ],
            state: PositionSample::zero(),
        }
    }

    /// Updates each of the nine output scalars independently.
    ///
    /// Always succeeds. The velocity and acceleration validity flags are
    /// true only when all three axes both read successfully and reported
    /// their value valid.
    pub fn sample(&mut self, time: Timestamp) -> PositionSample {
        for (axis, channel) in self.axes.iter_mut().enumerate() {
            if let Ok(position) = channel.read_position(time) {
                self.state.position[axis] = position[axis];
            }
        }

        let mut velocity_valid = true;
        for (axis, channel) in self.axes.iter_mut().enumerate() {
            match channel.read_velocity(time) {
                Ok(reading) => {
                    self.state.velocity[axis] = reading.linear[axis];
                    velocity_valid &= reading.valid;
                }
                Err(ReadError) => velocity_valid = false,
            }
        }
        self.state.velocity_valid = velocity_valid;

        let mut acceleration_valid = true;
        for (axis, channel) in self.axes.iter_mut().enumerate() {
            match channel.read_acceleration(time) {
                Ok(reading) => {
                    self.state.acceleration[axis] = reading.linear[axis];
                    acceleration_valid &= reading.valid;
                }
                Err(ReadError) => acceleration_valid = false,
            }
        }
        self.state.acceleration_valid = acceleration_valid;

        self.state
    }
}

/// A fused position source, variant fixed at construction.
#[derive(Debug)]
pub enum PositionSource<C> {
    /// One channel supplies all three quantities.
    Direct(DirectPosition<C>),
    /// Three channels, one axis each.
    AxisCombined(AxisCombinedPosition<C>),
}

impl<C: Channel> PositionSource<C> {
    /// Builds the source variant selected by the parameter bundle.
    pub fn from_params<T>(ctx: &mut T, params: &PositionParams) -> Self
    where
        T: TrackingContext<Channel = C>,
    {
        match params {
            PositionParams::Single(path) => Self::Direct(DirectPosition::open(ctx, path)),
            PositionParams::Combined(combined) => {
                Self::AxisCombined(AxisCombinedPosition::open(ctx, combined))
            }
        }
    }

    /// Pulls one fused position sample for this tick.
    ///
    /// # Errors
    ///
    /// Only the [`PositionSource::Direct`] variant surfaces read
    /// failures; the axis-combined variant always succeeds and degrades
    /// per axis instead.
    pub fn sample(&mut self, time: Timestamp) -> ReadResult<PositionSample> {
        match self {
            Self::Direct(source) => source.sample(time),
            Self::AxisCombined(source) => Ok(source.sample(time)),
        }
    }
}
