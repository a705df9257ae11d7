//! Per-tick aggregation of a device's orientation and position sources.

use pose_types::{PositionSample, Rotation, Timestamp};
use serde::{Deserialize, Serialize};

use crate::channel::{Channel, TrackingContext};
use crate::config::DeviceParams;
use crate::error::{FusionError, Result};
use crate::orientation::OrientationSource;
use crate::position::PositionSource;

/// One fused pose for a tracked device at a given tick.
///
/// When a source errors for a tick the previous value is carried and the
/// matching `*_tracked` flag is cleared, so the worst outcome is one
/// stale tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusedPose {
    /// Tick timestamp the sample was pulled at.
    pub timestamp: Timestamp,
    /// Fused orientation.
    pub rotation: Rotation,
    /// Fused position, velocity, and acceleration.
    pub motion: PositionSample,
    /// Whether the orientation source produced a fresh rotation this tick.
    pub orientation_tracked: bool,
    /// Whether the position source produced a fresh sample this tick.
    pub position_tracked: bool,
}

/// A tracked device's fused pose source.
///
/// Holds whichever of the orientation and position sources the device
/// descriptor named; the host pulls [`PoseSource::sample`] once per
/// update tick.
#[derive(Debug)]
pub struct PoseSource<C> {
    orientation: Option<OrientationSource<C>>,
    position: Option<PositionSource<C>>,
    rotation: Rotation,
    motion: PositionSample,
}

impl<C: Channel> PoseSource<C> {
    /// Builds a pose source from a device descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::InvalidConfig`] if the descriptor names no
    /// channels at all, and propagates construction errors from the
    /// orientation bundle.
    pub fn from_params<T>(ctx: &mut T, params: &DeviceParams) -> Result<Self>
    where
        T: TrackingContext<Channel = C>,
    {
        if params.orientation.is_none() && params.position.is_none() {
            return Err(FusionError::invalid_config(
                "device descriptor names no channels",
            ));
        }

        let orientation = params
            .orientation
            .as_ref()
            .map(|bundle| OrientationSource::from_params(ctx, bundle))
            .transpose()?;
        let position = params
            .position
            .as_ref()
            .map(|bundle| PositionSource::from_params(ctx, bundle));

        Ok(Self::new(orientation, position))
    }

    /// Builds a pose source from already-constructed sources.
    #[must_use]
    pub fn new(
        orientation: Option<OrientationSource<C>>,
        position: Option<PositionSource<C>>,
    ) -> Self {
        Self {
            orientation,
            position,
            rotation: Rotation::identity(),
            motion: PositionSample::zero(),
        }
    }

    /// Returns true if the device tracks orientation.
    #[must_use]
    pub const fn has_orientation(&self) -> bool {
        self.orientation.is_some()
    }

    /// Returns true if the device tracks position.
    #[must_use]
    pub const fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// Pulls one fused pose for this tick.
    ///
    /// Sources that are absent or that fail this tick leave their part of
    /// the pose at its previous value with the tracked flag cleared.
    pub fn sample(&mut self, time: Timestamp) -> FusedPose {
        let mut orientation_tracked = false;
        if let Some(source) = self.orientation.as_mut() {
            if let Ok(rotation) = source.sample(time) {
                self.rotation = rotation;
                orientation_tracked = true;
            }
        }

        let mut position_tracked = false;
        if let Some(source) = self.position.as_mut() {
            if let Ok(motion) = source.sample(time) {
                self.motion = motion;
                position_tracked = true;
            }
        }

        FusedPose {
            timestamp: time,
            rotation: self.rotation,
            motion: self.motion,
            orientation_tracked,
            position_tracked,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)] // Exact propagation of scripted values
mod tests {
    use super::*;
    use crate::angle::{euler_from_rotation, rotation_from_euler};
    use crate::channel::ReadError;
    use crate::config::OrientationParams;
    use crate::testkit::{FakeChannel, FakeContext};

    fn device_json(json: &str) -> DeviceParams {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_descriptor_rejected() {
        let mut ctx = FakeContext::default();
        let result = PoseSource::<FakeChannel>::from_params(&mut ctx, &device_json("{}"));
        assert!(matches!(result, Err(FusionError::InvalidConfig(_))));
    }

    #[test]
    fn orientation_only_device() {
        let mut ctx = FakeContext::default();
        ctx.insert(
            "/orientation",
            FakeChannel::default().rotations([Ok(rotation_from_euler(0.0, 0.0, 0.7))]),
        );

        let params = device_json(r#"{"orientation": "/orientation"}"#);
        let mut source = PoseSource::from_params(&mut ctx, &params).unwrap();
        assert!(source.has_orientation());
        assert!(!source.has_position());

        let pose = source.sample(Timestamp::zero());
        assert!(pose.orientation_tracked);
        assert!(!pose.position_tracked);
        let (_, _, yaw) = euler_from_rotation(pose.rotation);
        assert!((yaw - 0.7).abs() < 1e-9);
    }

    #[test]
    fn failed_tick_keeps_previous_pose() {
        let mut ctx = FakeContext::default();
        ctx.insert(
            "/orientation",
            FakeChannel::default().rotations([
                Ok(rotation_from_euler(0.0, 0.0, 0.7)),
                Err(ReadError),
            ]),
        );

        let params = device_json(r#"{"orientation": "/orientation"}"#);
        let mut source = PoseSource::from_params(&mut ctx, &params).unwrap();

        let first = source.sample(Timestamp::zero());
        assert!(first.orientation_tracked);

        let second = source.sample(Timestamp::from_nanos(1));
        assert!(!second.orientation_tracked);
        assert_eq!(second.rotation, first.rotation);
    }

    #[test]
    fn full_device_samples_both() {
        let mut ctx = FakeContext::default();
        ctx.insert(
            "/orientation",
            FakeChannel::default().rotations([Ok(rotation_from_euler(0.1, 0.2, 0.3))]),
        );
        ctx.insert(
            "/position",
            FakeChannel::default()
                .positions([Ok([1.0, 2.0, 3.0])])
                .velocities([Ok(pose_types::VelocityReading::new([0.0, 0.0, 0.0], true))])
                .accelerations([Ok(pose_types::AccelerationReading::new(
                    [0.0, 0.0, 9.81],
                    true,
                ))]),
        );

        let params = device_json(
            r#"{"orientation": "/orientation", "position": "/position"}"#,
        );
        let mut source = PoseSource::from_params(&mut ctx, &params).unwrap();

        let pose = source.sample(Timestamp::from_secs_f64(0.01));
        assert!(pose.orientation_tracked);
        assert!(pose.position_tracked);
        assert_eq!(pose.motion.position, [1.0, 2.0, 3.0]);
        assert!(pose.motion.acceleration_valid);
    }

    #[test]
    fn invalid_orientation_bundle_propagates() {
        let mut ctx = FakeContext::default();
        let params = DeviceParams {
            orientation: Some(OrientationParams::Filtered(
                crate::config::FilteredOrientationParams {
                    roll: "/r".into(),
                    pitch: "/p".into(),
                    yaw_fast: "/f".into(),
                    yaw_accurate: "/a".into(),
                    alpha: 2.0,
                },
            )),
            position: None,
        };
        let result = PoseSource::<FakeChannel>::from_params(&mut ctx, &params);
        assert!(matches!(result, Err(FusionError::InvalidAlpha { .. })));
    }
}
