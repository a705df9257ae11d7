//! Scripted channel fixtures for fusion tests.

use std::collections::{HashMap, VecDeque};

use pose_types::{AccelerationReading, AngularRateSample, Rotation, Timestamp, VelocityReading};

use crate::channel::{Channel, ReadError, ReadResult, TrackingContext};

/// A channel that replays a per-kind script of read outcomes.
///
/// Each read pops the next scripted outcome; an exhausted script fails,
/// which also models a channel opened from a path that never resolved.
#[derive(Debug, Default)]
pub struct FakeChannel {
    rotations: VecDeque<ReadResult<Rotation>>,
    rates: VecDeque<ReadResult<AngularRateSample>>,
    positions: VecDeque<ReadResult<[f64; 3]>>,
    velocities: VecDeque<ReadResult<VelocityReading>>,
    accelerations: VecDeque<ReadResult<AccelerationReading>>,
}

impl FakeChannel {
    pub fn rotations(mut self, script: impl IntoIterator<Item = ReadResult<Rotation>>) -> Self {
        self.rotations.extend(script);
        self
    }

    pub fn rates(
        mut self,
        script: impl IntoIterator<Item = ReadResult<AngularRateSample>>,
    ) -> Self {
        self.rates.extend(script);
        self
    }

    pub fn positions(mut self, script: impl IntoIterator<Item = ReadResult<[f64; 3]>>) -> Self {
        self.positions.extend(script);
        self
    }

    pub fn velocities(
        mut self,
        script: impl IntoIterator<Item = ReadResult<VelocityReading>>,
    ) -> Self {
        self.velocities.extend(script);
        self
    }

    pub fn accelerations(
        mut self,
        script: impl IntoIterator<Item = ReadResult<AccelerationReading>>,
    ) -> Self {
        self.accelerations.extend(script);
        self
    }
}

impl Channel for FakeChannel {
    fn read_rotation(&mut self, _time: Timestamp) -> ReadResult<Rotation> {
        self.rotations.pop_front().unwrap_or(Err(ReadError))
    }

    fn read_angular_rate(&mut self, _time: Timestamp) -> ReadResult<AngularRateSample> {
        self.rates.pop_front().unwrap_or(Err(ReadError))
    }

    fn read_position(&mut self, _time: Timestamp) -> ReadResult<[f64; 3]> {
        self.positions.pop_front().unwrap_or(Err(ReadError))
    }

    fn read_velocity(&mut self, _time: Timestamp) -> ReadResult<VelocityReading> {
        self.velocities.pop_front().unwrap_or(Err(ReadError))
    }

    fn read_acceleration(&mut self, _time: Timestamp) -> ReadResult<AccelerationReading> {
        self.accelerations.pop_front().unwrap_or(Err(ReadError))
    }
}

/// A tracking context backed by a map of scripted channels.
///
/// Opening an unknown path yields an empty [`FakeChannel`] whose reads
/// all fail, matching the runtime's silent-failure open contract.
#[derive(Debug, Default)]
pub struct FakeContext {
    channels: HashMap<String, FakeChannel>,
    pub opened: Vec<String>,
}

impl FakeContext {
    pub fn insert(&mut self, path: &str, channel: FakeChannel) {
        self.channels.insert(path.to_string(), channel);
    }
}

impl TrackingContext for FakeContext {
    type Channel = FakeChannel;

    fn open_channel(&mut self, path: &str) -> FakeChannel {
        self.opened.push(path.to_string());
        self.channels.remove(path).unwrap_or_default()
    }
}
