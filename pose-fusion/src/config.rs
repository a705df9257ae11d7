//! Device descriptor parameter bundles.
//!
//! The host's configuration layer hands fusion a declarative descriptor
//! per tracked degree of freedom. Recognition is structural: a bundle is
//! either a single channel path or an object carrying one of the exact
//! key sets below. Anything else fails to parse, and the caller treats
//! the absent bundle as "source unavailable".

use serde::{Deserialize, Serialize};

/// Orientation descriptor: which channels feed the fused rotation.
///
/// Untagged: a JSON string selects [`OrientationParams::Single`], an
/// object is matched against the filtered key set before the plain
/// combined one (the filtered set is a superset in spirit, so it must
/// win when its keys are present).
///
/// # Example
///
/// ```
/// use pose_fusion::OrientationParams;
///
/// let single: OrientationParams =
///     serde_json::from_str("\"/tracker/0/orientation\"").unwrap();
/// assert!(matches!(single, OrientationParams::Single(_)));
///
/// let combined: OrientationParams = serde_json::from_str(
///     r#"{"roll": "/imu/roll", "pitch": "/imu/pitch", "yaw": "/imu/yaw"}"#,
/// ).unwrap();
/// assert!(matches!(combined, OrientationParams::Combined(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrientationParams {
    /// One channel supplies the whole rotation.
    Single(String),
    /// Per-axis channels with a complementary filter on the yaw axis.
    Filtered(FilteredOrientationParams),
    /// Per-axis channels, one Euler angle each.
    Combined(CombinedOrientationParams),
}

/// Channel paths for the plain axis-combined orientation source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CombinedOrientationParams {
    /// Channel supplying the roll angle.
    pub roll: String,
    /// Channel supplying the pitch angle.
    pub pitch: String,
    /// Channel supplying the yaw angle.
    pub yaw: String,
}

/// Channel paths and blend weight for the filtered orientation source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilteredOrientationParams {
    /// Channel supplying the roll angle.
    pub roll: String,
    /// Channel supplying the pitch angle.
    pub pitch: String,
    /// Fast, drift-prone angular-rate stream for yaw.
    pub yaw_fast: String,
    /// Slow, absolute-but-noisy yaw stream.
    pub yaw_accurate: String,
    /// Complementary blend weight in [0, 1]; near 1 trusts the fast
    /// integrated estimate, near 0 trusts the absolute estimate.
    pub alpha: f64,
}

/// Position descriptor: which channels feed the fused position.
///
/// # Example
///
/// ```
/// use pose_fusion::PositionParams;
///
/// let combined: PositionParams = serde_json::from_str(
///     r#"{"x": "/pos/x", "y": "/pos/y", "z": "/pos/z"}"#,
/// ).unwrap();
/// assert!(matches!(combined, PositionParams::Combined(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionParams {
    /// One channel supplies position, velocity, and acceleration.
    Single(String),
    /// Per-axis channels, updated independently.
    Combined(CombinedPositionParams),
}

/// Channel paths for the axis-combined position source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CombinedPositionParams {
    /// Channel supplying the x axis.
    pub x: String,
    /// Channel supplying the y axis.
    pub y: String,
    /// Channel supplying the z axis.
    pub z: String,
}

/// Descriptor for one tracked device: orientation and position bundles,
/// each optional. A device with neither is rejected at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceParams {
    /// Orientation descriptor, if the device tracks orientation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<OrientationParams>,
    /// Position descriptor, if the device tracks position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionParams>,
}
