//! Robot configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::calibration::AxisCalibration;
use super::geometry::RobotGeometry;
use super::limits::{AxisRange, DerivativeOrder, LimitTable, ViolationPolicy};
use super::units::{Degrees, DegreesPerSec, DegreesPerSecCubed, DegreesPerSecSquared};
use crate::kinematics::FrameConverter;

/// One axis: calibration plus limits.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AxisConfig {
    /// Zero-position correction.
    #[serde(default, rename = "offset_degrees")]
    pub offset: Degrees,

    /// Axis counts against the solver model direction.
    #[serde(default)]
    pub flip_direction: bool,

    /// Minimum joint angle.
    #[serde(rename = "min_degrees")]
    pub min: Degrees,

    /// Maximum joint angle.
    #[serde(rename = "max_degrees")]
    pub max: Degrees,

    /// Optional maximum speed (symmetric).
    #[serde(default, rename = "max_velocity_deg_per_sec")]
    pub max_velocity: Option<DegreesPerSec>,

    /// Optional maximum acceleration (symmetric).
    #[serde(default, rename = "max_acceleration_deg_per_sec2")]
    pub max_acceleration: Option<DegreesPerSecSquared>,

    /// Optional maximum jerk (symmetric).
    #[serde(default, rename = "max_jerk_deg_per_sec3")]
    pub max_jerk: Option<DegreesPerSecCubed>,
}

impl AxisConfig {
    /// Calibration part of this axis.
    pub fn calibration(&self) -> AxisCalibration {
        AxisCalibration::new(self.offset, self.flip_direction)
    }
}

/// Complete robot configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RobotConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Link geometry; the table key selects the solver model.
    pub geometry: RobotGeometry,

    /// Axis 1 through axis 6.
    pub axes: [AxisConfig; 6],

    /// What a violating trajectory means for export.
    #[serde(default)]
    pub violation_policy: ViolationPolicy,

    /// Authoring frame convention; the default remap when omitted.
    #[serde(default)]
    pub frame: Option<FrameConverter>,
}

impl RobotConfig {
    /// Per-axis calibration.
    pub fn calibration(&self) -> [AxisCalibration; 6] {
        core::array::from_fn(|i| self.axes[i].calibration())
    }

    /// Limit table assembled from the axis entries.
    pub fn limit_table(&self) -> LimitTable {
        let symmetric = |limit: Option<f64>| limit.map(AxisRange::symmetric).unwrap_or_default();
        LimitTable::from_positions(core::array::from_fn(|i| {
            AxisRange::new(self.axes[i].min.value(), self.axes[i].max.value())
        }))
        .with(
            DerivativeOrder::Velocity,
            core::array::from_fn(|i| symmetric(self.axes[i].max_velocity.map(|v| v.value()))),
        )
        .with(
            DerivativeOrder::Acceleration,
            core::array::from_fn(|i| symmetric(self.axes[i].max_acceleration.map(|v| v.value()))),
        )
        .with(
            DerivativeOrder::Jerk,
            core::array::from_fn(|i| symmetric(self.axes[i].max_jerk.map(|v| v.value()))),
        )
    }
}
