//! Builder pattern for Robot.

use heapless::String;

use crate::config::{
    validate_calibration, AxisCalibration, LimitTable, RobotConfig, RobotGeometry, SystemConfig,
    ViolationPolicy,
};
use crate::error::{ConfigError, Error, Result};
use crate::kinematics::FrameConverter;

use super::arm::Robot;

/// Builder for creating Robot instances.
#[derive(Debug, Clone)]
pub struct RobotBuilder {
    name: Option<String<32>>,
    geometry: Option<RobotGeometry>,
    calibration: [AxisCalibration; 6],
    limits: LimitTable,
    frame: FrameConverter,
    violation_policy: ViolationPolicy,
}

impl Default for RobotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotBuilder {
    /// Create a new builder: identity calibration, unbounded limits and the
    /// authoring frame convention.
    pub fn new() -> Self {
        Self {
            name: None,
            geometry: None,
            calibration: [AxisCalibration::IDENTITY; 6],
            limits: LimitTable::unbounded(),
            frame: FrameConverter::default(),
            violation_policy: ViolationPolicy::default(),
        }
    }

    /// Set the robot name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = String::try_from(name).ok();
        self
    }

    /// Set the link geometry (and with it the solver model).
    pub fn geometry(mut self, geometry: RobotGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Set calibration for all axes.
    pub fn calibration(mut self, calibration: [AxisCalibration; 6]) -> Self {
        self.calibration = calibration;
        self
    }

    /// Set calibration for one axis (0-based).
    pub fn axis_calibration(mut self, axis: usize, calibration: AxisCalibration) -> Self {
        if let Some(slot) = self.calibration.get_mut(axis) {
            *slot = calibration;
        }
        self
    }

    /// Set the limit table.
    pub fn limits(mut self, limits: LimitTable) -> Self {
        self.limits = limits;
        self
    }

    /// Set the authoring-to-solver frame remap.
    pub fn frame(mut self, frame: FrameConverter) -> Self {
        self.frame = frame;
        self
    }

    /// Set what violations mean for export.
    pub fn violation_policy(mut self, policy: ViolationPolicy) -> Self {
        self.violation_policy = policy;
        self
    }

    /// Configure from a RobotConfig.
    pub fn from_robot_config(mut self, config: &RobotConfig) -> Self {
        self.name = Some(config.name.clone());
        self.geometry = Some(config.geometry);
        self.calibration = config.calibration();
        self.limits = config.limit_table();
        self.frame = config.frame.unwrap_or_default();
        self.violation_policy = config.violation_policy;
        self
    }

    /// Configure from SystemConfig by robot key.
    pub fn from_config(self, config: &SystemConfig, robot_name: &str) -> Result<Self> {
        let robot_config = config.robot(robot_name).ok_or_else(|| {
            Error::Config(ConfigError::RobotNotFound(
                String::try_from(robot_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_robot_config(robot_config))
    }

    /// Build the Robot.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is missing or any part fails validation.
    pub fn build(self) -> Result<Robot> {
        let geometry = self
            .geometry
            .ok_or(Error::Config(ConfigError::Incomplete("geometry")))?;
        geometry.validate()?;
        validate_calibration(&self.calibration)?;
        self.limits.validate()?;

        let name = match self.name {
            Some(name) => name,
            None => String::try_from("robot").unwrap_or_default(),
        };

        Ok(Robot::new(
            name,
            geometry,
            self.calibration,
            self.limits,
            self.frame,
            self.violation_policy,
        ))
    }
}
