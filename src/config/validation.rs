//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{AxisCalibration, RobotConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Geometry links are finite and the solver's divisors are non-zero
/// - Every axis range has min <= max
/// - Calibration offsets are finite
/// - Display names are unique
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (index, (_, robot)) in config.robots.iter().enumerate() {
        validate_robot(robot)?;

        let duplicate = config
            .robots
            .values()
            .skip(index + 1)
            .any(|other| other.name == robot.name);
        if duplicate {
            return Err(Error::Config(ConfigError::DuplicateRobotName(
                robot.name.clone(),
            )));
        }
    }

    Ok(())
}

/// Validate a single robot configuration.
pub fn validate_robot(robot: &RobotConfig) -> Result<()> {
    robot.geometry.validate()?;
    validate_calibration(&robot.calibration())?;
    robot.limit_table().validate()
}

/// Check that every calibration offset is finite.
pub fn validate_calibration(calibration: &[AxisCalibration; 6]) -> Result<()> {
    for (axis, entry) in calibration.iter().enumerate() {
        if !entry.offset.value().is_finite() {
            return Err(Error::Config(ConfigError::InvalidOffset {
                axis,
                value: entry.offset.value(),
            }));
        }
    }
    Ok(())
}
