//! Per-axis calibration between solver angles and robot angles.

use serde::Deserialize;

use super::units::Degrees;

/// Manufacturer zero-position correction and direction of one axis.
///
/// Robot angle = model angle · s + offset, with s = -1 when flipped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct AxisCalibration {
    /// Zero-position correction.
    #[serde(default, rename = "offset_degrees")]
    pub offset: Degrees,

    /// Axis counts in the opposite direction to the solver model.
    #[serde(default)]
    pub flip_direction: bool,
}

impl AxisCalibration {
    /// Identity calibration.
    pub const IDENTITY: Self = Self {
        offset: Degrees(0.0),
        flip_direction: false,
    };

    /// Create a new calibration.
    pub const fn new(offset: Degrees, flip_direction: bool) -> Self {
        Self {
            offset,
            flip_direction,
        }
    }

    #[inline]
    fn sign(&self) -> f64 {
        if self.flip_direction {
            -1.0
        } else {
            1.0
        }
    }

    /// Convert a solver-model angle to a robot angle (degrees).
    #[inline]
    pub fn apply(&self, model: f64) -> f64 {
        model * self.sign() + self.offset.value()
    }

    /// Convert a robot angle back to the solver model (degrees).
    #[inline]
    pub fn remove(&self, robot: f64) -> f64 {
        (robot - self.offset.value()) * self.sign()
    }
}

/// Apply calibration to all six axes.
pub fn apply_all(model: &[f64; 6], calibration: &[AxisCalibration; 6]) -> [f64; 6] {
    core::array::from_fn(|i| calibration[i].apply(model[i]))
}

/// Remove calibration from all six axes.
pub fn remove_all(robot: &[f64; 6], calibration: &[AxisCalibration; 6]) -> [f64; 6] {
    core::array::from_fn(|i| calibration[i].remove(robot[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_remove_symmetric() {
        let cal = AxisCalibration::new(Degrees(-90.0), true);
        for v in [-170.0, -12.5, 0.0, 45.0, 179.0] {
            assert!((cal.remove(cal.apply(v)) - v).abs() < 1e-12);
        }
        assert_eq!(cal.apply(10.0), -100.0);
        assert_eq!(cal.remove(-100.0), 10.0);
    }

    #[test]
    fn test_identity() {
        assert_eq!(AxisCalibration::IDENTITY.apply(33.0), 33.0);
        assert_eq!(AxisCalibration::default(), AxisCalibration::IDENTITY);
    }
}
