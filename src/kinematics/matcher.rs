//! Configuration matching for switching from manual (forward) to solved control.

use libm::fabs;

use super::angle::fold_degrees;
use super::solver::{ConfigurationFlags, Solutions};
use crate::config::AxisCalibration;

/// Remove calibration from robot angles and fold each into `[-180, 180]`.
///
/// The result is comparable with raw solver branches.
pub fn normalize(angles: &[f64; 6], calibration: &[AxisCalibration; 6]) -> [f64; 6] {
    core::array::from_fn(|i| fold_degrees(calibration[i].remove(angles[i])))
}

/// Sum of absolute per-axis differences.
#[inline]
pub fn branch_distance(a: &[f64; 6], b: &[f64; 6]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| fabs(x - y)).sum()
}

/// Flags of the branch closest to `normalized`.
///
/// Ties go to the branch that comes first in enumeration order. Invalid
/// branches take part like any other; their clamped angles are still a
/// deterministic function of the pose.
pub fn find_closest_config(normalized: &[f64; 6], solutions: &Solutions) -> ConfigurationFlags {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for (index, solution) in solutions.iter().enumerate() {
        let distance = branch_distance(normalized, &solution.angles);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    ConfigurationFlags::from_branch_index(best_index)
}
