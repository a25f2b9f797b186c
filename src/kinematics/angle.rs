//! Angle representation helpers shared by the solver, matcher and reconciler.
//!
//! All functions work in degrees.

use libm::{ceil, fabs, fmod, round};

/// Jumps between consecutive samples larger than this are treated as wraparound.
pub const WRAP_THRESHOLD_DEGREES: f64 = 300.0;

/// Sign with `sign(0) = +1`.
#[inline]
pub fn sign_or_positive(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Bound an angle into `(-180, 180]` by removing a multiple of 360 of the same sign.
///
/// ```
/// use six_axis_ik::kinematics::bound_degrees;
///
/// assert_eq!(bound_degrees(190.0), -170.0);
/// assert_eq!(bound_degrees(-180.0), 180.0);
/// assert_eq!(bound_degrees(540.0), 180.0);
/// ```
pub fn bound_degrees(angle: f64) -> f64 {
    let r = fmod(angle, 360.0);
    if r > 180.0 {
        r - 360.0
    } else if r <= -180.0 {
        r + 360.0
    } else {
        r
    }
}

/// Fold into `[-180, 180]` by removing whole turns towards zero.
///
/// Removes the fewest turns that bring `|a|` down to 180 or below, so both
/// `180` and `-180` are fixed points. Unlike [`bound_degrees`] the sign of an
/// exact half turn is kept, and the fold is idempotent.
///
/// This deliberately differs from a parity fold at odd multiples of 180:
/// `540` gives `180` and `-540` gives `-180`, not the opposite half turn.
pub fn fold_degrees(angle: f64) -> f64 {
    let turns = ceil((fabs(angle) - 180.0) / 360.0);
    if turns > 0.0 {
        angle - sign_or_positive(angle) * turns * 360.0
    } else {
        angle
    }
}

/// Bring `current` onto the same turn as `previous`.
///
/// When the two differ by more than [`WRAP_THRESHOLD_DEGREES`], `current` is
/// moved by `sign(previous) · round(|current - previous| / 360) · 360`.
///
/// ```
/// use six_axis_ik::kinematics::accumulate_rotation;
///
/// assert_eq!(accumulate_rotation(-265.0, 94.0), 95.0);
/// assert_eq!(accumulate_rotation(20.0, 94.0), 20.0);
/// ```
pub fn accumulate_rotation(current: f64, previous: f64) -> f64 {
    let delta = fabs(current - previous);
    if delta > WRAP_THRESHOLD_DEGREES {
        current + sign_or_positive(previous) * round(delta / 360.0) * 360.0
    } else {
        current
    }
}

/// Unwrap a short window in place, each sample against its corrected predecessor.
pub fn unwrap_in_place(samples: &mut [f64]) {
    for i in 1..samples.len() {
        samples[i] = accumulate_rotation(samples[i], samples[i - 1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_range() {
        for a in [-900.0, -540.0, -181.0, -180.0, -0.5, 0.0, 179.9, 180.0, 180.1, 359.0, 721.0] {
            let b = bound_degrees(a);
            assert!(b > -180.0 && b <= 180.0, "{} -> {}", a, b);
            let turns = (a - b) / 360.0;
            assert!((turns - turns.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fold_keeps_half_turn_sign() {
        assert_eq!(fold_degrees(0.0), 0.0);
        assert_eq!(fold_degrees(90.0), 90.0);
        assert_eq!(fold_degrees(180.0), 180.0);
        assert_eq!(fold_degrees(-180.0), -180.0);
        assert_eq!(fold_degrees(270.0), -90.0);
        assert_eq!(fold_degrees(-270.0), 90.0);
        assert_eq!(fold_degrees(400.0), 40.0);
        assert_eq!(fold_degrees(540.0), 180.0);
        assert_eq!(fold_degrees(-600.0), 120.0);
        // bound_degrees would give 180 here
        assert_eq!(fold_degrees(-540.0), -180.0);
    }

    #[test]
    fn test_accumulate_documented_case() {
        assert_eq!(accumulate_rotation(-265.0, 94.0), 95.0);
    }

    #[test]
    fn test_accumulate_zero_previous_counts_positive() {
        // delta 330 rounds to one turn, added in the positive direction
        assert_eq!(accumulate_rotation(-330.0, 0.0), 30.0);
    }

    #[test]
    fn test_accumulate_negative_side() {
        assert_eq!(accumulate_rotation(175.0, -178.0), -185.0);
        assert_eq!(accumulate_rotation(170.0, -400.0), -550.0);
    }

    #[test]
    fn test_unwrap_window() {
        let mut w = [170.0, 178.0, -175.0, -168.0, -160.0];
        unwrap_in_place(&mut w);
        assert_eq!(w, [170.0, 178.0, 185.0, 192.0, 200.0]);
    }
}
