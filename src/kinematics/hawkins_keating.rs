//! Closed-form solver for arms without a spherical wrist (Hawkins-Keating).
//!
//! The chain is the usual six-joint DH table with parallel axes 2-4:
//!
//! | joint | a  | alpha | d  |
//! |-------|----|-------|----|
//! | 1     | 0  | +90°  | d1 |
//! | 2     | a2 | 0     | 0  |
//! | 3     | a3 | 0     | 0  |
//! | 4     | 0  | +90°  | d4 |
//! | 5     | 0  | -90°  | d5 |
//! | 6     | 0  | 0     | d6 |

use core::f64::consts::FRAC_PI_2;

use libm::{atan2, cos, fabs, sin, sqrt};
use nalgebra::{Matrix3, Vector3};

use super::pose::Pose;
use super::solver::{checked_acos, ConfigurationFlags, RawBranch};
use crate::config::HawkinsKeatingGeometry;

/// Below this `|sin θ5|` the wrist is singular and θ6 is set to zero.
const WRIST_SINGULARITY: f64 = 1e-10;

/// DH link transform `Rz(θ) · Tz(d) · Tx(a) · Rx(α)` with `α` given by its cosine and sine.
fn link(theta: f64, d: f64, a: f64, cos_alpha: f64, sin_alpha: f64) -> Pose {
    let (s, c) = (sin(theta), cos(theta));
    Pose::new(
        Vector3::new(a * c, a * s, d),
        Matrix3::new(
            c, -s * cos_alpha, s * sin_alpha,
            s, c * cos_alpha, -c * sin_alpha,
            0.0, sin_alpha, cos_alpha,
        ),
    )
}

fn links(g: &HawkinsKeatingGeometry, q: &[f64; 6]) -> [Pose; 6] {
    [
        link(q[0], g.d1, 0.0, 0.0, 1.0),
        link(q[1], 0.0, g.a2, 1.0, 0.0),
        link(q[2], 0.0, g.a3, 1.0, 0.0),
        link(q[3], g.d4, 0.0, 0.0, 1.0),
        link(q[4], g.d5, 0.0, 0.0, -1.0),
        link(q[5], g.d6, 0.0, 1.0, 0.0),
    ]
}

/// Flange pose in the robot base frame for model angles in radians.
pub(crate) fn forward(g: &HawkinsKeatingGeometry, q: &[f64; 6]) -> Pose {
    links(g, q)
        .iter()
        .fold(Pose::identity(), |acc, l| acc.compose(l))
}

/// Branch signs for a configuration.
///
/// `sol_1` picks the shoulder. When it is false the meaning of `sol_2`
/// (elbow) and `sol_3` (wrist) is inverted.
fn branch_signs(flags: ConfigurationFlags) -> (f64, f64, f64) {
    let sign = |b: bool| if b { 1.0 } else { -1.0 };
    let shoulder = sign(flags.sol_1);
    let elbow = sign(flags.sol_2 == flags.sol_1);
    let wrist = sign(flags.sol_3 == flags.sol_1);
    (shoulder, elbow, wrist)
}

/// All eight raw branches, in [`ConfigurationFlags::branch_index`] order.
pub(crate) fn solve_all(g: &HawkinsKeatingGeometry, flange: &Pose) -> [RawBranch; 8] {
    core::array::from_fn(|index| {
        solve_branch(g, flange, ConfigurationFlags::from_branch_index(index))
    })
}

fn solve_branch(g: &HawkinsKeatingGeometry, flange: &Pose, flags: ConfigurationFlags) -> RawBranch {
    let (shoulder, elbow, wrist) = branch_signs(flags);
    let r = &flange.rotation;
    let p = &flange.position;

    // Wrist centre: step back from the flange along the tool axis.
    let p05 = p - flange.z_axis() * g.d6;
    let radius = sqrt(p05.x * p05.x + p05.y * p05.y);
    let (phi, ok1) = checked_acos(g.d4 / radius);
    let t1 = atan2(p05.y, p05.x) + shoulder * phi + FRAC_PI_2;
    let (s1, c1) = (sin(t1), cos(t1));

    let (t5_abs, ok5) = checked_acos((p.x * s1 - p.y * c1 - g.d4) / g.d6);
    let t5 = wrist * t5_abs;
    let s5 = sin(t5);

    let t6 = if fabs(s5) < WRIST_SINGULARITY {
        0.0
    } else {
        atan2(
            (-r[(0, 1)] * s1 + r[(1, 1)] * c1) / s5,
            (r[(0, 0)] * s1 - r[(1, 0)] * c1) / s5,
        )
    };

    // Peel joints 1, 5 and 6 off to leave the planar 2-3-4 chain.
    let t01 = link(t1, g.d1, 0.0, 0.0, 1.0);
    let t45 = link(t5, g.d5, 0.0, 0.0, -1.0);
    let t56 = link(t6, g.d6, 0.0, 1.0, 0.0);
    let t14 = t01
        .inverse()
        .compose(flange)
        .compose(&t56.inverse())
        .compose(&t45.inverse());

    let x = t14.position.x;
    let y = t14.position.y;
    let (t3_abs, ok3) =
        checked_acos((x * x + y * y - g.a2 * g.a2 - g.a3 * g.a3) / (2.0 * g.a2 * g.a3));
    let t3 = elbow * t3_abs;
    let (s3, c3) = (sin(t3), cos(t3));
    let t2 = atan2(y, x) - atan2(g.a3 * s3, g.a2 + g.a3 * c3);

    let t234 = atan2(t14.rotation[(1, 0)], t14.rotation[(0, 0)]);
    let t4 = t234 - t2 - t3;

    RawBranch {
        angles: [t1, t2, t3, t4, t5, t6],
        valid: [ok1, ok1 && ok3, ok1 && ok3, ok1, ok1 && ok5, ok1],
    }
}
