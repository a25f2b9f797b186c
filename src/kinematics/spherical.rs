//! Closed-form solver for arms with a spherical wrist.
//!
//! The wrist centre ("pivot") is found by stepping back from the flange along
//! the tool axis by `c4`. Axes 1-3 place the pivot; axes 4-6 take up the
//! remaining orientation.

use core::f64::consts::PI;

use libm::{atan2, cos, sin, sqrt};

use super::pose::Pose;
use super::solver::{checked_acos, RawBranch};
use crate::config::SphericalWristGeometry;

/// All eight raw branches for a flange pose in the robot base frame.
///
/// Order: the two shoulder branches each with two elbow branches (indices
/// 0-3), then the same four with the wrist flipped (indices 4-7).
pub(crate) fn solve_all(g: &SphericalWristGeometry, flange: &Pose) -> [RawBranch; 8] {
    let r = &flange.rotation;
    let c = flange.position - flange.z_axis() * g.c4;

    let radial_sq = c.x * c.x + c.y * c.y - g.b * g.b;
    let shoulder_ok = radial_sq >= 0.0;
    let nx1 = sqrt(if shoulder_ok { radial_sq } else { 0.0 }) - g.a1;

    let tmp1 = atan2(c.y, c.x);
    let tmp2 = atan2(g.b, nx1 + g.a1);
    let theta1_i = tmp1 - tmp2;
    let theta1_ii = tmp1 + tmp2 - PI;

    let tmp3 = c.z - g.c1;
    let s1_2 = nx1 * nx1 + tmp3 * tmp3;
    let tmp4 = nx1 + 2.0 * g.a1;
    let s2_2 = tmp4 * tmp4 + tmp3 * tmp3;
    let kappa_2 = g.a2 * g.a2 + g.c3 * g.c3;
    let c2_2 = g.c2 * g.c2;
    let s1 = sqrt(s1_2);
    let s2 = sqrt(s2_2);

    // Shoulder angle of the planar triangle, front and back reach.
    let (tmp13, ok13) = checked_acos((s1_2 + c2_2 - kappa_2) / (2.0 * s1 * g.c2));
    let tmp14 = atan2(nx1, tmp3);
    let (tmp15, ok15) = checked_acos((s2_2 + c2_2 - kappa_2) / (2.0 * s2 * g.c2));
    let tmp16 = atan2(tmp4, tmp3);

    // Elbow angle.
    let tmp9 = 2.0 * g.c2 * sqrt(kappa_2);
    let tmp10 = atan2(g.a2, g.c3);
    let (tmp11, ok11) = checked_acos((s1_2 - c2_2 - kappa_2) / tmp9);
    let (tmp12, ok12) = checked_acos((s2_2 - c2_2 - kappa_2) / tmp9);

    let arms = [
        (theta1_i, -tmp13 + tmp14, tmp11 - tmp10, ok13, ok11),
        (theta1_i, tmp13 + tmp14, -tmp11 - tmp10, ok13, ok11),
        (theta1_ii, -tmp15 - tmp16, tmp12 - tmp10, ok15, ok12),
        (theta1_ii, tmp15 - tmp16, -tmp12 - tmp10, ok15, ok12),
    ];

    let mut out = [RawBranch::default(); 8];
    for (k, &(t1, t2, t3, ok2, ok3)) in arms.iter().enumerate() {
        let (s1, c1) = (sin(t1), cos(t1));
        let (s23, c23) = (sin(t2 + t3), cos(t2 + t3));

        let m = r[(0, 2)] * s23 * c1 + r[(1, 2)] * s23 * s1 + r[(2, 2)] * c23;
        let (t5, ok5) = checked_acos(m);

        let t4 = atan2(
            r[(1, 2)] * c1 - r[(0, 2)] * s1,
            r[(0, 2)] * c23 * c1 + r[(1, 2)] * c23 * s1 - r[(2, 2)] * s23,
        );
        let t6 = atan2(
            r[(0, 1)] * s23 * c1 + r[(1, 1)] * s23 * s1 + r[(2, 1)] * c23,
            -r[(0, 0)] * s23 * c1 - r[(1, 0)] * s23 * s1 - r[(2, 0)] * c23,
        );

        let valid = [shoulder_ok, ok2, ok3, true, ok5, true];
        out[k] = RawBranch {
            angles: [t1, t2, t3, t4, t5, t6],
            valid,
        };
        out[k + 4] = RawBranch {
            angles: [t1, t2, t3, t4 + PI, -t5, t6 - PI],
            valid,
        };
    }
    out
}

/// Flange pose in the robot base frame for model angles in radians.
pub(crate) fn forward(g: &SphericalWristGeometry, q: &[f64; 6]) -> Pose {
    let psi3 = atan2(g.a2, g.c3);
    let k = sqrt(g.a2 * g.a2 + g.c3 * g.c3);

    let cx1 = g.c2 * sin(q[1]) + k * sin(q[1] + q[2] + psi3) + g.a1;
    let cy1 = g.b;
    let cz1 = g.c2 * cos(q[1]) + k * cos(q[1] + q[2] + psi3);

    let (s1, c1) = (sin(q[0]), cos(q[0]));
    let (s2, c2) = (sin(q[1]), cos(q[1]));
    let (s3, c3) = (sin(q[2]), cos(q[2]));
    let (s4, c4) = (sin(q[3]), cos(q[3]));
    let (s5, c5) = (sin(q[4]), cos(q[4]));
    let (s6, c6) = (sin(q[5]), cos(q[5]));

    let pivot = nalgebra::Vector3::new(cx1 * c1 - cy1 * s1, cx1 * s1 + cy1 * c1, cz1 + g.c1);

    let r_0c = nalgebra::Matrix3::new(
        c1 * c2 * c3 - c1 * s2 * s3, -s1, c1 * c2 * s3 + c1 * s2 * c3,
        s1 * c2 * c3 - s1 * s2 * s3, c1, s1 * c2 * s3 + s1 * s2 * c3,
        -s2 * c3 - c2 * s3, 0.0, -s2 * s3 + c2 * c3,
    );
    let r_ce = nalgebra::Matrix3::new(
        c4 * c5 * c6 - s4 * s6, -c4 * c5 * s6 - s4 * c6, c4 * s5,
        s4 * c5 * c6 + c4 * s6, -s4 * c5 * s6 + c4 * c6, s4 * s5,
        -s5 * c6, s5 * s6, c5,
    );

    let rotation = r_0c * r_ce;
    let position = pivot + rotation.column(2) * g.c4;
    Pose::new(position, rotation)
}
