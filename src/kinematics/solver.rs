//! Solver dispatch, configuration flags and joint solutions.

use libm::{acos, fabs};

use super::angle::bound_degrees;
use super::pose::Pose;
use super::{hawkins_keating, spherical};
use crate::config::{HawkinsKeatingGeometry, RobotGeometry, SolverKind, SphericalWristGeometry};

/// Slack allowed on an `acos` argument before the branch counts as unreachable.
const ACOS_SLACK: f64 = 1e-9;

/// `acos` with the argument clamped to `[-1, 1]`.
///
/// The flag is false when the argument was outside the domain (or NaN); the
/// angle is then the boundary value of the clamp.
pub(crate) fn checked_acos(x: f64) -> (f64, bool) {
    if x.is_nan() {
        log::trace!("acos argument is NaN, substituting 0");
        return (0.0, false);
    }
    let ok = fabs(x) <= 1.0 + ACOS_SLACK;
    if !ok {
        log::trace!("acos argument {} clamped", x);
    }
    (acos(x.clamp(-1.0, 1.0)), ok)
}

/// Raw branch in radians, straight from a closed form.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RawBranch {
    pub angles: [f64; 6],
    pub valid: [bool; 6],
}

/// Three booleans selecting one of the eight raw branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigurationFlags {
    /// Shoulder: front (`true`) or back reach.
    pub sol_1: bool,
    /// Elbow branch.
    pub sol_2: bool,
    /// Wrist branch (`false` flips axis 5).
    pub sol_3: bool,
}

impl ConfigurationFlags {
    /// Create flags.
    pub const fn new(sol_1: bool, sol_2: bool, sol_3: bool) -> Self {
        Self { sol_1, sol_2, sol_3 }
    }

    /// Position of this configuration in the branch enumeration.
    ///
    /// `4 · !sol_3 + 2 · !sol_1 + !sol_2`, so `{1,1,1}` is branch 0.
    pub const fn branch_index(self) -> usize {
        (!self.sol_3 as usize) * 4 + (!self.sol_1 as usize) * 2 + (!self.sol_2 as usize)
    }

    /// Flags of the branch at `index` (taken modulo 8).
    pub const fn from_branch_index(index: usize) -> Self {
        let index = index % 8;
        Self {
            sol_1: index & 2 == 0,
            sol_2: index & 1 == 0,
            sol_3: index & 4 == 0,
        }
    }

    /// All eight configurations in enumeration order.
    pub fn all() -> [Self; 8] {
        core::array::from_fn(Self::from_branch_index)
    }
}

impl Default for ConfigurationFlags {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

/// Six joint angles in degrees, each tagged with whether its closed form was defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSolution {
    /// Angles in `(-180, 180]`.
    pub angles: [f64; 6],
    /// False where an inverse-trig argument had to be clamped.
    pub valid: [bool; 6],
}

impl JointSolution {
    /// True when every axis is valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid.iter().all(|v| *v)
    }

    /// Angles in radians.
    pub fn radians(&self) -> [f64; 6] {
        core::array::from_fn(|i| self.angles[i].to_radians())
    }

    fn from_raw(raw: &RawBranch) -> Self {
        Self {
            angles: core::array::from_fn(|i| bound_degrees(raw.angles[i].to_degrees())),
            valid: raw.valid,
        }
    }
}

/// All eight branches, indexed by [`ConfigurationFlags::branch_index`].
pub type Solutions = [JointSolution; 8];

/// Closed-form inverse kinematics for one of the supported arm models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IkSolver {
    /// Spherical-wrist arm.
    SphericalWrist(SphericalWristGeometry),
    /// Hawkins-Keating (non-spherical wrist) arm.
    HawkinsKeating(HawkinsKeatingGeometry),
}

impl IkSolver {
    /// Solver for a robot geometry.
    pub fn new(geometry: RobotGeometry) -> Self {
        match geometry {
            RobotGeometry::SphericalWrist(g) => IkSolver::SphericalWrist(g),
            RobotGeometry::HawkinsKeating(g) => IkSolver::HawkinsKeating(g),
        }
    }

    /// Which model this is.
    pub fn kind(&self) -> SolverKind {
        match self {
            IkSolver::SphericalWrist(_) => SolverKind::SphericalWrist,
            IkSolver::HawkinsKeating(_) => SolverKind::HawkinsKeating,
        }
    }

    /// All eight branches for a flange pose in the robot base frame.
    pub fn solve_flange_all(&self, flange: &Pose) -> Solutions {
        let raw = match self {
            IkSolver::SphericalWrist(g) => spherical::solve_all(g, flange),
            IkSolver::HawkinsKeating(g) => hawkins_keating::solve_all(g, flange),
        };
        core::array::from_fn(|i| JointSolution::from_raw(&raw[i]))
    }

    /// All eight branches for a target, given the TCP in the flange and the
    /// robot base in the world.
    pub fn solve_all(&self, tcp: &Pose, lcs: &Pose, target: &Pose) -> Solutions {
        self.solve_flange_all(&flange_in_base(tcp, lcs, target))
    }

    /// The branch selected by `flags`.
    pub fn solve(
        &self,
        tcp: &Pose,
        lcs: &Pose,
        target: &Pose,
        flags: ConfigurationFlags,
    ) -> JointSolution {
        self.solve_all(tcp, lcs, target)[flags.branch_index()]
    }

    /// Flange pose in the robot base frame for model angles in degrees.
    pub fn forward_flange(&self, angles: &[f64; 6]) -> Pose {
        let q: [f64; 6] = core::array::from_fn(|i| angles[i].to_radians());
        match self {
            IkSolver::SphericalWrist(g) => spherical::forward(g, &q),
            IkSolver::HawkinsKeating(g) => hawkins_keating::forward(g, &q),
        }
    }

    /// TCP pose in the world for model angles in degrees.
    pub fn forward(&self, angles: &[f64; 6], tcp: &Pose, lcs: &Pose) -> Pose {
        lcs.compose(&self.forward_flange(angles)).compose(tcp)
    }
}

impl From<RobotGeometry> for IkSolver {
    fn from(geometry: RobotGeometry) -> Self {
        Self::new(geometry)
    }
}

/// Flange in the robot base frame: `lcs⁻¹ · target · tcp⁻¹`.
pub fn flange_in_base(tcp: &Pose, lcs: &Pose, target: &Pose) -> Pose {
    lcs.inverse().compose(target).compose(&tcp.inverse())
}

/// Solve one configuration for a robot geometry.
///
/// The solver model is the one the geometry is tagged with.
pub fn solve(
    tcp: &Pose,
    lcs: &Pose,
    target: &Pose,
    geometry: &RobotGeometry,
    flags: ConfigurationFlags,
) -> JointSolution {
    IkSolver::new(*geometry).solve(tcp, lcs, target, flags)
}
