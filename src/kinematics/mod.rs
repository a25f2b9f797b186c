//! Kinematics: poses, frame conversion, closed-form solvers and branch matching.
//!
//! Everything here is allocation free and stateless per call.

mod angle;
mod hawkins_keating;
mod matcher;
mod pose;
mod solver;
mod spherical;

pub use angle::{
    accumulate_rotation, bound_degrees, fold_degrees, sign_or_positive, unwrap_in_place,
    WRAP_THRESHOLD_DEGREES,
};
pub use matcher::{branch_distance, find_closest_config, normalize};
pub use pose::{FrameConverter, Pose};
pub use solver::{flange_in_base, solve, ConfigurationFlags, IkSolver, JointSolution, Solutions};
