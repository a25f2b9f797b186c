//! Robot module for six-axis-ik.
//!
//! Ties the solver, calibration, reconciliation and limit checking into
//! one configured robot.

mod arm;
mod builder;
mod preview;
#[cfg(feature = "alloc")]
mod report;
mod system;

pub use arm::Robot;
pub use builder::RobotBuilder;
pub use preview::{LivePreview, PreviewFrame};
#[cfg(feature = "alloc")]
pub use report::TrajectoryReport;
pub use system::RobotSystem;
