//! # six-axis-ik
//!
//! Closed-form inverse kinematics and joint-trajectory reconciliation for
//! 6-axis serial industrial robots.
//!
//! ## Features
//!
//! - **Two closed-form solvers**: spherical-wrist arms and Hawkins-Keating
//!   (co-bot style) arms, eight branches each
//! - **Configuration matching**: pick the branch that continues a manual pose
//! - **Continuity reconciliation**: remove false ±360° jumps and fit each axis
//!   into its range by a one-turn shift
//! - **Limit checking**: position, velocity, acceleration and jerk, batch or
//!   frame by frame
//! - **no_std compatible**: solving and live preview need no allocator
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use six_axis_ik::{ConfigurationFlags, FrameInput, KeepUnshifted, Robot};
//!
//! let config = six_axis_ik::load_config("cell.toml")?;
//! let robot = Robot::builder().from_config(&config, "left")?.build()?;
//!
//! let report = robot.solve_sequence(&frames, ConfigurationFlags::default(), &mut KeepUnshifted)?;
//! if let Some(records) = report.exportable_records() {
//!     // hand records to program generation
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables whole-trajectory reconciliation and analysis

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod kinematics;
pub mod motion;
pub mod robot;
pub mod trajectory;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisCalibration, LimitTable, RobotGeometry, SystemConfig};
pub use error::{Error, Result};
pub use kinematics::{ConfigurationFlags, IkSolver, JointSolution, Pose};
pub use robot::{LivePreview, Robot, RobotBuilder, RobotSystem};
pub use trajectory::{ContinuityState, FrameInput, TrajectoryRecord};

#[cfg(feature = "alloc")]
pub use robot::TrajectoryReport;
#[cfg(feature = "alloc")]
pub use trajectory::{KeepUnshifted, ShiftResolver};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, DegreesPerSec, DegreesPerSecCubed, DegreesPerSecSquared};
