//! Configuration module for six-axis-ik.
//!
//! Provides types for loading and validating robot geometry, calibration and
//! axis limits from TOML files (with `std` feature) or pre-built values.

mod calibration;
mod geometry;
mod limits;
mod robot;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use calibration::{apply_all, remove_all, AxisCalibration};
pub use geometry::{HawkinsKeatingGeometry, RobotGeometry, SolverKind, SphericalWristGeometry};
pub use limits::{AxisRange, DerivativeOrder, LimitTable, ViolationPolicy};
pub use robot::{AxisConfig, RobotConfig};
pub use system::{SystemConfig, MAX_ROBOTS};
pub use validation::{validate_calibration, validate_config, validate_robot};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, DegreesPerSec, DegreesPerSecCubed, DegreesPerSecSquared};
