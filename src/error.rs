//! Error types for six-axis-ik.
//!
//! Only configuration and malformed input sequences are reported as errors.
//! Unreachable poses, unresolvable axes and limit violations are returned as
//! flagged data so a best-effort angle set is always available.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all six-axis-ik operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Malformed sampled-frame sequence
    Sequence(SequenceError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Robot name not found in configuration
    RobotNotFound(heapless::String<32>),
    /// Duplicate robot name in configuration
    DuplicateRobotName(heapless::String<32>),
    /// Link length is not finite, negative, or a required link is zero
    InvalidLinkLength {
        /// Link name (`a1`, `c2`, `d6`, ...)
        link: &'static str,
        /// Offending value
        value: f64,
    },
    /// Axis range has min > max or a non-finite bound
    InvalidAxisRange {
        /// Axis index (0-based)
        axis: usize,
        /// Derivative order the range belongs to
        order: &'static str,
        /// Minimum value
        min: f64,
        /// Maximum value
        max: f64,
    },
    /// Calibration offset is not finite
    InvalidOffset {
        /// Axis index (0-based)
        axis: usize,
        /// Offending value
        value: f64,
    },
    /// Builder was missing a required part
    Incomplete(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Errors raised by sequence processing (reconciliation, differentiation).
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceError {
    /// No frames were supplied
    Empty,
    /// Frame time does not strictly increase
    NonIncreasingTime {
        /// Index (position in the sequence) of the offending frame
        frame: usize,
        /// Time of the previous frame
        previous: f64,
        /// Time of the offending frame
        current: f64,
    },
    /// Parallel series have different lengths
    LengthMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },
    /// Step size for a stencil must be positive and finite
    InvalidStep(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Sequence(e) => write!(f, "Sequence error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::RobotNotFound(name) => write!(f, "Robot '{}' not found", name),
            ConfigError::DuplicateRobotName(name) => write!(f, "Duplicate robot name: '{}'", name),
            ConfigError::InvalidLinkLength { link, value } => {
                write!(f, "Invalid link length {} = {}", link, value)
            }
            ConfigError::InvalidAxisRange { axis, order, min, max } => {
                write!(
                    f,
                    "Invalid {} range on axis {}: min ({}) must be <= max ({})",
                    order,
                    axis + 1,
                    min,
                    max
                )
            }
            ConfigError::InvalidOffset { axis, value } => {
                write!(f, "Invalid calibration offset on axis {}: {}", axis + 1, value)
            }
            ConfigError::Incomplete(part) => write!(f, "Robot is missing {}", part),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Empty => write!(f, "Sequence is empty"),
            SequenceError::NonIncreasingTime { frame, previous, current } => {
                write!(
                    f,
                    "Frame {} at t={} does not follow previous frame at t={}",
                    frame, current, previous
                )
            }
            SequenceError::LengthMismatch { expected, actual } => {
                write!(f, "Series length {} does not match expected {}", actual, expected)
            }
            SequenceError::InvalidStep(dt) => write!(f, "Invalid step size {}", dt),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<SequenceError> for Error {
    fn from(e: SequenceError) -> Self {
        Error::Sequence(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}
