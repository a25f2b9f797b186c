//! Unit types for joint-space quantities.
//!
//! Provides type-safe representations of joint angles and their time
//! derivatives so configuration values cannot be mixed up.

use serde::Deserialize;

/// Joint angle in degrees.
///
/// Used for configuration and the user-facing API. Solvers work in radians
/// internally and convert at their boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Angular velocity in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct DegreesPerSec(pub f64);

impl DegreesPerSec {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Angular acceleration in degrees per second squared.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct DegreesPerSecSquared(pub f64);

impl DegreesPerSecSquared {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Angular jerk in degrees per second cubed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct DegreesPerSecCubed(pub f64);

impl DegreesPerSecCubed {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}
