//! Axis limit configuration and types.

use core::fmt;

use serde::Deserialize;

use super::calibration::AxisCalibration;
use crate::error::{ConfigError, Error, Result};

/// Policy for handling limit violations found in a solved trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationPolicy {
    /// Any violation makes the trajectory unfit for export.
    #[default]
    Abort,
    /// Violations are advisory; warn and continue.
    Warn,
}

/// Derivative order a limit or violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DerivativeOrder {
    /// Joint angle (degrees).
    Position,
    /// Degrees per second.
    Velocity,
    /// Degrees per second squared.
    Acceleration,
    /// Degrees per second cubed.
    Jerk,
}

impl DerivativeOrder {
    /// All orders, lowest first.
    pub const ALL: [DerivativeOrder; 4] = [
        DerivativeOrder::Position,
        DerivativeOrder::Velocity,
        DerivativeOrder::Acceleration,
        DerivativeOrder::Jerk,
    ];

    /// Number of time derivatives taken.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            DerivativeOrder::Position => 0,
            DerivativeOrder::Velocity => 1,
            DerivativeOrder::Acceleration => 2,
            DerivativeOrder::Jerk => 3,
        }
    }

    /// Lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            DerivativeOrder::Position => "position",
            DerivativeOrder::Velocity => "velocity",
            DerivativeOrder::Acceleration => "acceleration",
            DerivativeOrder::Jerk => "jerk",
        }
    }
}

impl fmt::Display for DerivativeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed `[min, max]` range for one axis and one derivative order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Minimum allowed value.
    pub min: f64,
    /// Maximum allowed value.
    pub max: f64,
}

impl AxisRange {
    /// Range that accepts every finite value.
    pub const UNBOUNDED: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Create a new range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Symmetric range `[-limit, limit]`.
    pub fn symmetric(limit: f64) -> Self {
        Self {
            min: -limit,
            max: limit,
        }
    }

    /// Check if the range is valid (min <= max, no NaN).
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Check if a value is within the range.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The bound `value` exceeds, if any.
    #[inline]
    pub fn exceeded_bound(&self, value: f64) -> Option<f64> {
        if value < self.min {
            Some(self.min)
        } else if value > self.max {
            Some(self.max)
        } else {
            None
        }
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Per-axis ranges for position, velocity, acceleration and jerk.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LimitTable {
    ranges: [[AxisRange; 6]; 4],
}

impl LimitTable {
    /// Table with every range unbounded.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create a table from position ranges only.
    pub fn from_positions(position: [AxisRange; 6]) -> Self {
        let mut table = Self::default();
        table.ranges[DerivativeOrder::Position.index()] = position;
        table
    }

    /// Set the ranges for one derivative order.
    pub fn with(mut self, order: DerivativeOrder, ranges: [AxisRange; 6]) -> Self {
        self.ranges[order.index()] = ranges;
        self
    }

    /// Range for an axis and order.
    #[inline]
    pub fn range(&self, order: DerivativeOrder, axis: usize) -> AxisRange {
        self.ranges[order.index()][axis]
    }

    /// All six ranges of one order.
    #[inline]
    pub fn ranges(&self, order: DerivativeOrder) -> &[AxisRange; 6] {
        &self.ranges[order.index()]
    }

    /// Position range of an axis.
    #[inline]
    pub fn position(&self, axis: usize) -> AxisRange {
        self.range(DerivativeOrder::Position, axis)
    }

    /// Check that every range is well-formed.
    pub fn validate(&self) -> Result<()> {
        for order in DerivativeOrder::ALL {
            for (axis, range) in self.ranges(order).iter().enumerate() {
                if !range.is_valid() {
                    return Err(Error::Config(ConfigError::InvalidAxisRange {
                        axis,
                        order: order.name(),
                        min: range.min,
                        max: range.max,
                    }));
                }
            }
        }
        Ok(())
    }

    /// Which axes alias under per-frame solving and need reconciliation.
    ///
    /// An axis is flagged when its position range, expressed in the solver
    /// model frame, reaches beyond ±180°.
    pub fn reconcile_flags(&self, calibration: &[AxisCalibration; 6]) -> [bool; 6] {
        core::array::from_fn(|axis| {
            let range = self.position(axis);
            let a = calibration[axis].remove(range.min);
            let b = calibration[axis].remove(range.max);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            lo < -180.0 || hi > 180.0
        })
    }
}
