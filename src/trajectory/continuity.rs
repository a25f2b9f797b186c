//! Frame-to-frame continuity of solver angles.

use crate::kinematics::accumulate_rotation;

/// The `PreviousValue[6]` accumulator.
///
/// Solver angles are only defined modulo 360°. For axes whose range reaches
/// past ±180° each new angle is moved onto the turn of the previous corrected
/// one, so a continuous motion stays continuous. Feed frames strictly in time
/// order; call [`ContinuityState::reset`] when the timeline jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuityState {
    flags: [bool; 6],
    previous: [Option<f64>; 6],
}

impl ContinuityState {
    /// Accumulate only the flagged axes.
    pub const fn new(flags: [bool; 6]) -> Self {
        Self {
            flags,
            previous: [None; 6],
        }
    }

    /// Accumulate every axis.
    pub const fn all_axes() -> Self {
        Self::new([true; 6])
    }

    /// Which axes are accumulated.
    pub fn flags(&self) -> [bool; 6] {
        self.flags
    }

    /// Last corrected value per axis.
    pub fn previous(&self) -> [Option<f64>; 6] {
        self.previous
    }

    /// Forget history; the next frame is taken as is.
    pub fn reset(&mut self) {
        self.previous = [None; 6];
    }

    /// Correct one axis value against its predecessor.
    pub fn accumulate_axis(&mut self, axis: usize, raw: f64) -> f64 {
        let corrected = match self.previous[axis] {
            Some(previous) if self.flags[axis] => accumulate_rotation(raw, previous),
            _ => raw,
        };
        self.previous[axis] = Some(corrected);
        corrected
    }

    /// Correct all six axes of a frame.
    pub fn accumulate(&mut self, raw: &[f64; 6]) -> [f64; 6] {
        core::array::from_fn(|axis| self.accumulate_axis(axis, raw[axis]))
    }
}

impl Default for ContinuityState {
    fn default() -> Self {
        Self::all_axes()
    }
}
