//! Whole-trajectory reconciliation of per-frame solver angles.
//!
//! Each axis goes through three phases:
//!
//! 1. **Unreconciled**: no frame seen yet.
//! 2. **Accumulating**: raw angles are fed in time order and moved onto the
//!    turn of the previous corrected value (flagged axes only), then mapped to
//!    robot angles through the axis calibration.
//! 3. **Bounded**: the finished series is shifted by one turn, if needed
//!    and possible, so it fits the axis position range.
//!
//! A shift adds the same constant to every frame, so velocities and higher
//! derivatives are untouched.

use alloc::vec::Vec;

use super::continuity::ContinuityState;
use super::frame::SampledFrame;
use crate::config::{AxisCalibration, AxisRange, LimitTable};
use crate::error::Result;
use crate::motion::validate_times;

/// Maximum number of candidate shifts offered for one axis: one turn down and one up.
pub const MAX_SHIFT_OPTIONS: usize = 2;

const TURN: f64 = 360.0;

/// Where an axis is in the reconciliation process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPhase {
    /// No frame processed.
    Unreconciled,
    /// Frames are being accumulated.
    Accumulating,
    /// Range handling is done; the series is final.
    Bounded,
}

/// A one-turn shift that brings an axis inside its position range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftOption {
    /// Number of turns added (negative shifts down).
    pub turns: i32,
    /// Minimum of the shifted series.
    pub min: f64,
    /// Maximum of the shifted series.
    pub max: f64,
}

impl ShiftOption {
    /// Shift in degrees.
    #[inline]
    pub fn offset_degrees(&self) -> f64 {
        self.turns as f64 * TURN
    }
}

/// Picks one of several valid shifts for an axis.
///
/// Called synchronously during reconciliation. Returning `None` (or an index
/// out of range) keeps the unshifted series.
pub trait ShiftResolver {
    /// Choose an index into `options`, preferred direction first.
    fn choose(&mut self, axis: usize, options: &[ShiftOption]) -> Option<usize>;
}

/// Resolver that never picks a shift.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepUnshifted;

impl ShiftResolver for KeepUnshifted {
    fn choose(&mut self, _axis: usize, _options: &[ShiftOption]) -> Option<usize> {
        None
    }
}

impl<F> ShiftResolver for F
where
    F: FnMut(usize, &[ShiftOption]) -> Option<usize>,
{
    fn choose(&mut self, axis: usize, options: &[ShiftOption]) -> Option<usize> {
        self(axis, options)
    }
}

/// Outcome of reconciling one axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisReconciliation {
    /// Axis range stays within ±180° in the solver model; nothing to do.
    NotFlagged,
    /// Accumulated series already fits.
    WithinLimits,
    /// Exactly one shift fits and was applied.
    Shifted {
        /// Turns added.
        turns: i32,
    },
    /// Shifts in both directions fit; the resolver was asked.
    Ambiguous {
        /// Candidates, preferred direction first.
        options: heapless::Vec<ShiftOption, MAX_SHIFT_OPTIONS>,
        /// Index the resolver picked; `None` keeps the series unshifted.
        chosen: Option<usize>,
    },
    /// No one-turn shift fits; the series is left as accumulated.
    Unresolvable {
        /// Minimum of the accumulated series.
        min: f64,
        /// Maximum of the accumulated series.
        max: f64,
    },
}

impl AxisReconciliation {
    /// Turns actually added to the series.
    pub fn applied_turns(&self) -> i32 {
        match self {
            AxisReconciliation::Shifted { turns } => *turns,
            AxisReconciliation::Ambiguous {
                options,
                chosen: Some(i),
            } => options.get(*i).map_or(0, |o| o.turns),
            _ => 0,
        }
    }

    /// True when the series is expected to respect the position range.
    pub fn fits(&self) -> bool {
        match self {
            AxisReconciliation::NotFlagged
            | AxisReconciliation::WithinLimits
            | AxisReconciliation::Shifted { .. } => true,
            AxisReconciliation::Ambiguous { chosen, .. } => chosen.is_some(),
            AxisReconciliation::Unresolvable { .. } => false,
        }
    }
}

/// One-turn shifts that fit `[min, max]` into `range`.
///
/// The direction needing the smaller correction comes first: down when there
/// is less slack above the series than below it, up otherwise. Only shifts
/// whose shifted series lies inside `range` are returned.
pub fn shift_options(min: f64, max: f64, range: AxisRange) -> heapless::Vec<ShiftOption, MAX_SHIFT_OPTIONS> {
    let above = range.max - max;
    let below = min - range.min;
    let order: [i32; MAX_SHIFT_OPTIONS] = if above < below { [-1, 1] } else { [1, -1] };

    let mut options = heapless::Vec::<ShiftOption, MAX_SHIFT_OPTIONS>::new();
    for turns in order {
        let offset = turns as f64 * TURN;
        let option = ShiftOption {
            turns,
            min: min + offset,
            max: max + offset,
        };
        if option.min >= range.min && option.max <= range.max {
            let _ = options.push(option);
        }
    }
    options
}

/// One axis moving through [`AxisPhase`].
#[derive(Debug, Clone)]
pub struct AxisTrack {
    axis: usize,
    phase: AxisPhase,
    flagged: bool,
    calibration: AxisCalibration,
    continuity: ContinuityState,
    values: Vec<f64>,
}

impl AxisTrack {
    /// New track for `axis`.
    pub fn new(axis: usize, flagged: bool, calibration: AxisCalibration) -> Self {
        let mut flags = [false; 6];
        flags[axis] = flagged;
        Self {
            axis,
            phase: AxisPhase::Unreconciled,
            flagged,
            calibration,
            continuity: ContinuityState::new(flags),
            values: Vec::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> AxisPhase {
        self.phase
    }

    /// Robot angles so far.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Feed the next raw solver angle. Ignored once bounded.
    pub fn push(&mut self, raw: f64) {
        if self.phase == AxisPhase::Bounded {
            return;
        }
        self.phase = AxisPhase::Accumulating;
        let model = self.continuity.accumulate_axis(self.axis, raw);
        self.values.push(self.calibration.apply(model));
    }

    /// Fit the series into `range` and finish the track.
    pub fn bound<R>(&mut self, range: AxisRange, resolver: &mut R) -> AxisReconciliation
    where
        R: ShiftResolver + ?Sized,
    {
        self.phase = AxisPhase::Bounded;
        if !self.flagged {
            return AxisReconciliation::NotFlagged;
        }

        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        if min >= range.min && max <= range.max {
            return AxisReconciliation::WithinLimits;
        }

        let options = shift_options(min, max, range);
        self.settle(options, min, max, range, resolver)
    }

    fn settle<R>(
        &mut self,
        options: heapless::Vec<ShiftOption, MAX_SHIFT_OPTIONS>,
        min: f64,
        max: f64,
        range: AxisRange,
        resolver: &mut R,
    ) -> AxisReconciliation
    where
        R: ShiftResolver + ?Sized,
    {
        match options.len() {
            0 => {
                log::warn!(
                    "axis {}: range [{:.1}, {:.1}] cannot be shifted into [{:.1}, {:.1}]",
                    self.axis + 1,
                    min,
                    max,
                    range.min,
                    range.max
                );
                AxisReconciliation::Unresolvable { min, max }
            }
            1 => {
                let turns = options[0].turns;
                log::debug!("axis {}: shifting by {} turn(s)", self.axis + 1, turns);
                self.shift(options[0].offset_degrees());
                AxisReconciliation::Shifted { turns }
            }
            _ => {
                let chosen = resolver
                    .choose(self.axis, &options)
                    .filter(|i| *i < options.len());
                match chosen {
                    Some(i) => {
                        log::debug!(
                            "axis {}: shift of {} turn(s) chosen",
                            self.axis + 1,
                            options[i].turns
                        );
                        self.shift(options[i].offset_degrees());
                    }
                    None => log::warn!(
                        "axis {}: shifts up and down both fit, keeping unshifted",
                        self.axis + 1
                    ),
                }
                AxisReconciliation::Ambiguous { options, chosen }
            }
        }
    }

    fn shift(&mut self, offset: f64) {
        self.values.iter_mut().for_each(|v| *v += offset);
    }

    /// Take the robot angles.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Result of reconciling a trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// Robot angles per frame, in input order.
    pub axes: Vec<[f64; 6]>,
    /// What happened to each axis.
    pub outcomes: [AxisReconciliation; 6],
}

/// Turns raw per-frame solver angles into a continuous robot trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciler {
    calibration: [AxisCalibration; 6],
    limits: LimitTable,
    flags: [bool; 6],
}

impl Reconciler {
    /// Reconciler for a calibration and limit table. Axis flags are computed here, once.
    pub fn new(calibration: [AxisCalibration; 6], limits: LimitTable) -> Self {
        let flags = limits.reconcile_flags(&calibration);
        Self {
            calibration,
            limits,
            flags,
        }
    }

    /// Axes that get accumulated and bounded.
    pub fn flags(&self) -> [bool; 6] {
        self.flags
    }

    /// A streaming accumulator with the same axis flags.
    pub fn continuity_state(&self) -> ContinuityState {
        ContinuityState::new(self.flags)
    }

    /// Reconcile a sequence of frames.
    ///
    /// # Errors
    ///
    /// Fails when `frames` is empty or its times do not strictly increase.
    pub fn reconcile<R>(&self, frames: &[SampledFrame], resolver: &mut R) -> Result<Reconciliation>
    where
        R: ShiftResolver + ?Sized,
    {
        validate_times(frames.iter().map(|f| f.time_seconds))?;

        let mut tracks: [AxisTrack; 6] =
            core::array::from_fn(|axis| AxisTrack::new(axis, self.flags[axis], self.calibration[axis]));
        for frame in frames {
            for (track, raw) in tracks.iter_mut().zip(frame.raw_axes) {
                track.push(raw);
            }
        }

        let outcomes: [AxisReconciliation; 6] = core::array::from_fn(|axis| {
            tracks[axis].bound(self.limits.position(axis), resolver)
        });

        let columns = tracks.map(AxisTrack::into_values);
        let axes = (0..frames.len())
            .map(|i| core::array::from_fn(|axis| columns[axis][i]))
            .collect();

        Ok(Reconciliation { axes, outcomes })
    }
}
