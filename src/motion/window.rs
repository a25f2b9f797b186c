//! Frame-synchronous motion estimates for live preview.

use heapless::Vec;

use super::checker::{check_sample, Violation};
use super::derivative::{five_point_stencil, StencilEstimate};
use super::statistics::MotionStatistics;
use crate::config::{DerivativeOrder, LimitTable};
use crate::error::{Result, SequenceError};

/// Samples held by a [`StencilWindow`].
pub const WINDOW_LEN: usize = 5;

/// Upper bound on violations from one window: six axes, four orders.
pub const MAX_WINDOW_VIOLATIONS: usize = 24;

/// One frame of robot angles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowSample {
    /// Frame index.
    pub frame_index: usize,
    /// Frame time.
    pub time_seconds: f64,
    /// Joint angles in degrees.
    pub axes: [f64; 6],
}

/// The last five frames, evaluated at the centre one.
///
/// Frames are assumed equally spaced by `dt`, as produced by a fixed
/// animation frame rate.
#[derive(Debug, Clone)]
pub struct StencilWindow {
    dt: f64,
    samples: [WindowSample; WINDOW_LEN],
    len: usize,
}

impl StencilWindow {
    /// Create an empty window.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not positive and finite.
    pub fn new(dt: f64) -> Result<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SequenceError::InvalidStep(dt).into());
        }
        Ok(Self {
            dt,
            samples: [WindowSample::default(); WINDOW_LEN],
            len: 0,
        })
    }

    /// Sample spacing in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of frames held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True before the first push.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once five frames are held.
    pub fn is_ready(&self) -> bool {
        self.len == WINDOW_LEN
    }

    /// Drop all frames, e.g. after a scrub in the timeline.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Append a frame, evicting the oldest once full.
    pub fn push(&mut self, frame_index: usize, time_seconds: f64, axes: [f64; 6]) {
        let sample = WindowSample {
            frame_index,
            time_seconds,
            axes,
        };
        if self.len < WINDOW_LEN {
            self.samples[self.len] = sample;
            self.len += 1;
        } else {
            self.samples.rotate_left(1);
            self.samples[WINDOW_LEN - 1] = sample;
        }
    }

    /// The frame the estimates refer to.
    pub fn centre(&self) -> Option<&WindowSample> {
        if self.is_ready() {
            Some(&self.samples[WINDOW_LEN / 2])
        } else {
            None
        }
    }

    /// Per-axis velocity, acceleration and jerk at the centre frame.
    pub fn estimate(&self) -> Option<[StencilEstimate; 6]> {
        if !self.is_ready() {
            return None;
        }
        let mut out = [StencilEstimate::default(); 6];
        for (axis, estimate) in out.iter_mut().enumerate() {
            let column = core::array::from_fn(|i| self.samples[i].axes[axis]);
            *estimate = five_point_stencil(column, self.dt).ok()?;
        }
        Some(out)
    }

    /// Violations at the centre frame, position included.
    pub fn check(&self, limits: &LimitTable) -> Vec<Violation, MAX_WINDOW_VIOLATIONS> {
        let mut found = Vec::new();
        self.for_each_value(|order, axis, sample, value| {
            if let Some(v) = check_sample(
                limits,
                order,
                axis,
                sample.frame_index,
                sample.time_seconds,
                value,
            ) {
                // capacity covers every axis and order
                let _ = found.push(v);
            }
        });
        found
    }

    /// Fold the centre frame into running statistics.
    pub fn record(&self, statistics: &mut MotionStatistics) {
        self.for_each_value(|order, axis, sample, value| {
            statistics.record(order, axis, value, sample.frame_index);
        });
    }

    fn for_each_value(&self, mut f: impl FnMut(DerivativeOrder, usize, &WindowSample, f64)) {
        let (Some(centre), Some(estimates)) = (self.centre(), self.estimate()) else {
            return;
        };
        for order in DerivativeOrder::ALL {
            for (axis, estimate) in estimates.iter().enumerate() {
                let value = match order {
                    DerivativeOrder::Position => Some(centre.axes[axis]),
                    _ => estimate.get(order.index()),
                };
                if let Some(value) = value {
                    f(order, axis, centre, value);
                }
            }
        }
    }
}
