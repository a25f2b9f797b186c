//! Kinematic limit checking over a sampled joint trajectory.

use crate::config::{DerivativeOrder, LimitTable};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use super::derivative::{differentiate_in_place, validate_times};
#[cfg(feature = "alloc")]
use super::statistics::MotionStatistics;
#[cfg(feature = "alloc")]
use crate::error::{Result, SequenceError};

/// A sample outside its `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Violation {
    /// Axis index (0-based).
    pub axis: usize,
    /// Frame the sample belongs to.
    pub frame_index: usize,
    /// Time of the frame.
    pub time_seconds: f64,
    /// Which derivative was out of range.
    pub order: DerivativeOrder,
    /// Observed value.
    pub observed: f64,
    /// The bound that was crossed.
    pub exceeded_limit: f64,
}

/// Check one value against the table.
pub fn check_sample(
    limits: &LimitTable,
    order: DerivativeOrder,
    axis: usize,
    frame_index: usize,
    time_seconds: f64,
    observed: f64,
) -> Option<Violation> {
    limits
        .range(order, axis)
        .exceeded_bound(observed)
        .map(|exceeded_limit| Violation {
            axis,
            frame_index,
            time_seconds,
            order,
            observed,
            exceeded_limit,
        })
}

/// Six joint-angle series sharing frame indices and time stamps.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotionSeries {
    frame_indices: Vec<usize>,
    times: Vec<f64>,
    axes: [Vec<f64>; 6],
}

#[cfg(feature = "alloc")]
impl MotionSeries {
    /// Create a series.
    ///
    /// # Errors
    ///
    /// Fails when the lengths differ or the times do not strictly increase.
    pub fn new(frame_indices: Vec<usize>, times: Vec<f64>, axes: [Vec<f64>; 6]) -> Result<Self> {
        validate_times(times.iter().copied())?;
        for len in core::iter::once(frame_indices.len()).chain(axes.iter().map(Vec::len)) {
            if len != times.len() {
                return Err(SequenceError::LengthMismatch {
                    expected: times.len(),
                    actual: len,
                }
                .into());
            }
        }
        Ok(Self {
            frame_indices,
            times,
            axes,
        })
    }

    /// Collect `(frame_index, time_seconds, axes)` samples.
    pub fn from_samples<I>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f64, [f64; 6])>,
    {
        let mut frame_indices = Vec::new();
        let mut times = Vec::new();
        let mut axes: [Vec<f64>; 6] = Default::default();
        for (frame, time, values) in samples {
            frame_indices.push(frame);
            times.push(time);
            for (series, value) in axes.iter_mut().zip(values) {
                series.push(value);
            }
        }
        Self::new(frame_indices, times, axes)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when there are no samples. Never the case for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time stamps.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Frame indices.
    pub fn frame_indices(&self) -> &[usize] {
        &self.frame_indices
    }

    /// Positions of one axis.
    pub fn axis(&self, axis: usize) -> &[f64] {
        &self.axes[axis]
    }

    /// Backward-difference derivative of one axis; leading samples are zero.
    pub fn derivative(&self, order: DerivativeOrder, axis: usize) -> Vec<f64> {
        let mut values = self.axes[axis].clone();
        // times were validated on construction
        let _ = differentiate_in_place(&mut values, &self.times, order.index());
        values
    }
}

/// Violations plus statistics of a series.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotionAnalysis {
    /// Every out-of-range sample, grouped by order then axis, in frame order.
    pub violations: Vec<Violation>,
    /// Min, max and average per axis and order.
    pub statistics: MotionStatistics,
}

/// Differentiate every axis and check it against the table.
///
/// Derivatives of order `n` skip the first `n` samples, which are not true
/// derivatives.
#[cfg(feature = "alloc")]
pub fn analyze(series: &MotionSeries, limits: &LimitTable) -> MotionAnalysis {
    let mut analysis = MotionAnalysis::default();
    for order in DerivativeOrder::ALL {
        for axis in 0..6 {
            let values = series.derivative(order, axis);
            for i in order.index()..values.len() {
                let frame = series.frame_indices[i];
                let time = series.times[i];
                analysis.statistics.record(order, axis, values[i], frame);
                if let Some(v) = check_sample(limits, order, axis, frame, time, values[i]) {
                    analysis.violations.push(v);
                }
            }
        }
    }
    analysis
}

/// Every sample exceeding its range.
#[cfg(feature = "alloc")]
pub fn check_limits(series: &MotionSeries, limits: &LimitTable) -> Vec<Violation> {
    analyze(series, limits).violations
}
