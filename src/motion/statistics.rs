//! Per-axis motion statistics for reporting.

use crate::config::DerivativeOrder;

/// A value together with the frame it was observed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// Observed value.
    pub value: f64,
    /// Frame of the first occurrence.
    pub frame_index: usize,
}

/// Running minimum, maximum and average of one axis and derivative order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisStatistics {
    min: Option<Extremum>,
    max: Option<Extremum>,
    sum: f64,
    count: usize,
}

impl AxisStatistics {
    /// Add an observation. NaN is ignored.
    pub fn record(&mut self, value: f64, frame_index: usize) {
        if value.is_nan() {
            return;
        }
        let sample = Extremum { value, frame_index };
        // strict comparisons keep the first occurrence
        if self.min.map_or(true, |m| value < m.value) {
            self.min = Some(sample);
        }
        if self.max.map_or(true, |m| value > m.value) {
            self.max = Some(sample);
        }
        self.sum += value;
        self.count += 1;
    }

    /// Smallest value seen.
    pub fn min(&self) -> Option<Extremum> {
        self.min
    }

    /// Largest value seen.
    pub fn max(&self) -> Option<Extremum> {
        self.max
    }

    /// Arithmetic mean of all observations.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    /// Number of observations.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Statistics for all six axes and four derivative orders.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionStatistics {
    axes: [[AxisStatistics; 6]; 4],
}

impl MotionStatistics {
    /// Statistics of one axis and order.
    #[inline]
    pub fn get(&self, order: DerivativeOrder, axis: usize) -> &AxisStatistics {
        &self.axes[order.index()][axis]
    }

    /// Add an observation.
    #[inline]
    pub fn record(&mut self, order: DerivativeOrder, axis: usize, value: f64, frame_index: usize) {
        self.axes[order.index()][axis].record(value, frame_index);
    }
}
