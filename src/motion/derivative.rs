//! Finite-difference differentiation.
//!
//! Two strategies are kept side by side:
//!
//! - a backward first difference, repeated per order, for batch analysis of a
//!   whole sampled trajectory;
//! - a five-point central stencil for frame-synchronous estimates around a
//!   single sample.
//!
//! They serve different consumers and are not interchangeable: the backward
//! difference lags by half a sample per order, the stencil does not.

use crate::error::{Result, SequenceError};
use crate::kinematics::unwrap_in_place;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Check that time stamps are present and strictly increasing.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn validate_times<I>(times: I) -> Result<()>
where
    I: IntoIterator<Item = f64>,
{
    let mut times = times.into_iter();
    let mut previous = times.next().ok_or(SequenceError::Empty)?;
    for (offset, current) in times.enumerate() {
        // NaN fails this comparison as well
        if !(current > previous) {
            return Err(SequenceError::NonIncreasingTime {
                frame: offset + 1,
                previous,
                current,
            }
            .into());
        }
        previous = current;
    }
    Ok(())
}

fn check_lengths(values: &[f64], times: &[f64]) -> Result<()> {
    if values.len() != times.len() {
        return Err(SequenceError::LengthMismatch {
            expected: times.len(),
            actual: values.len(),
        }
        .into());
    }
    Ok(())
}

/// One backward-difference pass: `x[i] ← (x[i] − x[i−1]) / (t[i] − t[i−1])`, `x[0] ← 0`.
fn difference_pass(values: &mut [f64], times: &[f64]) {
    for i in (1..values.len()).rev() {
        values[i] = (values[i] - values[i - 1]) / (times[i] - times[i - 1]);
    }
    if let Some(first) = values.first_mut() {
        *first = 0.0;
    }
}

/// Repeat the backward difference `order` times in place.
///
/// The first `order` samples are not true derivatives and are zeroed so the
/// sequence keeps its length.
pub fn differentiate_in_place(values: &mut [f64], times: &[f64], order: usize) -> Result<()> {
    check_lengths(values, times)?;
    validate_times(times.iter().copied())?;
    for _ in 0..order {
        difference_pass(values, times);
    }
    let leading = order.min(values.len());
    values[..leading].iter_mut().for_each(|v| *v = 0.0);
    Ok(())
}

/// Backward first difference of a sampled series.
#[cfg(feature = "alloc")]
pub fn backward_difference(values: &[f64], times: &[f64]) -> Result<Vec<f64>> {
    differentiate(values, times, 1)
}

/// `order`-th backward difference of a sampled series.
#[cfg(feature = "alloc")]
pub fn differentiate(values: &[f64], times: &[f64], order: usize) -> Result<Vec<f64>> {
    let mut out = values.to_vec();
    differentiate_in_place(&mut out, times, order)?;
    Ok(out)
}

/// Velocity, acceleration and jerk at the centre of a five-sample window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StencilEstimate {
    /// First derivative.
    pub velocity: f64,
    /// Second derivative.
    pub acceleration: f64,
    /// Third derivative.
    pub jerk: f64,
}

impl StencilEstimate {
    /// Value for a derivative order (1 to 3); position is not part of the estimate.
    pub fn get(&self, order: usize) -> Option<f64> {
        match order {
            1 => Some(self.velocity),
            2 => Some(self.acceleration),
            3 => Some(self.jerk),
            _ => None,
        }
    }
}

/// Five-point central stencil over `[p₋₂, p₋₁, p₀, p₁, p₂]` sampled every `dt`.
///
/// The samples are unwrapped pairwise first so a ±180° crossing does not
/// produce a spike.
///
/// ```
/// use six_axis_ik::motion::five_point_stencil;
///
/// let e = five_point_stencil([0.0, 10.0, 20.0, 30.0, 40.0], 1.0).unwrap();
/// assert_eq!((e.velocity, e.acceleration, e.jerk), (10.0, 0.0, 0.0));
/// ```
pub fn five_point_stencil(samples: [f64; 5], dt: f64) -> Result<StencilEstimate> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SequenceError::InvalidStep(dt).into());
    }
    let mut p = samples;
    unwrap_in_place(&mut p);
    let [m2, m1, p0, p1, p2] = p;

    Ok(StencilEstimate {
        velocity: (-p2 + 8.0 * p1 - 8.0 * m1 + m2) / (12.0 * dt),
        acceleration: (-p2 + 16.0 * p1 - 30.0 * p0 + 16.0 * m1 - m2) / (12.0 * dt * dt),
        jerk: (p2 - 2.0 * p1 + 2.0 * m1 - m2) / (2.0 * dt * dt * dt),
    })
}
