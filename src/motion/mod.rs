//! Motion analysis: differentiation, limit checking and statistics.
//!
//! Batch analysis of a whole trajectory needs the `alloc` feature; the
//! five-point stencil window works without an allocator.

mod checker;
mod derivative;
mod statistics;
mod window;

pub use checker::{check_sample, Violation};
#[cfg(feature = "alloc")]
pub use checker::{analyze, check_limits, MotionAnalysis, MotionSeries};
pub use derivative::{differentiate_in_place, five_point_stencil, validate_times, StencilEstimate};
#[cfg(feature = "alloc")]
pub use derivative::{backward_difference, differentiate};
pub use statistics::{AxisStatistics, Extremum, MotionStatistics};
pub use window::{StencilWindow, WindowSample, MAX_WINDOW_VIOLATIONS, WINDOW_LEN};
