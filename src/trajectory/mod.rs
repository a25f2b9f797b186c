//! Trajectory module for six-axis-ik.
//!
//! Sampled frames in, continuous robot joint trajectories out.

mod continuity;
mod frame;
#[cfg(feature = "alloc")]
mod reconcile;

pub use continuity::ContinuityState;
pub use frame::{
    DigitalOutputs, ExternalAxes, FrameInput, SampledFrame, TrajectoryRecord,
    MAX_DIGITAL_OUTPUTS, MAX_EXTERNAL_AXES,
};
#[cfg(feature = "alloc")]
pub use reconcile::{
    shift_options, AxisPhase, AxisReconciliation, AxisTrack, KeepUnshifted, Reconciler,
    Reconciliation, ShiftOption, ShiftResolver, MAX_SHIFT_OPTIONS,
};
