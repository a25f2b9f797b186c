//! Per-frame inputs and outputs of the trajectory pipeline.

use heapless::Vec;

use crate::kinematics::Pose;

/// Maximum number of external (track, positioner) axes carried per frame.
pub const MAX_EXTERNAL_AXES: usize = 6;

/// Maximum number of digital outputs carried per frame.
pub const MAX_DIGITAL_OUTPUTS: usize = 16;

/// External axis values, passed through untouched.
pub type ExternalAxes = Vec<f64, MAX_EXTERNAL_AXES>;

/// Digital output states, passed through untouched.
pub type DigitalOutputs = Vec<bool, MAX_DIGITAL_OUTPUTS>;

/// One animation sample to solve.
///
/// Poses are in the authoring convention; the robot's frame converter maps
/// them to the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInput {
    /// Animation frame number.
    pub frame_index: usize,
    /// Frame time in seconds.
    pub time_seconds: f64,
    /// Tool target in the world.
    pub target: Pose,
    /// Tool centre point in the flange frame.
    pub tcp: Pose,
    /// Robot base in the world.
    pub lcs: Pose,
    /// Optional external axis values.
    pub external_axes: Option<ExternalAxes>,
    /// Optional digital output states.
    pub digital_outputs: Option<DigitalOutputs>,
}

impl FrameInput {
    /// Target only; TCP and base are identity.
    pub fn new(frame_index: usize, time_seconds: f64, target: Pose) -> Self {
        Self {
            frame_index,
            time_seconds,
            target,
            tcp: Pose::identity(),
            lcs: Pose::identity(),
            external_axes: None,
            digital_outputs: None,
        }
    }

    /// Set the tool centre point.
    pub fn with_tcp(mut self, tcp: Pose) -> Self {
        self.tcp = tcp;
        self
    }

    /// Set the robot base.
    pub fn with_lcs(mut self, lcs: Pose) -> Self {
        self.lcs = lcs;
        self
    }

    /// Attach external axis values.
    pub fn with_external_axes(mut self, values: ExternalAxes) -> Self {
        self.external_axes = Some(values);
        self
    }

    /// Attach digital output states.
    pub fn with_digital_outputs(mut self, outputs: DigitalOutputs) -> Self {
        self.digital_outputs = Some(outputs);
        self
    }
}

/// Raw solver output for one frame, in solver model degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledFrame {
    /// Animation frame number.
    pub frame_index: usize,
    /// Frame time in seconds.
    pub time_seconds: f64,
    /// Bounded solver angles.
    pub raw_axes: [f64; 6],
}

/// One reconciled frame, ready for program generation.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryRecord {
    /// Animation frame number.
    pub frame_index: usize,
    /// Frame time in seconds.
    pub time_seconds: f64,
    /// Robot joint angles in degrees (calibration applied).
    pub axes: [f64; 6],
    /// External axis values from the input.
    pub external_axes: Option<ExternalAxes>,
    /// Digital output states from the input.
    pub digital_outputs: Option<DigitalOutputs>,
}
