//! Live preview: one frame at a time, no allocation.

use heapless::Vec;

use super::arm::Robot;
use crate::error::Result;
use crate::kinematics::{ConfigurationFlags, JointSolution};
use crate::motion::{MotionStatistics, StencilWindow, Violation, MAX_WINDOW_VIOLATIONS};
use crate::trajectory::{ContinuityState, FrameInput};

/// Outcome of one preview step.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    /// Solver output for the frame (model degrees).
    pub solution: JointSolution,
    /// Continuous robot angles for the frame.
    pub axes: [f64; 6],
    /// Violations at the window centre, two frames behind the one just pushed.
    pub violations: Vec<Violation, MAX_WINDOW_VIOLATIONS>,
}

/// Continuity accumulator plus five-point window, driven frame by frame.
///
/// Frames must arrive in time order at the window's fixed step. Call
/// [`LivePreview::reset`] when the timeline jumps.
#[derive(Debug, Clone)]
pub struct LivePreview {
    continuity: ContinuityState,
    window: StencilWindow,
    statistics: MotionStatistics,
}

impl LivePreview {
    pub(crate) fn new(flags: [bool; 6], dt: f64) -> Result<Self> {
        Ok(Self {
            continuity: ContinuityState::new(flags),
            window: StencilWindow::new(dt)?,
            statistics: MotionStatistics::default(),
        })
    }

    /// Solve a frame and advance the window.
    ///
    /// External axes and digital outputs of `input` are not used here.
    pub fn step(
        &mut self,
        robot: &Robot,
        input: &FrameInput,
        flags: ConfigurationFlags,
    ) -> PreviewFrame {
        let solution = robot.solve(&input.target, &input.tcp, &input.lcs, flags);
        let model = self.continuity.accumulate(&solution.angles);
        let axes = robot.to_robot_angles(&model);

        self.window.push(input.frame_index, input.time_seconds, axes);
        self.window.record(&mut self.statistics);
        let violations = self.window.check(robot.limits());
        if !violations.is_empty() {
            log::trace!("frame {}: {} violations", input.frame_index, violations.len());
        }

        PreviewFrame {
            solution,
            axes,
            violations,
        }
    }

    /// Statistics over every window centre so far.
    pub fn statistics(&self) -> &MotionStatistics {
        &self.statistics
    }

    /// The underlying window.
    pub fn window(&self) -> &StencilWindow {
        &self.window
    }

    /// Forget all history.
    pub fn reset(&mut self) {
        self.continuity.reset();
        self.window.clear();
        self.statistics = MotionStatistics::default();
    }
}
