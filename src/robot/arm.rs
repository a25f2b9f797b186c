//! A configured robot: solver, calibration, limits and frame convention.

use heapless::String;

use crate::config::{
    apply_all, remove_all, AxisCalibration, LimitTable, RobotGeometry, ViolationPolicy,
};
use crate::error::Result;
use crate::kinematics::{
    find_closest_config, normalize, ConfigurationFlags, FrameConverter, IkSolver, JointSolution,
    Pose, Solutions,
};

use super::builder::RobotBuilder;
use super::preview::LivePreview;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use super::report::TrajectoryReport;
#[cfg(feature = "alloc")]
use crate::motion::{analyze, validate_times, MotionSeries};
#[cfg(feature = "alloc")]
use crate::trajectory::{FrameInput, Reconciler, SampledFrame, ShiftResolver, TrajectoryRecord};

/// A robot ready to solve.
///
/// Poses passed in and out are in the authoring convention; joint angles
/// passed in and out are robot angles (calibration applied) unless a method
/// says otherwise. Everything is read-only, so a `Robot` can be shared
/// across threads solving different frames.
#[derive(Debug, Clone)]
pub struct Robot {
    name: String<32>,
    geometry: RobotGeometry,
    solver: IkSolver,
    calibration: [AxisCalibration; 6],
    limits: LimitTable,
    frame: FrameConverter,
    violation_policy: ViolationPolicy,
    reconcile_flags: [bool; 6],
}

impl Robot {
    pub(crate) fn new(
        name: String<32>,
        geometry: RobotGeometry,
        calibration: [AxisCalibration; 6],
        limits: LimitTable,
        frame: FrameConverter,
        violation_policy: ViolationPolicy,
    ) -> Self {
        let reconcile_flags = limits.reconcile_flags(&calibration);
        Self {
            name,
            geometry,
            solver: IkSolver::new(geometry),
            calibration,
            limits,
            frame,
            violation_policy,
            reconcile_flags,
        }
    }

    /// Start building a robot.
    pub fn builder() -> RobotBuilder {
        RobotBuilder::new()
    }

    /// Robot name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Link geometry.
    pub fn geometry(&self) -> &RobotGeometry {
        &self.geometry
    }

    /// The closed-form solver.
    pub fn solver(&self) -> &IkSolver {
        &self.solver
    }

    /// Per-axis calibration.
    pub fn calibration(&self) -> &[AxisCalibration; 6] {
        &self.calibration
    }

    /// Axis limits.
    pub fn limits(&self) -> &LimitTable {
        &self.limits
    }

    /// Frame convention.
    pub fn frame(&self) -> &FrameConverter {
        &self.frame
    }

    /// What violations mean for export.
    pub fn violation_policy(&self) -> ViolationPolicy {
        self.violation_policy
    }

    /// Axes whose range aliases under per-frame solving.
    pub fn reconcile_flags(&self) -> [bool; 6] {
        self.reconcile_flags
    }

    /// Solver model angles to robot angles.
    pub fn to_robot_angles(&self, model: &[f64; 6]) -> [f64; 6] {
        apply_all(model, &self.calibration)
    }

    /// Robot angles to solver model angles.
    pub fn to_model_angles(&self, robot: &[f64; 6]) -> [f64; 6] {
        remove_all(robot, &self.calibration)
    }

    /// All eight branches for a target, in solver model degrees.
    pub fn solve_all(&self, target: &Pose, tcp: &Pose, lcs: &Pose) -> Solutions {
        self.solver.solve_all(
            &self.frame.tcp_to_solver(tcp),
            &self.frame.base_to_solver(lcs),
            &self.frame.target_to_solver(target),
        )
    }

    /// One branch for a target, in solver model degrees.
    pub fn solve(
        &self,
        target: &Pose,
        tcp: &Pose,
        lcs: &Pose,
        flags: ConfigurationFlags,
    ) -> JointSolution {
        self.solve_all(target, tcp, lcs)[flags.branch_index()]
    }

    /// Tool pose in the world for robot angles (manual mode).
    pub fn forward(&self, axes: &[f64; 6], tcp: &Pose, lcs: &Pose) -> Pose {
        let model = self.to_model_angles(axes);
        let solved = self.solver.forward(
            &model,
            &self.frame.tcp_to_solver(tcp),
            &self.frame.base_to_solver(lcs),
        );
        self.frame.target_from_solver(&solved)
    }

    /// Configuration that continues smoothly from manually set robot angles.
    ///
    /// Used when switching from forward to inverse control: the tool pose of
    /// `axes` is solved again and the closest of the eight branches wins.
    pub fn closest_config(&self, axes: &[f64; 6], tcp: &Pose, lcs: &Pose) -> ConfigurationFlags {
        let pose = self.forward(axes, tcp, lcs);
        let solutions = self.solve_all(&pose, tcp, lcs);
        let flags = find_closest_config(&normalize(axes, &self.calibration), &solutions);
        log::debug!(
            "{}: manual pose matches configuration {:?}",
            self.name,
            flags
        );
        flags
    }

    /// Frame-synchronous preview state for this robot.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not positive and finite.
    pub fn preview(&self, dt: f64) -> Result<LivePreview> {
        LivePreview::new(self.reconcile_flags, dt)
    }

    /// Reconciler sharing this robot's calibration and limits.
    #[cfg(feature = "alloc")]
    pub fn reconciler(&self) -> Reconciler {
        Reconciler::new(self.calibration, self.limits)
    }

    /// Solve, reconcile and check a whole animation.
    ///
    /// Every frame is solved with the same `flags`. Frames whose branch is
    /// invalid still contribute their best-effort angles and are listed in
    /// [`TrajectoryReport::unreachable_frames`].
    ///
    /// # Errors
    ///
    /// Fails when `inputs` is empty or its times do not strictly increase.
    #[cfg(feature = "alloc")]
    pub fn solve_sequence<R>(
        &self,
        inputs: &[FrameInput],
        flags: ConfigurationFlags,
        resolver: &mut R,
    ) -> Result<TrajectoryReport>
    where
        R: ShiftResolver + ?Sized,
    {
        validate_times(inputs.iter().map(|f| f.time_seconds))?;

        let mut unreachable_frames = Vec::new();
        let frames: Vec<SampledFrame> = inputs
            .iter()
            .map(|input| {
                let solution = self.solve(&input.target, &input.tcp, &input.lcs, flags);
                if !solution.is_valid() {
                    unreachable_frames.push(input.frame_index);
                }
                SampledFrame {
                    frame_index: input.frame_index,
                    time_seconds: input.time_seconds,
                    raw_axes: solution.angles,
                }
            })
            .collect();
        if !unreachable_frames.is_empty() {
            log::warn!(
                "{}: {} of {} frames out of reach, first at frame {}",
                self.name,
                unreachable_frames.len(),
                inputs.len(),
                unreachable_frames[0]
            );
        }

        let reconciled = self.reconciler().reconcile(&frames, resolver)?;
        let records: Vec<TrajectoryRecord> = inputs
            .iter()
            .zip(reconciled.axes)
            .map(|(input, axes)| TrajectoryRecord {
                frame_index: input.frame_index,
                time_seconds: input.time_seconds,
                axes,
                external_axes: input.external_axes.clone(),
                digital_outputs: input.digital_outputs.clone(),
            })
            .collect();

        let series =
            MotionSeries::from_samples(records.iter().map(|r| (r.frame_index, r.time_seconds, r.axes)))?;
        let analysis = analyze(&series, &self.limits);
        if !analysis.violations.is_empty() {
            log::warn!(
                "{}: {} limit violations, first on axis {} at frame {}",
                self.name,
                analysis.violations.len(),
                analysis.violations[0].axis + 1,
                analysis.violations[0].frame_index
            );
        }

        Ok(TrajectoryReport {
            records,
            reconciliation: reconciled.outcomes,
            violations: analysis.violations,
            statistics: analysis.statistics,
            unreachable_frames,
            policy: self.violation_policy,
        })
    }
}
