//! Integration tests for six-axis-ik.
//!
//! These tests run the complete workflow from TOML parsing through solving,
//! reconciliation and limit checking.

mod unit;

use six_axis_ik::config::{DerivativeOrder, ViolationPolicy};
use six_axis_ik::kinematics::Pose;
use six_axis_ik::trajectory::{AxisReconciliation, DigitalOutputs, ExternalAxes, ShiftOption};
use six_axis_ik::error::SequenceError;
use six_axis_ik::{
    parse_config, ConfigurationFlags, Error, FrameInput, KeepUnshifted, Robot, RobotSystem,
};

// =============================================================================
// Test configuration data
// =============================================================================

const FPS: f64 = 24.0;
const FRAMES: usize = 25;

fn cell_config(axis6_min: f64, axis6_max: f64, axis6_velocity: f64, policy: &str) -> String {
    format!(
        r#"
[robots.desk]
name = "Desk Arm"
violation_policy = "{policy}"

[robots.desk.geometry.spherical_wrist]
a1 = 32.0
a2 = 20.0
c1 = 78.0
c2 = 128.0
c3 = 118.25
c4 = 20.0

[[robots.desk.axes]]
min_degrees = -170.0
max_degrees = 170.0
max_velocity_deg_per_sec = 180.0

[[robots.desk.axes]]
min_degrees = -10.0
max_degrees = 150.0
offset_degrees = 90.0
max_velocity_deg_per_sec = 180.0

[[robots.desk.axes]]
min_degrees = -120.0
max_degrees = 156.0
flip_direction = true
max_velocity_deg_per_sec = 180.0

[[robots.desk.axes]]
min_degrees = -185.0
max_degrees = 185.0
max_velocity_deg_per_sec = 360.0

[[robots.desk.axes]]
min_degrees = -120.0
max_degrees = 120.0
max_velocity_deg_per_sec = 360.0

[[robots.desk.axes]]
min_degrees = {axis6_min:.1}
max_degrees = {axis6_max:.1}
max_velocity_deg_per_sec = {axis6_velocity:.1}
"#
    )
}

fn desk_robot(axis6_min: f64, axis6_max: f64, axis6_velocity: f64, policy: &str) -> Robot {
    let config = parse_config(&cell_config(axis6_min, axis6_max, axis6_velocity, policy))
        .expect("Should parse cell config");
    Robot::builder()
        .from_config(&config, "desk")
        .expect("Robot should exist")
        .build()
        .expect("Robot should build")
}

/// Robot angles of a linear move; axis 6 crosses the ±180° seam.
fn joint_path(i: usize) -> [f64; 6] {
    let t = i as f64 / (FRAMES - 1) as f64;
    [
        20.0 + 10.0 * t,
        80.0 + 5.0 * t,
        -65.0 + 5.0 * t,
        10.0 + 10.0 * t,
        35.0 + 5.0 * t,
        150.0 + 60.0 * t,
    ]
}

fn tcp() -> Pose {
    Pose::from_translation(0.0, 40.0, 0.0)
}

/// Animation frames whose targets are the forward kinematics of [`joint_path`].
fn animation(robot: &Robot) -> Vec<FrameInput> {
    (0..FRAMES)
        .map(|i| {
            let target = robot.forward(&joint_path(i), &tcp(), &Pose::identity());
            let mut outputs = DigitalOutputs::new();
            outputs.push(i % 2 == 0).unwrap();
            let mut external = ExternalAxes::new();
            external.push(i as f64 * 10.0).unwrap();
            FrameInput::new(i, i as f64 / FPS, target)
                .with_tcp(tcp())
                .with_external_axes(external)
                .with_digital_outputs(outputs)
        })
        .collect()
}

fn assert_axes_close(actual: &[f64; 6], expected: &[f64; 6], tolerance: f64) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            (a - e).abs() < tolerance,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }
}

// =============================================================================
// Full pipeline
// =============================================================================

#[test]
fn test_sequence_is_continuous_across_the_seam() {
    let robot = desk_robot(-350.0, 350.0, 360.0, "abort");
    let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());
    let inputs = animation(&robot);

    let report = robot
        .solve_sequence(&inputs, flags, &mut KeepUnshifted)
        .expect("Sequence should solve");

    assert_eq!(report.records.len(), FRAMES);
    for (i, record) in report.records.iter().enumerate() {
        assert_eq!(record.frame_index, i);
        assert_axes_close(&record.axes, &joint_path(i), 1e-6);
    }

    assert_eq!(report.reconciliation[0], AxisReconciliation::NotFlagged);
    assert_eq!(report.reconciliation[3], AxisReconciliation::WithinLimits);
    assert_eq!(report.reconciliation[5], AxisReconciliation::WithinLimits);
    assert!(report.is_clean());
    assert!(report.exportable_records().is_some());
}

#[test]
fn test_pass_through_channels() {
    let robot = desk_robot(-350.0, 350.0, 360.0, "abort");
    let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());
    let inputs = animation(&robot);

    let report = robot
        .solve_sequence(&inputs, flags, &mut KeepUnshifted)
        .unwrap();

    for (input, record) in inputs.iter().zip(report.records.iter()) {
        assert_eq!(record.external_axes, input.external_axes);
        assert_eq!(record.digital_outputs, input.digital_outputs);
        assert_eq!(record.time_seconds, input.time_seconds);
    }
}

#[test]
fn test_statistics_follow_the_move() {
    let robot = desk_robot(-350.0, 350.0, 360.0, "abort");
    let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());
    let report = robot
        .solve_sequence(&animation(&robot), flags, &mut KeepUnshifted)
        .unwrap();

    let position = report.statistics.get(DerivativeOrder::Position, 5);
    let max = position.max().expect("Axis 6 has samples");
    assert!((max.value - 210.0).abs() < 1e-6);
    assert_eq!(max.frame_index, FRAMES - 1);

    // 60° over 24 steps of 1/24 s.
    let velocity = report.statistics.get(DerivativeOrder::Velocity, 5);
    assert_eq!(velocity.count(), FRAMES - 1);
    assert!((velocity.average().unwrap() - 60.0).abs() < 1e-4);
}

#[test]
fn test_velocity_violation_under_each_policy() {
    for (policy, exportable) in [("abort", false), ("warn", true)] {
        let robot = desk_robot(-350.0, 350.0, 30.0, policy);
        let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());
        let report = robot
            .solve_sequence(&animation(&robot), flags, &mut KeepUnshifted)
            .unwrap();

        let too_fast: Vec<_> = report.violations_of(DerivativeOrder::Velocity).collect();
        assert_eq!(too_fast.len(), FRAMES - 1);
        assert!(too_fast.iter().all(|v| v.axis == 5 && v.exceeded_limit == 30.0));
        assert!(too_fast.iter().all(|v| v.frame_index >= 1));
        assert!(!report.is_clean());
        assert_eq!(report.is_exportable(), exportable);
    }
}

#[test]
fn test_axis_shifted_into_negative_range() {
    // The move spans 150..210, which only fits a range below zero one turn down.
    let robot = desk_robot(-350.0, -10.0, 360.0, "abort");
    let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());
    let report = robot
        .solve_sequence(&animation(&robot), flags, &mut KeepUnshifted)
        .unwrap();

    assert_eq!(report.reconciliation[5], AxisReconciliation::Shifted { turns: -1 });
    for (i, record) in report.records.iter().enumerate() {
        let mut expected = joint_path(i);
        expected[5] -= 360.0;
        assert_axes_close(&record.axes, &expected, 1e-6);
    }
    assert!(report.is_clean());
}

#[test]
fn test_single_turn_up_applied_without_resolver() {
    // 150..210 is below the range; one turn up fits, so nobody is asked.
    let robot = desk_robot(200.0, 1300.0, 360.0, "abort");
    let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());

    let mut asked = Vec::new();
    let mut resolver = |axis: usize, options: &[ShiftOption]| {
        asked.push((axis, options.len()));
        Some(0usize)
    };
    let report = robot
        .solve_sequence(&animation(&robot), flags, &mut resolver)
        .unwrap();

    assert!(asked.is_empty());
    assert_eq!(report.reconciliation[5], AxisReconciliation::Shifted { turns: 1 });
    let last = &report.records[FRAMES - 1];
    assert!((last.axes[5] - 570.0).abs() < 1e-6);
    assert!(report.is_clean());
}

#[test]
fn test_unresolvable_axis_left_unshifted() {
    // 150..210 does not fit 200..240 shifted either way.
    let robot = desk_robot(200.0, 240.0, 360.0, "warn");
    let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());
    let report = robot
        .solve_sequence(&animation(&robot), flags, &mut KeepUnshifted)
        .unwrap();

    assert!(matches!(
        report.reconciliation[5],
        AxisReconciliation::Unresolvable { .. }
    ));
    assert_eq!(report.reconciliation[5].applied_turns(), 0);
    assert!(!report.reconciliation[5].fits());
    // Frames below 200 break the position range.
    assert!(report
        .violations_of(DerivativeOrder::Position)
        .all(|v| v.axis == 5 && v.exceeded_limit == 200.0));
    assert!(report.violations_of(DerivativeOrder::Position).count() > 0);
    assert!(report.is_exportable());
}

#[test]
fn test_unreachable_frame_blocks_export() {
    let robot = desk_robot(-350.0, 350.0, 1.0e6, "abort");
    let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());
    let mut inputs = animation(&robot);
    inputs[12].target = Pose::from_translation(5000.0, 0.0, 0.0);

    let report = robot
        .solve_sequence(&inputs, flags, &mut KeepUnshifted)
        .unwrap();

    assert_eq!(report.unreachable_frames, vec![12]);
    assert!(!report.is_clean());
    assert!(report.exportable_records().is_none());
}

#[test]
fn test_sequence_input_errors() {
    let robot = desk_robot(-350.0, 350.0, 360.0, "abort");
    let flags = ConfigurationFlags::default();

    assert_eq!(
        robot.solve_sequence(&[], flags, &mut KeepUnshifted).unwrap_err(),
        Error::Sequence(SequenceError::Empty)
    );

    let mut inputs = animation(&robot);
    inputs[3].time_seconds = inputs[2].time_seconds;
    assert!(matches!(
        robot.solve_sequence(&inputs, flags, &mut KeepUnshifted),
        Err(Error::Sequence(SequenceError::NonIncreasingTime { .. }))
    ));
}

// =============================================================================
// Live preview
// =============================================================================

#[test]
fn test_preview_matches_batch_positions() {
    let robot = desk_robot(-350.0, 350.0, 360.0, "warn");
    let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());
    let inputs = animation(&robot);
    let report = robot
        .solve_sequence(&inputs, flags, &mut KeepUnshifted)
        .unwrap();

    let mut preview = robot.preview(1.0 / FPS).unwrap();
    for (input, record) in inputs.iter().zip(report.records.iter()) {
        let frame = preview.step(&robot, input, flags);
        assert!(frame.solution.is_valid());
        assert_axes_close(&frame.axes, &record.axes, 1e-9);
        assert!(frame.violations.is_empty());
    }

    // One window centre per frame once five frames are in.
    let velocity = preview.statistics().get(DerivativeOrder::Velocity, 5);
    assert_eq!(velocity.count(), FRAMES - 4);
    assert!((velocity.average().unwrap() - 60.0).abs() < 1e-4);
}

#[test]
fn test_preview_reports_window_violations() {
    let robot = desk_robot(-350.0, 350.0, 30.0, "warn");
    let flags = robot.closest_config(&joint_path(0), &tcp(), &Pose::identity());

    let mut preview = robot.preview(1.0 / FPS).unwrap();
    let mut flagged = 0;
    for input in animation(&robot).iter().take(8) {
        let frame = preview.step(&robot, input, flags);
        flagged += frame
            .violations
            .iter()
            .filter(|v| v.axis == 5 && v.order == DerivativeOrder::Velocity)
            .count();
    }
    assert_eq!(flagged, 4);

    preview.reset();
    assert!(preview.window().is_empty());
}

// =============================================================================
// Robot system
// =============================================================================

#[test]
fn test_robot_system_from_two_robots() {
    let mut toml_str = cell_config(-350.0, 350.0, 360.0, "abort");
    toml_str.push_str(
        r#"
[robots.cobot]
name = "Co-Bot"

[robots.cobot.geometry.hawkins_keating]
d1 = 89.159
d4 = 109.15
d5 = 94.65
d6 = 82.3
a2 = -425.0
a3 = -392.25

[[robots.cobot.axes]]
min_degrees = -360.0
max_degrees = 360.0
[[robots.cobot.axes]]
min_degrees = -360.0
max_degrees = 360.0
[[robots.cobot.axes]]
min_degrees = -180.0
max_degrees = 180.0
[[robots.cobot.axes]]
min_degrees = -360.0
max_degrees = 360.0
[[robots.cobot.axes]]
min_degrees = -360.0
max_degrees = 360.0
[[robots.cobot.axes]]
min_degrees = -360.0
max_degrees = 360.0
"#,
    );

    let config = parse_config(&toml_str).expect("Should parse two robots");
    let system = RobotSystem::from_config(&config).expect("System should build");

    assert_eq!(system.len(), 2);
    assert!(system.has_robot("cobot"));
    assert!(!system.has_robot("ghost"));
    let cobot = system.robot("cobot").unwrap();
    assert_eq!(cobot.name(), "Co-Bot");
    assert_eq!(
        cobot.reconcile_flags(),
        [true, true, false, true, true, true]
    );
    assert_eq!(system.robot("desk").unwrap().violation_policy(), ViolationPolicy::Abort);
    assert_eq!(system.robot_keys().collect::<Vec<_>>(), vec!["desk", "cobot"]);
}
