//! Unit tests for TOML configuration parsing.

use six_axis_ik::config::{
    load_config, DerivativeOrder, RobotGeometry, SolverKind, SystemConfig, ViolationPolicy,
};
use six_axis_ik::kinematics::FrameConverter;

const DESK_AXES: &str = r#"
[[robots.desk.axes]]
min_degrees = -170.0
max_degrees = 170.0
max_velocity_deg_per_sec = 200.0

[[robots.desk.axes]]
min_degrees = -10.0
max_degrees = 150.0
offset_degrees = 90.0

[[robots.desk.axes]]
min_degrees = -120.0
max_degrees = 156.0
flip_direction = true
max_acceleration_deg_per_sec2 = 900.0

[[robots.desk.axes]]
min_degrees = -185.0
max_degrees = 185.0

[[robots.desk.axes]]
min_degrees = -120.0
max_degrees = 120.0

[[robots.desk.axes]]
min_degrees = -350.0
max_degrees = 350.0
max_jerk_deg_per_sec3 = 40000.0
"#;

fn desk_toml(extra: &str) -> String {
    format!(
        r#"
[robots.desk]
name = "desk_arm"
{extra}

[robots.desk.geometry.spherical_wrist]
a1 = 32.0
a2 = 20.0
c1 = 78.0
c2 = 128.0
c3 = 118.25
c4 = 20.0
{DESK_AXES}"#
    )
}

/// Test parsing a valid spherical-wrist robot from TOML.
#[test]
fn test_parse_robot_config() {
    let config: SystemConfig = toml::from_str(&desk_toml("")).expect("Failed to parse TOML");
    let robot = config.robot("desk").expect("Robot not found");

    assert_eq!(robot.name.as_str(), "desk_arm");
    assert_eq!(robot.geometry.kind(), SolverKind::SphericalWrist);
    match robot.geometry {
        RobotGeometry::SphericalWrist(g) => {
            assert_eq!(g.c3, 118.25);
            assert_eq!(g.b, 0.0);
        }
        RobotGeometry::HawkinsKeating(_) => panic!("Wrong solver model"),
    }
    assert_eq!(robot.axes[1].offset.0, 90.0);
    assert!(robot.axes[2].flip_direction);
    assert!(!robot.axes[0].flip_direction);
    assert_eq!(robot.violation_policy, ViolationPolicy::Abort);
    assert!(robot.frame.is_none());
}

/// Test that optional derivative limits land in the right table slots.
#[test]
fn test_parse_derivative_limits() {
    let config: SystemConfig = toml::from_str(&desk_toml("")).expect("Failed to parse TOML");
    let table = config.robot("desk").unwrap().limit_table();

    assert_eq!(table.range(DerivativeOrder::Velocity, 0).max, 200.0);
    assert_eq!(table.range(DerivativeOrder::Velocity, 0).min, -200.0);
    assert_eq!(table.range(DerivativeOrder::Acceleration, 2).max, 900.0);
    assert_eq!(table.range(DerivativeOrder::Jerk, 5).max, 40000.0);
    assert!(table.range(DerivativeOrder::Velocity, 5).contains(1.0e9));
}

/// Test parsing the warn policy and an explicit frame convention.
#[test]
fn test_parse_policy_and_frame() {
    let extra = r#"violation_policy = "warn"

[robots.desk.frame]
tool = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
world = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]
"#;
    let config: SystemConfig = toml::from_str(&desk_toml(extra)).expect("Failed to parse TOML");
    let robot = config.robot("desk").unwrap();

    assert_eq!(robot.violation_policy, ViolationPolicy::Warn);
    let frame = robot.frame.expect("Frame not parsed");
    assert_eq!(frame.tool, FrameConverter::IDENTITY.tool);
    assert_eq!(frame.world[0], [0.0, -1.0, 0.0]);
}

/// Test parsing a Hawkins-Keating robot.
#[test]
fn test_parse_hawkins_keating_geometry() {
    let toml_str = r#"
[robots.cobot]
name = "cobot"

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
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let robot = config.robot("cobot").unwrap();
    assert_eq!(robot.geometry.kind(), SolverKind::HawkinsKeating);
    assert_eq!(config.robot_names().collect::<Vec<_>>(), vec!["cobot"]);
}

/// Test that a robot with fewer than six axes is rejected by the parser.
#[test]
fn test_five_axes_rejected() {
    let toml_str = desk_toml("").replace(
        "[[robots.desk.axes]]\nmin_degrees = -350.0",
        "[robots.desk.spare]\nmin_degrees = -350.0",
    );
    assert!(toml::from_str::<SystemConfig>(&toml_str).is_err());
}

/// Test that an unknown solver model is rejected.
#[test]
fn test_unknown_geometry_rejected() {
    let toml_str = desk_toml("").replace("spherical_wrist", "scara");
    assert!(toml::from_str::<SystemConfig>(&toml_str).is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("six_axis_ik_load_config_test.toml");
    std::fs::write(&path, desk_toml("")).expect("Failed to write config");

    let config = load_config(&path).expect("Failed to load config");
    assert!(config.robot("desk").is_some());

    let _ = std::fs::remove_file(&path);
}

/// Test that a missing file is reported as an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/six_axis_ik.toml");
    assert!(matches!(
        result,
        Err(six_axis_ik::Error::Config(six_axis_ik::error::ConfigError::IoError(_)))
    ));
}
