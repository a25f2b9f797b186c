//! Unit tests for configuration validation.

use six_axis_ik::config::{validate_config, SystemConfig};
use six_axis_ik::error::{ConfigError, Error};
use six_axis_ik::parse_config;

fn robot_toml(key: &str, name: &str, axis5_range: (f64, f64), offset: &str) -> String {
    let mut out = format!(
        r#"
[robots.{key}]
name = "{name}"

[robots.{key}.geometry.spherical_wrist]
a1 = 32.0
a2 = 20.0
c1 = 78.0
c2 = 128.0
c3 = 118.25
c4 = 20.0
"#
    );
    for axis in 0..6 {
        let (min, max) = if axis == 4 {
            axis5_range
        } else {
            (-170.0, 170.0)
        };
        out.push_str(&format!(
            "\n[[robots.{key}.axes]]\nmin_degrees = {min:.1}\nmax_degrees = {max:.1}\n{offset}\n"
        ));
    }
    out
}

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = robot_toml("arm", "desk", (-120.0, 120.0), "");
    let config: SystemConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for an inverted axis range.
#[test]
fn test_inverted_axis_range() {
    let toml_str = robot_toml("arm", "desk", (120.0, -120.0), "");
    let config: SystemConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidAxisRange { axis: 4, .. }))
    ));
}

/// Test validation fails for two robots sharing a display name.
#[test]
fn test_duplicate_robot_names() {
    let mut toml_str = robot_toml("left", "twin", (-120.0, 120.0), "");
    toml_str.push_str(&robot_toml("right", "twin", (-120.0, 120.0), ""));

    let config: SystemConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::DuplicateRobotName(_)))
    ));
}

/// Test that a zero upper arm is rejected.
#[test]
fn test_zero_link_rejected() {
    let toml_str = robot_toml("arm", "desk", (-120.0, 120.0), "").replace("c2 = 128.0", "c2 = 0.0");
    let config: SystemConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidLinkLength { link: "c2", .. }))
    ));
}

/// Test that parse_config validates as well as parses.
#[test]
fn test_parse_config_runs_validation() {
    let toml_str = robot_toml("arm", "desk", (120.0, -120.0), "");
    assert!(parse_config(&toml_str).is_err());

    let toml_str = robot_toml("arm", "desk", (-120.0, 120.0), "offset_degrees = 15.0");
    let config = parse_config(&toml_str).expect("Valid config rejected");
    assert_eq!(config.robot("arm").unwrap().axes[5].offset.0, 15.0);
}

/// Test that an empty robot table is valid.
#[test]
fn test_empty_config_is_valid() {
    let config: SystemConfig = toml::from_str("[robots]\n").expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
    assert_eq!(config.robot_names().count(), 0);
}
