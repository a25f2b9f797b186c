//! Robot link geometry.

use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

/// Link lengths and offsets of a spherical-wrist arm (millimetres).
///
/// `a1`: shoulder offset along X, `a2`: elbow offset, `b`: lateral offset,
/// `c1`: base height, `c2`: upper arm, `c3`: forearm, `c4`: wrist to flange.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SphericalWristGeometry {
    /// Shoulder offset from axis 1.
    pub a1: f64,
    /// Elbow offset perpendicular to the forearm.
    pub a2: f64,
    /// Lateral offset.
    #[serde(default)]
    pub b: f64,
    /// Height of axis 2 above the base.
    pub c1: f64,
    /// Upper arm length (axis 2 to axis 3).
    pub c2: f64,
    /// Forearm length (axis 3 to wrist centre).
    pub c3: f64,
    /// Wrist centre to flange.
    pub c4: f64,
}

/// Link lengths of a non-spherical-wrist (co-bot style) arm, in DH form.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HawkinsKeatingGeometry {
    /// Base height.
    pub d1: f64,
    /// Shoulder-to-wrist lateral offset.
    pub d4: f64,
    /// Wrist 1 to wrist 2.
    pub d5: f64,
    /// Wrist 2 to flange.
    pub d6: f64,
    /// Upper arm length (signed DH `a`).
    pub a2: f64,
    /// Forearm length (signed DH `a`).
    pub a3: f64,
}

/// Geometry of a robot, tagged with the solver model it needs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotGeometry {
    /// Arm with intersecting wrist axes.
    SphericalWrist(SphericalWristGeometry),
    /// Arm whose wrist axes do not intersect.
    HawkinsKeating(HawkinsKeatingGeometry),
}

/// Which closed-form model solves a robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Spherical-wrist model.
    SphericalWrist,
    /// Hawkins-Keating model.
    HawkinsKeating,
}

impl RobotGeometry {
    /// Solver model this geometry belongs to.
    pub fn kind(&self) -> SolverKind {
        match self {
            RobotGeometry::SphericalWrist(_) => SolverKind::SphericalWrist,
            RobotGeometry::HawkinsKeating(_) => SolverKind::HawkinsKeating,
        }
    }

    /// Check that every link is finite and the links the solver divides by are non-zero.
    pub fn validate(&self) -> Result<()> {
        match self {
            RobotGeometry::SphericalWrist(g) => {
                check_finite("a1", g.a1)?;
                check_finite("a2", g.a2)?;
                check_finite("b", g.b)?;
                check_finite("c1", g.c1)?;
                check_positive("c2", g.c2)?;
                check_positive("c3", g.c3)?;
                check_finite("c4", g.c4)?;
                if g.c4 < 0.0 {
                    return Err(invalid("c4", g.c4));
                }
            }
            RobotGeometry::HawkinsKeating(g) => {
                check_finite("d1", g.d1)?;
                check_finite("d4", g.d4)?;
                check_finite("d5", g.d5)?;
                check_finite("d6", g.d6)?;
                check_finite("a2", g.a2)?;
                check_finite("a3", g.a3)?;
                if g.d6 == 0.0 {
                    return Err(invalid("d6", g.d6));
                }
                if g.a2 == 0.0 {
                    return Err(invalid("a2", g.a2));
                }
                if g.a3 == 0.0 {
                    return Err(invalid("a3", g.a3));
                }
            }
        }
        Ok(())
    }
}

impl From<SphericalWristGeometry> for RobotGeometry {
    fn from(g: SphericalWristGeometry) -> Self {
        RobotGeometry::SphericalWrist(g)
    }
}

impl From<HawkinsKeatingGeometry> for RobotGeometry {
    fn from(g: HawkinsKeatingGeometry) -> Self {
        RobotGeometry::HawkinsKeating(g)
    }
}

fn invalid(link: &'static str, value: f64) -> Error {
    Error::Config(ConfigError::InvalidLinkLength { link, value })
}

fn check_finite(link: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(link, value))
    }
}

fn check_positive(link: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(link, value))
    }
}
