//! Rigid poses and the authoring-to-solver frame remap.

use nalgebra::{Matrix3, Vector3};
use serde::Deserialize;

/// Position plus orthonormal rotation, expressed in some parent frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Origin of the child frame in parent coordinates.
    pub position: Vector3<f64>,
    /// Child axes as columns, in parent coordinates.
    pub rotation: Matrix3<f64>,
}

impl Pose {
    /// The identity pose.
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Matrix3::identity(),
        }
    }

    /// Create a pose from a position and a rotation matrix.
    pub fn new(position: Vector3<f64>, rotation: Matrix3<f64>) -> Self {
        Self { position, rotation }
    }

    /// Create a pose from three coordinates and nine row-major rotation entries.
    pub fn from_row_major(position: [f64; 3], rotation: [f64; 9]) -> Self {
        Self {
            position: Vector3::new(position[0], position[1], position[2]),
            rotation: Matrix3::from_row_slice(&rotation),
        }
    }

    /// Pure translation.
    pub fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            rotation: Matrix3::identity(),
        }
    }

    /// Rotation as nine row-major entries.
    pub fn rotation_row_major(&self) -> [f64; 9] {
        let r = &self.rotation;
        [
            r[(0, 0)],
            r[(0, 1)],
            r[(0, 2)],
            r[(1, 0)],
            r[(1, 1)],
            r[(1, 2)],
            r[(2, 0)],
            r[(2, 1)],
            r[(2, 2)],
        ]
    }

    /// `self · other`: `other` is expressed in the frame described by `self`.
    pub fn compose(&self, other: &Pose) -> Pose {
        Pose {
            position: self.rotation * other.position + self.position,
            rotation: self.rotation * other.rotation,
        }
    }

    /// Inverse rigid transform.
    pub fn inverse(&self) -> Pose {
        let rt = self.rotation.transpose();
        Pose {
            position: -(rt * self.position),
            rotation: rt,
        }
    }

    /// Tool approach axis (third column).
    #[inline]
    pub fn z_axis(&self) -> Vector3<f64> {
        self.rotation.column(2).into_owned()
    }

    /// Largest absolute difference over position and rotation entries.
    pub fn max_deviation(&self, other: &Pose) -> f64 {
        let dp = (self.position - other.position).amax();
        let dr = (self.rotation - other.rotation).amax();
        if dp > dr {
            dp
        } else {
            dr
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Change-of-basis between the authoring application's frames and the solver's.
///
/// `world` maps authoring world coordinates to solver world coordinates.
/// `tool` holds the solver tool axes (as columns) in authoring tool
/// coordinates. Both must be rotations, which makes every conversion exact
/// and invertible by transposition.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FrameConverter {
    /// Row-major tool change-of-basis.
    pub tool: [[f64; 3]; 3],
    /// Row-major world change-of-basis.
    pub world: [[f64; 3]; 3],
}

impl FrameConverter {
    /// Authoring convention with the tool pointing along +Y and Z up.
    pub const AUTHORING: Self = Self {
        tool: [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]],
        world: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// No remap at all.
    pub const IDENTITY: Self = Self {
        tool: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        world: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    fn tool_matrix(&self) -> Matrix3<f64> {
        matrix(&self.tool)
    }

    fn world_matrix(&self) -> Matrix3<f64> {
        matrix(&self.world)
    }

    /// A target or tool pose in the authoring world, to the solver world and tool frames.
    pub fn target_to_solver(&self, pose: &Pose) -> Pose {
        let w = self.world_matrix();
        Pose::new(w * pose.position, w * pose.rotation * self.tool_matrix())
    }

    /// Inverse of [`FrameConverter::target_to_solver`].
    pub fn target_from_solver(&self, pose: &Pose) -> Pose {
        let wt = self.world_matrix().transpose();
        Pose::new(
            wt * pose.position,
            wt * pose.rotation * self.tool_matrix().transpose(),
        )
    }

    /// A base (world-anchored) frame to solver world coordinates.
    pub fn base_to_solver(&self, pose: &Pose) -> Pose {
        let w = self.world_matrix();
        Pose::new(w * pose.position, w * pose.rotation * w.transpose())
    }

    /// Inverse of [`FrameConverter::base_to_solver`].
    pub fn base_from_solver(&self, pose: &Pose) -> Pose {
        let w = self.world_matrix();
        let wt = w.transpose();
        Pose::new(wt * pose.position, wt * pose.rotation * w)
    }

    /// A tool-centre-point offset (authoring flange frame) to the solver flange frame.
    pub fn tcp_to_solver(&self, pose: &Pose) -> Pose {
        let t = self.tool_matrix();
        let tt = t.transpose();
        Pose::new(tt * pose.position, tt * pose.rotation * t)
    }

    /// Inverse of [`FrameConverter::tcp_to_solver`].
    pub fn tcp_from_solver(&self, pose: &Pose) -> Pose {
        let t = self.tool_matrix();
        Pose::new(t * pose.position, t * pose.rotation * t.transpose())
    }
}

impl Default for FrameConverter {
    fn default() -> Self {
        Self::AUTHORING
    }
}

fn matrix(rows: &[[f64; 3]; 3]) -> Matrix3<f64> {
    Matrix3::new(
        rows[0][0], rows[0][1], rows[0][2],
        rows[1][0], rows[1][1], rows[1][2],
        rows[2][0], rows[2][1], rows[2][2],
    )
}
