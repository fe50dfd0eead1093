//! Core types used throughout Vantage

use glam::{Mat3, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Basis columns shorter than this are treated as degenerate and left
/// unnormalized during decomposition.
pub const SCALE_EPSILON: f32 = 1e-4;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a new transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Compute the model matrix for this transform (`T * R * S`)
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Decompose an affine matrix into translation, rotation and per-axis scale.
    ///
    /// Translation comes from the last column and scale from the length of
    /// each basis column. Each column is divided by its own scale unless that
    /// scale is below [`SCALE_EPSILON`], in which case the column is kept as-is.
    /// The resulting basis is converted to a unit quaternion.
    ///
    /// A reflected matrix (negative determinant) has its reflection folded
    /// into a negative X scale so the remaining basis is a proper rotation.
    /// Shear is not representable and is silently lost.
    pub fn from_matrix(matrix: Mat4) -> Self {
        let position = matrix.w_axis.truncate();

        let mut columns = [
            matrix.x_axis.truncate(),
            matrix.y_axis.truncate(),
            matrix.z_axis.truncate(),
        ];
        let mut scale = Vec3::new(columns[0].length(), columns[1].length(), columns[2].length());
        if matrix.determinant() < 0.0 {
            scale.x = -scale.x;
        }

        for (column, axis_scale) in columns.iter_mut().zip(scale.to_array()) {
            if axis_scale.abs() >= SCALE_EPSILON {
                *column /= axis_scale;
            }
        }

        let basis = Mat3::from_cols(columns[0], columns[1], columns[2]);
        let rotation = Quat::from_mat3(&basis);
        let rotation = if rotation.is_finite() && rotation.length_squared() > f32::EPSILON {
            rotation.normalize()
        } else {
            Quat::IDENTITY
        };

        Self {
            position,
            rotation,
            scale,
        }
    }
}
