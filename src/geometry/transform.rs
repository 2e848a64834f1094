//! Homogeneous rigid-body transforms.

use nalgebra::{Matrix3, Matrix4, Quaternion, Rotation3, UnitQuaternion, Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// A 4x4 homogeneous transform: 3x3 rotation block, 3x1 translation column,
/// and a fixed `[0, 0, 0, 1]` bottom row.
///
/// We use the notation `t_target_source`: `t_enu_brh` maps points expressed
/// in the right-handed body frame into the ENU world frame,
/// `p_enu = t_enu_brh * p_brh`.
///
/// Composing transforms whose rotation blocks are orthonormal keeps the
/// rotation block orthonormal. Axis-remap transforms between left- and
/// right-handed frames carry determinant -1 individually; a full
/// world-from-body conversion composes two of them and lands back at +1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform(Matrix4<f64>);

impl Transform {
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Build from a rotation block and a translation column.
    pub fn from_parts(rotation: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation);
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&translation);
        Self(m)
    }

    /// Wrap a raw 4x4 matrix. The caller is responsible for the bottom row.
    pub fn from_matrix(m: Matrix4<f64>) -> Self {
        Self(m)
    }

    /// Build from a position and an `(x, y, z, w)` quaternion, the wire
    /// order used by the simulator.
    pub fn from_pose(position: &Vector3<f64>, quaternion: &Vector4<f64>) -> Self {
        let q = UnitQuaternion::from_quaternion(Quaternion::new(
            quaternion.w,
            quaternion.x,
            quaternion.y,
            quaternion.z,
        ));
        Self::from_parts(q.to_rotation_matrix().into_inner(), *position)
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.0
    }

    /// The top-left 3x3 rotation block.
    pub fn rotation(&self) -> Matrix3<f64> {
        self.0.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The first three rows of the last column.
    pub fn translation(&self) -> Vector3<f64> {
        self.0.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Convert the rotation block to a unit quaternion.
    ///
    /// Only the 3x3 block participates, so translation cannot leak into the
    /// conversion. Valid only when the block is a proper rotation
    /// (determinant +1); reflections have no quaternion representation.
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(self.rotation()))
    }

    /// Chain transforms: `t_a_c = t_a_b.compose(&t_b_c)`.
    pub fn compose(&self, rhs: &Transform) -> Transform {
        Transform(self.0 * rhs.0)
    }

    /// Rigid inverse: transpose the rotation block, counter-rotate the
    /// translation. Assumes the rotation block is orthonormal.
    pub fn inverse(&self) -> Transform {
        let r_t = self.rotation().transpose();
        Self::from_parts(r_t, -(r_t * self.translation()))
    }
}
