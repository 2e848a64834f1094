//! Pose and twist conversion out of the simulator's left-handed frames.

use nalgebra::{Matrix3, Vector3, Vector4};

use crate::geometry::{FrameConventions, Transform};

/// Converts left-handed world-frame poses into ENU-from-right-handed-body
/// transforms.
#[derive(Debug, Clone)]
pub struct FrameConverter {
    conventions: FrameConventions,
}

impl FrameConverter {
    pub fn new(conventions: FrameConventions) -> Self {
        Self { conventions }
    }

    /// Build `t_enu_brh` from a simulator pose.
    ///
    /// The simulator pose defines `t_sim_blh` (left-handed world from
    /// left-handed body); sandwiching it between the two fixed axis remaps
    /// yields the right-handed result:
    ///
    /// ```text
    /// t_enu_brh = t_enu_sim * t_sim_blh * t_blh_brh
    /// ```
    pub fn pose_to_enu(&self, position: &Vector3<f64>, quaternion: &Vector4<f64>) -> Transform {
        let t_sim_blh = Transform::from_pose(position, quaternion);
        self.conventions
            .t_enu_sim
            .compose(&t_sim_blh)
            .compose(&self.conventions.t_blh_brh)
    }
}

/// Rotates body-frame velocity vectors into the right-handed body frame.
///
/// Velocities are frame-relative vectors, not points, so only the rotation
/// block of `t_brh_blh` applies. Pure linear map, no state.
#[derive(Debug, Clone)]
pub struct TwistAdapter {
    r_brh_blh: Matrix3<f64>,
}

impl TwistAdapter {
    pub fn new(conventions: &FrameConventions) -> Self {
        Self {
            r_brh_blh: conventions.t_brh_blh.rotation(),
        }
    }

    pub fn to_right_handed(&self, v_blh: &Vector3<f64>) -> Vector3<f64> {
        self.r_brh_blh * v_blh
    }
}
