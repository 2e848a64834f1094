//! IMU message assembly with gravity compensation.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::bridge::ProcessedMetadata;

/// Field-by-field image of a `sensor_msgs/Imu` message, all fields in the
/// right-handed body frame.
///
/// Real accelerometers measure specific force, not coordinate
/// acceleration, so the ENU gravity vector is re-expressed in the body
/// frame through the sample's attached transform and subtracted:
///
/// ```text
/// a_measured = a_body - r_enu_brh^T * g_enu
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Imu {
    /// Body frame the measurements are expressed in.
    pub frame_id: String,
    pub time: f64,
    pub angular_velocity: Vector3<f64>,
    pub linear_acceleration: Vector3<f64>,
}

impl Imu {
    pub fn from_processed(
        meta: &ProcessedMetadata,
        gravity_enu: &Vector3<f64>,
        frame_id: &str,
    ) -> Self {
        let g_brh = meta.t_enu_brh.rotation().transpose() * gravity_enu;
        Self {
            frame_id: frame_id.to_string(),
            time: meta.time,
            angular_velocity: meta.ang_vel,
            linear_acceleration: meta.acceleration - g_brh,
        }
    }
}
