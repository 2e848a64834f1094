//! Odometry message assembly from processed telemetry.

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::bridge::ProcessedMetadata;

/// Field-by-field image of a `nav_msgs/Odometry` message.
///
/// Pose is in the ENU world frame; twist is in the right-handed body
/// frame. Transport headers beyond the frame ids are the publisher's
/// concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Odometry {
    /// World frame the pose is expressed in.
    pub frame_id: String,
    /// Body frame the twist is expressed in.
    pub child_frame_id: String,
    pub time: f64,
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub linear_velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
}

impl Odometry {
    pub fn from_processed(meta: &ProcessedMetadata, frame_id: &str, child_frame_id: &str) -> Self {
        Self {
            frame_id: frame_id.to_string(),
            child_frame_id: child_frame_id.to_string(),
            time: meta.time,
            position: meta.position,
            orientation: meta.orientation,
            linear_velocity: meta.velocity,
            angular_velocity: meta.ang_vel,
        }
    }
}
