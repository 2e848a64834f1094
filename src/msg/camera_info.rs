//! Calibration message assembly in the `sensor_msgs/CameraInfo` layout.

use serde::{Deserialize, Serialize};

use crate::camera::CameraIntrinsics;

/// The only distortion model this bridge emits; coefficients are always
/// zero.
pub const PLUMB_BOB: &str = "plumb_bob";

/// Field-by-field image of a `sensor_msgs/CameraInfo` message.
///
/// Downstream consumers expect these exact row-major layouts:
///
/// ```text
/// K = [fx, 0, cx,
///      0, fy, cy,
///      0,  0,  1]
/// P = [fx, 0, cx, tx,
///      0, fy, cy, ty,
///      0,  0,  1,  0]
/// ```
///
/// R is identity (no rectification) and D is the zero vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraInfo {
    /// Optical frame of the camera.
    pub frame_id: String,
    pub width: u32,
    pub height: u32,
    pub distortion_model: String,
    pub d: Vec<f64>,
    pub k: [f64; 9],
    pub r: [f64; 9],
    pub p: [f64; 12],
}

impl CameraInfo {
    #[rustfmt::skip]
    pub fn from_intrinsics(intr: &CameraIntrinsics) -> Self {
        let (fx, fy, cx, cy) = (intr.fx, intr.fy, intr.cx, intr.cy);
        let (tx, ty) = (intr.tx, intr.ty);
        Self {
            frame_id: intr.frame_id.clone(),
            width: intr.width,
            height: intr.height,
            distortion_model: PLUMB_BOB.to_string(),
            d: vec![0.0, 0.0, 0.0, 0.0],
            k: [
                fx, 0.0, cx,
                0.0, fy, cy,
                0.0, 0.0, 1.0,
            ],
            r: [
                1.0, 0.0, 0.0,
                0.0, 1.0, 0.0,
                0.0, 0.0, 1.0,
            ],
            p: [
                fx, 0.0, cx, tx,
                0.0, fy, cy, ty,
                0.0, 0.0, 1.0, 0.0,
            ],
        }
    }
}
