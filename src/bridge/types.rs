//! Telemetry records on both sides of the frame conversion.

use nalgebra::{Matrix3, UnitQuaternion, Vector3, Vector4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Transform;

#[derive(Debug, Clone, Error)]
pub enum TelemetryError {
    /// The caller fed samples whose timestamps are not strictly increasing.
    /// Finite differencing needs `dt > 0`; `dt == 0` would divide by zero.
    #[error("time delta must be positive for finite differencing, got {dt}")]
    InvalidTimeDelta { dt: f64 },
}

/// One agent-state snapshot as reported by the simulator, already parsed
/// from the wire format.
///
/// Position and quaternion are in the simulator's left-handed world frame;
/// velocities and accelerations are in its left-handed body frame. The
/// quaternion uses the simulator's `(x, y, z, w)` wire order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedMetadata {
    pub position: Vector3<f64>,
    pub quaternion: Vector4<f64>,
    pub velocity: Vector3<f64>,
    pub ang_vel: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    pub ang_accel: Vector3<f64>,
    /// Simulator time in seconds.
    pub time: f64,
    pub collision: bool,
}

/// The previous sample's contribution to finite differencing.
///
/// This is the only state that persists across processor calls, and it is
/// owned by the caller: each logical telemetry stream keeps its own. The
/// first call in a stream passes `None` instead of fabricating a prior.
#[derive(Debug, Clone, Copy)]
pub struct PriorSample {
    pub time: f64,
    /// Linear velocity in the right-handed body frame.
    pub vel_brh: Vector3<f64>,
    /// Rotation from the right-handed body frame to ENU.
    pub r_enu_brh: Matrix3<f64>,
}

/// One agent-state snapshot after frame conversion.
///
/// Position and orientation are in the right-handed ENU world frame;
/// velocity, angular velocity, and acceleration are in the right-handed
/// body frame. Time and collision status pass through unchanged.
#[derive(Debug, Clone)]
pub struct ProcessedMetadata {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub velocity: Vector3<f64>,
    pub ang_vel: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    /// Angular acceleration is not estimated; `None` lets consumers tell
    /// "not computed" apart from "computed as zero".
    pub ang_accel: Option<Vector3<f64>>,
    pub time: f64,
    pub collision: bool,
    /// ENU world from right-handed body at this sample. Downstream gravity
    /// compensation re-expresses the ENU gravity vector through this.
    pub t_enu_brh: Transform,
}

impl ProcessedMetadata {
    /// The state the next processor call needs from this sample.
    pub fn prior(&self) -> PriorSample {
        PriorSample {
            time: self.time,
            vel_brh: self.velocity,
            r_enu_brh: self.t_enu_brh.rotation(),
        }
    }
}
