use nalgebra::{Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// One physical camera's parameters as reported by the simulator, already
/// parsed from the wire format.
///
/// Position and quaternion are relative to the agent's left-handed body
/// frame. The FOV is vertical; the horizontal FOV is derived from it and
/// the viewport aspect ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRequest {
    pub name: String,
    /// Camera ID in the simulator.
    pub id: i32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_vertical_deg: f64,
    pub position: Vector3<f64>,
    /// `(x, y, z, w)` wire order.
    pub quaternion: Vector4<f64>,
    /// Near draw distance.
    pub near: f64,
    /// Far draw distance.
    pub far: f64,
}
