//! Pinhole intrinsics derivation from the simulator's vertical-FOV
//! convention.

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::request::CameraRequest;

/// Optical frame id of the left camera.
pub const LEFT_CAMERA_FRAME: &str = "left_cam";
/// Optical frame id of the right camera.
pub const RIGHT_CAMERA_FRAME: &str = "right_cam";

/// Relative tolerance for the square-pixel check. fx and fy are equal in
/// exact arithmetic; floating point may disagree in the last few ulps.
const FOCAL_REL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Error)]
pub enum CalibrationError {
    /// Left and right cameras of a stereo pair must share image geometry.
    #[error("stereo pair disagrees on {field}: left {left}, right {right}")]
    StereoMismatch {
        field: &'static str,
        left: f64,
        right: f64,
    },
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    /// The derived focal lengths should agree; a mismatch means the FOV or
    /// aspect inputs do not describe square pixels.
    #[error("square-pixel assumption violated: fx = {fx}, fy = {fy}")]
    NonSquarePixels { fx: f64, fy: f64 },
}

/// Calibrated pinhole parameters for one camera of a stereo pair.
///
/// `fx`, `fy`, `cx`, `cy` are shared across the pair; `tx`/`ty` carry the
/// camera-specific stereo projection offset (`tx = -fx * baseline` on the
/// right camera, zero on the left).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    pub frame_id: String,
    pub width: u32,
    pub height: u32,
    pub fx: f64,
    pub fy: f64,
    pub cx: f64,
    pub cy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl CameraIntrinsics {
    /// The 3x3 calibration matrix K.
    #[rustfmt::skip]
    pub fn k_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.fx, 0.0, self.cx,
            0.0, self.fy, self.cy,
            0.0, 0.0, 1.0,
        )
    }
}

/// Derive intrinsics for a stereo camera pair from its simulator requests.
///
/// The simulator parameterizes cameras by vertical FOV; the horizontal FOV
/// follows from the viewport aspect ratio:
///
/// ```text
/// fov_h = 2 * atan(tan(fov_v / 2) * width / height)
/// fx = (width / 2) / tan(fov_h / 2)
/// fy = (height / 2) / tan(fov_v / 2)
/// ```
///
/// The principal point uses true division (`width / 2.0`), so odd image
/// dimensions get a sub-pixel center rather than a floor-divided one.
///
/// The stereo baseline is the horizontal offset between the two camera
/// positions; the cameras are assumed coplanar and offset along the body
/// X axis only.
pub fn stereo_intrinsics(
    left: &CameraRequest,
    right: &CameraRequest,
) -> Result<(CameraIntrinsics, CameraIntrinsics), CalibrationError> {
    check_pair_field("width", f64::from(left.width), f64::from(right.width))?;
    check_pair_field("height", f64::from(left.height), f64::from(right.height))?;
    check_pair_field("fov", left.fov_vertical_deg, right.fov_vertical_deg)?;

    if left.width == 0 || left.height == 0 {
        return Err(CalibrationError::InvalidDimensions {
            width: left.width,
            height: left.height,
        });
    }

    let width = f64::from(left.width);
    let height = f64::from(left.height);

    let fov_v = left.fov_vertical_deg.to_radians();
    let fov_h = 2.0 * ((fov_v / 2.0).tan() * width / height).atan();

    let fx = (width / 2.0) / (fov_h / 2.0).tan();
    let fy = (height / 2.0) / (fov_v / 2.0).tan();

    if (fx - fy).abs() > FOCAL_REL_TOLERANCE * fx.abs().max(fy.abs()) {
        return Err(CalibrationError::NonSquarePixels { fx, fy });
    }

    // Sub-pixel image center; equals floor division for even dimensions.
    let cx = width / 2.0;
    let cy = height / 2.0;

    let baseline = (left.position.x - right.position.x).abs();
    debug!(fx, fy, cx, cy, baseline, "derived stereo pinhole intrinsics");

    let left_intrinsics = CameraIntrinsics {
        frame_id: LEFT_CAMERA_FRAME.to_string(),
        width: left.width,
        height: left.height,
        fx,
        fy,
        cx,
        cy,
        tx: 0.0,
        ty: 0.0,
    };
    let right_intrinsics = CameraIntrinsics {
        frame_id: RIGHT_CAMERA_FRAME.to_string(),
        tx: -fx * baseline,
        ..left_intrinsics.clone()
    };

    Ok((left_intrinsics, right_intrinsics))
}

fn check_pair_field(field: &'static str, left: f64, right: f64) -> Result<(), CalibrationError> {
    if left != right {
        return Err(CalibrationError::StereoMismatch { field, left, right });
    }
    Ok(())
}
