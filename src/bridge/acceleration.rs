//! Finite-difference estimation of body-frame linear acceleration.

use nalgebra::{Matrix3, Vector3};

use super::types::TelemetryError;

/// Estimate linear acceleration in the right-handed body frame from two
/// velocity samples.
///
/// Both velocities are lifted into ENU through their respective rotations
/// before differencing:
///
/// ```text
/// a_enu = (r_enu_brh * v - prev_r_enu_brh * prev_v) / dt
/// a_brh = r_enu_brh^T * a_enu
/// ```
///
/// Differencing in the shared world frame keeps the body frame's own
/// rotation between the samples from showing up as spurious linear
/// acceleration. Angular acceleration is not estimated here at all;
/// consumers see it as explicitly absent.
///
/// Fails with [`TelemetryError::InvalidTimeDelta`] unless `dt > 0`: a
/// negative `dt` means the caller broke timestamp monotonicity, and
/// `dt == 0` has no defined derivative. The check also rejects NaN.
pub fn finite_difference_acceleration(
    r_enu_brh: &Matrix3<f64>,
    vel_brh: &Vector3<f64>,
    prev_r_enu_brh: &Matrix3<f64>,
    prev_vel_brh: &Vector3<f64>,
    dt: f64,
) -> Result<Vector3<f64>, TelemetryError> {
    if !(dt > 0.0) {
        return Err(TelemetryError::InvalidTimeDelta { dt });
    }

    let vel_enu = r_enu_brh * vel_brh;
    let prev_vel_enu = prev_r_enu_brh * prev_vel_brh;

    let accel_enu = (vel_enu - prev_vel_enu) / dt;
    Ok(r_enu_brh.transpose() * accel_enu)
}
