//! Fixed frame conventions relating the simulator's left-handed frames to
//! right-handed robotics frames.
//!
//! # Frame Conventions
//!
//! ## Simulator world frame (left-handed)
//! ```text
//!        +Y (up)
//!         |
//!         |
//!         +------ +X (east)
//!        /
//!       /
//!      +Z (north, forward)
//! ```
//!
//! ## ENU world frame (right-handed)
//! ```text
//!        +Z (up)
//!         |
//!         |
//!         +------ +X (east)
//!        /
//!       /
//!      +Y (north)
//! ```
//!
//! ## Body frames
//! The simulator reports body-relative quantities in a left-handed body
//! frame (`blh`) with the same axis roles as its world frame: X-right,
//! Y-up, Z-forward. The right-handed body frame (`brh`) is X-forward,
//! Y-left, Z-up.
//!
//! # Transformation Naming Convention
//!
//! We use the notation `t_target_source`: `t_enu_sim` maps simulator-world
//! coordinates into ENU, `p_enu = t_enu_sim * p_sim`.
//!
//! Each left/right-handed remap is a fixed orthonormal transform with
//! determinant -1 (a handedness flip is a reflection, not a rotation). The
//! full world-from-body conversion `t_enu_sim * t_sim_blh * t_blh_brh`
//! composes two of them, so converter outputs are proper rotations again.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use nalgebra::{Matrix3, Matrix4, Vector3};
use serde::Deserialize;

use super::Transform;

/// ENU gravity vector (m/s^2).
pub const GRAVITY_ENU: Vector3<f64> = Vector3::new(0.0, 0.0, -9.81);

/// Fixed remap from the simulator's left-handed world frame to ENU:
/// east stays on X, the simulator's forward (+Z) becomes north (+Y),
/// and its up (+Y) becomes up (+Z).
#[rustfmt::skip]
fn remap_enu_sim() -> Matrix4<f64> {
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, // ENU X = sim X (east)
        0.0, 0.0, 1.0, 0.0, // ENU Y = sim Z (north)
        0.0, 1.0, 0.0, 0.0, // ENU Z = sim Y (up)
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Fixed remap from the left-handed body frame to the right-handed body
/// frame: forward from +Z, left from -X, up from +Y.
#[rustfmt::skip]
fn remap_brh_blh() -> Matrix4<f64> {
    Matrix4::new(
         0.0, 0.0, 1.0, 0.0, // brh X = blh Z (forward)
        -1.0, 0.0, 0.0, 0.0, // brh Y = -blh X (left)
         0.0, 1.0, 0.0, 0.0, // brh Z = blh Y (up)
         0.0, 0.0, 0.0, 1.0,
    )
}

/// Immutable frame-convention constants, injected into the components that
/// need them rather than referenced as ambient globals.
///
/// `Default` supplies the simulator constants above;
/// [`FrameConventions::from_yaml_file`] loads alternative axis conventions
/// for other simulators or for tests.
#[derive(Debug, Clone)]
pub struct FrameConventions {
    /// ENU world from simulator world (left-handed).
    pub t_enu_sim: Transform,
    /// Right-handed body from left-handed body.
    pub t_brh_blh: Transform,
    /// Left-handed body from right-handed body (inverse of `t_brh_blh`).
    pub t_blh_brh: Transform,
    /// Gravity expressed in ENU.
    pub gravity_enu: Vector3<f64>,
}

impl Default for FrameConventions {
    fn default() -> Self {
        let t_brh_blh = Transform::from_matrix(remap_brh_blh());
        Self {
            t_enu_sim: Transform::from_matrix(remap_enu_sim()),
            t_blh_brh: t_brh_blh.inverse(),
            t_brh_blh,
            gravity_enu: GRAVITY_ENU,
        }
    }
}

/// On-disk conventions format: row-major 16-element transforms, like the
/// sensor calibration YAML files of EuRoC-style datasets.
#[derive(Debug, Deserialize)]
struct ConventionsYaml {
    t_enu_sim: TransformYaml,
    t_brh_blh: TransformYaml,
    gravity_enu: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct TransformYaml {
    data: Vec<f64>,
}

impl FrameConventions {
    /// Load conventions from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read conventions file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Invalid conventions file {}", path.display()))
    }

    /// Parse conventions from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw: ConventionsYaml = serde_yaml::from_str(text)?;

        let t_enu_sim = transform_from(&raw.t_enu_sim.data, "t_enu_sim")?;
        let t_brh_blh = transform_from(&raw.t_brh_blh.data, "t_brh_blh")?;

        if raw.gravity_enu.len() != 3 {
            bail!(
                "Expected 3 elements for gravity_enu, got {}",
                raw.gravity_enu.len()
            );
        }
        let gravity_enu = Vector3::new(raw.gravity_enu[0], raw.gravity_enu[1], raw.gravity_enu[2]);

        Ok(Self {
            t_blh_brh: t_brh_blh.inverse(),
            t_enu_sim,
            t_brh_blh,
            gravity_enu,
        })
    }
}

fn transform_from(data: &[f64], name: &str) -> Result<Transform> {
    if data.len() != 16 {
        bail!("Expected 16 elements for {}, got {}", name, data.len());
    }
    let tf = Transform::from_matrix(Matrix4::from_row_slice(data));
    if !is_orthonormal(&tf.rotation()) {
        bail!("Rotation block of {} is not orthonormal", name);
    }
    Ok(tf)
}

fn is_orthonormal(r: &Matrix3<f64>) -> bool {
    (r * r.transpose() - Matrix3::identity()).norm() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_remaps_are_orthonormal_reflections() {
        let conv = FrameConventions::default();

        for tf in [&conv.t_enu_sim, &conv.t_brh_blh, &conv.t_blh_brh] {
            let r = tf.rotation();
            assert_relative_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-12);
            // A handedness flip is a reflection.
            assert_relative_eq!(r.determinant(), -1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_world_remap_axis_roles() {
        let r = FrameConventions::default().t_enu_sim.rotation();

        // Simulator forward (+Z) is north, simulator up (+Y) is up.
        assert_relative_eq!(r * Vector3::z(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(r * Vector3::y(), Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(r * Vector3::x(), Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn test_body_remap_axis_roles() {
        let r = FrameConventions::default().t_brh_blh.rotation();

        // Left-handed body forward (+Z) becomes +X, its right (+X) becomes -Y.
        assert_relative_eq!(r * Vector3::z(), Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(r * Vector3::x(), -Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(r * Vector3::y(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_body_remaps_invert_each_other() {
        let conv = FrameConventions::default();
        let eye = conv.t_brh_blh.compose(&conv.t_blh_brh);
        assert_relative_eq!(*eye.matrix(), Matrix4::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_yaml_round_trip_matches_default() {
        let text = r#"
t_enu_sim:
  data: [1.0, 0.0, 0.0, 0.0,
         0.0, 0.0, 1.0, 0.0,
         0.0, 1.0, 0.0, 0.0,
         0.0, 0.0, 0.0, 1.0]
t_brh_blh:
  data: [0.0, 0.0, 1.0, 0.0,
         -1.0, 0.0, 0.0, 0.0,
         0.0, 1.0, 0.0, 0.0,
         0.0, 0.0, 0.0, 1.0]
gravity_enu: [0.0, 0.0, -9.81]
"#;
        let loaded = FrameConventions::from_yaml_str(text).unwrap();
        let default = FrameConventions::default();

        assert_relative_eq!(*loaded.t_enu_sim.matrix(), *default.t_enu_sim.matrix());
        assert_relative_eq!(*loaded.t_brh_blh.matrix(), *default.t_brh_blh.matrix());
        assert_relative_eq!(*loaded.t_blh_brh.matrix(), *default.t_blh_brh.matrix());
        assert_relative_eq!(loaded.gravity_enu, default.gravity_enu);
    }

    #[test]
    fn test_yaml_rejects_wrong_length() {
        let text = r#"
t_enu_sim:
  data: [1.0, 0.0, 0.0]
t_brh_blh:
  data: [0.0, 0.0, 1.0, 0.0,
         -1.0, 0.0, 0.0, 0.0,
         0.0, 1.0, 0.0, 0.0,
         0.0, 0.0, 0.0, 1.0]
gravity_enu: [0.0, 0.0, -9.81]
"#;
        assert!(FrameConventions::from_yaml_str(text).is_err());
    }

    #[test]
    fn test_yaml_rejects_non_orthonormal_remap() {
        let text = r#"
t_enu_sim:
  data: [2.0, 0.0, 0.0, 0.0,
         0.0, 0.0, 1.0, 0.0,
         0.0, 1.0, 0.0, 0.0,
         0.0, 0.0, 0.0, 1.0]
t_brh_blh:
  data: [0.0, 0.0, 1.0, 0.0,
         -1.0, 0.0, 0.0, 0.0,
         0.0, 1.0, 0.0, 0.0,
         0.0, 0.0, 0.0, 1.0]
gravity_enu: [0.0, 0.0, -9.81]
"#;
        assert!(FrameConventions::from_yaml_str(text).is_err());
    }
}
