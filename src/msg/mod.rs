//! Outbound message assembly.
//!
//! These are plain field-by-field records in the shapes downstream
//! consumers expect; transport, timestamp sourcing, and topic wiring live
//! with the publisher, not here.

pub mod camera_info;
pub mod imu;
pub mod odometry;

pub use camera_info::{CameraInfo, PLUMB_BOB};
pub use imu::Imu;
pub use odometry::Odometry;
