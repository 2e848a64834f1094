//! Bridges a simulator's left-handed agent telemetry and stereo camera
//! parameters into right-handed ENU conventions for robotics consumers.

pub mod bridge;
pub mod camera;
pub mod geometry;
pub mod msg;
