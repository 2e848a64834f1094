//! Geometry utilities: homogeneous transforms, frame conventions.

pub mod frames;
pub mod transform;

pub use frames::{FrameConventions, GRAVITY_ENU};
pub use transform::Transform;
