//! Telemetry conversion pipeline: left-handed simulator snapshots in,
//! right-handed ENU snapshots out.

pub mod acceleration;
pub mod converter;
pub mod processor;
pub mod types;

pub use acceleration::finite_difference_acceleration;
pub use converter::{FrameConverter, TwistAdapter};
pub use processor::MetadataProcessor;
pub use types::{ParsedMetadata, PriorSample, ProcessedMetadata, TelemetryError};
