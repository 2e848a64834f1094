//! Per-sample telemetry processing pipeline.

use nalgebra::Vector3;
use tracing::debug;

use crate::geometry::FrameConventions;

use super::acceleration::finite_difference_acceleration;
use super::converter::{FrameConverter, TwistAdapter};
use super::types::{ParsedMetadata, PriorSample, ProcessedMetadata, TelemetryError};

/// Turns one parsed simulator snapshot into its right-handed equivalent.
///
/// The processor itself is stateless; the caller threads the previous
/// sample's [`PriorSample`] through successive calls (one per telemetry
/// stream) and passes `None` on the first call, which reports zero linear
/// acceleration instead of differencing against a fabricated prior.
#[derive(Debug, Clone)]
pub struct MetadataProcessor {
    converter: FrameConverter,
    twist: TwistAdapter,
}

impl MetadataProcessor {
    pub fn new(conventions: FrameConventions) -> Self {
        let twist = TwistAdapter::new(&conventions);
        let converter = FrameConverter::new(conventions);
        Self { converter, twist }
    }

    pub fn process(
        &self,
        meta: &ParsedMetadata,
        prior: Option<&PriorSample>,
    ) -> Result<ProcessedMetadata, TelemetryError> {
        let t_enu_brh = self.converter.pose_to_enu(&meta.position, &meta.quaternion);
        let r_enu_brh = t_enu_brh.rotation();

        let velocity = self.twist.to_right_handed(&meta.velocity);
        let ang_vel = self.twist.to_right_handed(&meta.ang_vel);

        let acceleration = match prior {
            Some(prev) => {
                let dt = meta.time - prev.time;
                debug!(time = meta.time, dt, "differencing velocity samples");
                finite_difference_acceleration(
                    &r_enu_brh,
                    &velocity,
                    &prev.r_enu_brh,
                    &prev.vel_brh,
                    dt,
                )?
            }
            // First sample of a stream: nothing to difference against.
            None => Vector3::zeros(),
        };

        Ok(ProcessedMetadata {
            position: t_enu_brh.translation(),
            orientation: t_enu_brh.to_quaternion(),
            velocity,
            ang_vel,
            acceleration,
            ang_accel: None,
            time: meta.time,
            collision: meta.collision,
            t_enu_brh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector4};

    fn sample(time: f64, velocity: Vector3<f64>) -> ParsedMetadata {
        ParsedMetadata {
            position: Vector3::zeros(),
            quaternion: Vector4::new(0.0, 0.0, 0.0, 1.0),
            velocity,
            ang_vel: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            ang_accel: Vector3::zeros(),
            time,
            collision: false,
        }
    }

    #[test]
    fn test_first_sample_reports_zero_acceleration() {
        let processor = MetadataProcessor::new(FrameConventions::default());

        let out = processor
            .process(&sample(0.0, Vector3::new(0.5, 0.0, 1.0)), None)
            .unwrap();

        assert_relative_eq!(out.acceleration, Vector3::zeros());
        assert!(out.ang_accel.is_none());
    }

    #[test]
    fn test_two_sample_forward_speedup() {
        let processor = MetadataProcessor::new(FrameConventions::default());

        // Left-handed body +Z is forward; one unit of velocity gained over
        // one second reads as unit acceleration along right-handed +X.
        let first = processor.process(&sample(0.0, Vector3::zeros()), None).unwrap();
        let second = processor
            .process(&sample(1.0, Vector3::new(0.0, 0.0, 1.0)), Some(&first.prior()))
            .unwrap();

        assert_relative_eq!(second.velocity, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(
            second.acceleration,
            Vector3::new(1.0, 0.0, 0.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_pose_fields_are_right_handed() {
        let processor = MetadataProcessor::new(FrameConventions::default());

        let mut meta = sample(0.0, Vector3::zeros());
        meta.position = Vector3::new(1.0, 2.0, 3.0);
        let out = processor.process(&meta, None).unwrap();

        assert_relative_eq!(out.position, Vector3::new(1.0, 3.0, 2.0), epsilon = 1e-12);
        let r = out.t_enu_brh.rotation();
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(r.transpose() * r, Matrix3::identity(), epsilon = 1e-9);
        assert_relative_eq!(
            out.orientation.to_rotation_matrix().into_inner(),
            r,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_time_and_collision_pass_through() {
        let processor = MetadataProcessor::new(FrameConventions::default());

        let mut meta = sample(42.5, Vector3::zeros());
        meta.collision = true;
        let out = processor.process(&meta, None).unwrap();

        assert_eq!(out.time, 42.5);
        assert!(out.collision);
    }

    #[test]
    fn test_out_of_order_sample_rejected() {
        let processor = MetadataProcessor::new(FrameConventions::default());

        let first = processor.process(&sample(1.0, Vector3::zeros()), None).unwrap();
        let result = processor.process(&sample(0.5, Vector3::zeros()), Some(&first.prior()));

        assert!(matches!(
            result,
            Err(TelemetryError::InvalidTimeDelta { dt }) if dt == -0.5
        ));
    }

    #[test]
    fn test_repeated_timestamp_rejected() {
        let processor = MetadataProcessor::new(FrameConventions::default());

        let first = processor.process(&sample(1.0, Vector3::zeros()), None).unwrap();
        let result = processor.process(&sample(1.0, Vector3::zeros()), Some(&first.prior()));

        assert!(result.is_err());
    }
}
