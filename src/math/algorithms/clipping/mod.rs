// src/math/algorithms/clipping/mod.rs

//! Rechteck-Clipping für Liniensegmente und Polygone.

pub mod config;
pub mod outcode;
pub mod polygon;
pub mod segment;

pub use config::{ClipConfig, SegmentAlgorithm};
pub use outcode::Outcode;
pub use polygon::{ClipEdge, PolygonClipper};
pub use segment::SegmentClipper;

use crate::math::{
    error::MathResult,
    types::{ClipWindow, Polygon, Segment},
};

/// Utility functions that build the clippers from a [`ClipConfig`].
pub struct ClippingOperations;

impl ClippingOperations {
    /// Clips a single segment with the default algorithm.
    pub fn clip_segment(segment: Segment, window: &ClipWindow) -> Option<Segment> {
        SegmentClipper::default().clip(segment, window)
    }

    /// Clips all segments and drops the rejected ones.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidConfiguration`](crate::math::MathError) if
    /// `config` fails validation.
    pub fn clip_segments(
        segments: &[Segment],
        window: &ClipWindow,
        config: &ClipConfig,
    ) -> MathResult<Vec<Segment>> {
        config.validate()?;
        Ok(SegmentClipper::new(config.segment_algorithm).clip_all(segments, window))
    }

    /// Clips a polygon, rounding to the configured precision.
    pub fn clip_polygon(
        polygon: &Polygon,
        window: &ClipWindow,
        config: &ClipConfig,
    ) -> MathResult<Polygon> {
        config.validate()?;
        Ok(PolygonClipper::new()
            .with_precision(config.precision)
            .clip(polygon, window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{MathError, types::Point};

    #[test]
    fn test_operations_follow_config() {
        let window = ClipWindow::new(-40.0, -40.0, 40.0, 40.0).unwrap();
        let segments = [
            Segment::from_coords(-50.0, 0.0, 80.0, 0.0),
            Segment::from_coords(50.0, 50.0, 60.0, 60.0),
        ];

        for algorithm in [SegmentAlgorithm::CohenSutherland, SegmentAlgorithm::LiangBarsky] {
            let config = ClipConfig::new().with_segment_algorithm(algorithm);
            let clipped = ClippingOperations::clip_segments(&segments, &window, &config).unwrap();
            assert_eq!(clipped, vec![Segment::from_coords(-40.0, 0.0, 40.0, 0.0)]);
        }

        let polygon: Polygon = [(-60.0, -10.0), (50.0, 60.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        let config = ClipConfig::new().with_precision(0);
        let clipped = ClippingOperations::clip_polygon(&polygon, &window, &config).unwrap();
        assert_eq!(clipped.vertices()[0], Point::new(19.0, 40.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let window = ClipWindow::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let config = ClipConfig::new().with_precision(40);
        assert!(matches!(
            ClippingOperations::clip_polygon(&Polygon::empty(), &window, &config),
            Err(MathError::InvalidConfiguration { .. })
        ));
    }
}
