// src/debug/visualization/viewport.rs

use super::svg::RenderConfig;
use crate::math::types::{ClipWindow, Point};
use nalgebra::{Matrix3, Point2};

/// Affine Abbildung von Weltkoordinaten auf die SVG-Leinwand.
///
/// The scene bounds are scaled uniformly into the drawable area and centred
/// on the canvas. The y axis is flipped so that world "up" points up on
/// screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    transform: Matrix3<f64>,
    scale: f64,
}

impl Viewport {
    /// Fits `bounds` into the drawable area of `config`.
    ///
    /// The `+ 1` in the divisor keeps the scale finite for zero-sized bounds.
    pub fn fit(bounds: &ClipWindow, config: &RenderConfig) -> Self {
        let scale = (config.drawable_width() / (bounds.width() + 1.0))
            .min(config.drawable_height() / (bounds.height() + 1.0));
        let center = bounds.center();

        let offset_x = config.width / 2.0 - center.x * scale;
        let offset_y = config.height / 2.0 + center.y * scale;

        #[rustfmt::skip]
        let transform = Matrix3::new(
            scale, 0.0,    offset_x,
            0.0,   -scale, offset_y,
            0.0,   0.0,    1.0,
        );

        Self { transform, scale }
    }

    pub fn to_canvas(&self, point: Point) -> Point {
        let p = self.transform.transform_point(&Point2::new(point.x, point.y));
        Point::new(p.x, p.y)
    }

    /// Length in world units expressed in canvas units.
    pub fn to_canvas_length(&self, length: f64) -> f64 {
        length * self.scale
    }
}
