// src/math/algorithms/clipping/polygon.rs

//! # Polygon Clipping
//!
//! Sutherland-Hodgman clipping of a polygon against an axis-aligned
//! [`ClipWindow`]. The subject is clipped against the four half-planes of the
//! window in the fixed order left, right, bottom, top; the output of one pass
//! feeds the next. Traversal order is never reversed, so the winding of the
//! input survives.

use crate::math::{
    types::{ClipWindow, Point, Polygon},
    utils::{
        constants,
        crossing::{x_at_y, y_at_x},
    },
};
use tracing::{debug, warn};

/// One half-plane of the clip window, named after the window edge bounding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipEdge {
    /// `x >= xmin`
    Left,
    /// `x <= xmax`
    Right,
    /// `y >= ymin`
    Bottom,
    /// `y <= ymax`
    Top,
}

impl ClipEdge {
    /// Reihenfolge der Durchläufe; bestimmt die Vertex-Folge der Ausgabe.
    pub const PASS_ORDER: [ClipEdge; 4] =
        [ClipEdge::Left, ClipEdge::Right, ClipEdge::Bottom, ClipEdge::Top];

    /// Inclusive: points on the boundary line are inside.
    pub fn is_inside(self, point: Point, window: &ClipWindow) -> bool {
        match self {
            ClipEdge::Left => point.x >= window.xmin(),
            ClipEdge::Right => point.x <= window.xmax(),
            ClipEdge::Bottom => point.y >= window.ymin(),
            ClipEdge::Top => point.y <= window.ymax(),
        }
    }

    /// Crossing of the edge `s -> e` with this half-plane's boundary line.
    ///
    /// A zero-length edge yields `s`. An edge parallel to the boundary yields
    /// the boundary coordinate paired with `s`'s other coordinate.
    pub fn crossing(self, s: Point, e: Point, window: &ClipWindow) -> Point {
        if s == e {
            return s;
        }
        match self {
            ClipEdge::Left | ClipEdge::Right => {
                let x = self.boundary(window);
                Point::new(x, y_at_x(s.x, s.y, e.x, e.y, x))
            }
            ClipEdge::Bottom | ClipEdge::Top => {
                let y = self.boundary(window);
                Point::new(x_at_y(s.x, s.y, e.x, e.y, y), y)
            }
        }
    }

    fn boundary(self, window: &ClipWindow) -> f64 {
        match self {
            ClipEdge::Left => window.xmin(),
            ClipEdge::Right => window.xmax(),
            ClipEdge::Bottom => window.ymin(),
            ClipEdge::Top => window.ymax(),
        }
    }

    /// Ein Sutherland-Hodgman-Durchlauf gegen diese Halbebene.
    fn clip_pass(self, input: &[Point], window: &ClipWindow) -> Vec<Point> {
        let Some(&last) = input.last() else {
            return Vec::new();
        };

        let mut output = Vec::with_capacity(input.len() + 2);
        // `s` ist der Startpunkt der aktuellen Kante, zyklisch vom letzten Vertex
        let mut s = last;

        for &e in input {
            let s_inside = self.is_inside(s, window);
            if self.is_inside(e, window) {
                if !s_inside {
                    // Kante tritt ein
                    output.push(self.crossing(s, e, window));
                }
                output.push(e);
            } else if s_inside {
                // Kante tritt aus
                output.push(self.crossing(s, e, window));
            }
            s = e;
        }

        output
    }
}

/// Performs Sutherland-Hodgman clipping against rectangular windows.
///
/// Output coordinates are rounded to a fixed number of decimal digits
/// (default 3) to suppress noise accumulated over the four passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolygonClipper {
    precision: u32,
}

impl Default for PolygonClipper {
    fn default() -> Self {
        Self {
            precision: constants::DEFAULT_OUTPUT_PRECISION,
        }
    }
}

impl PolygonClipper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of decimal digits kept in the output, capped at
    /// `MAX_OUTPUT_PRECISION`.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(constants::MAX_OUTPUT_PRECISION);
        self
    }

    /// Clips `polygon` against `window`.
    ///
    /// The result may be empty, or degenerate (fewer than three vertices,
    /// repeated vertices along a collapsed boundary); callers get it as is.
    /// Vertices with a non-finite coordinate are dropped before clipping.
    ///
    /// Rounded vertices are clamped back into the window. If a window bound
    /// has more fractional digits than the output precision, vertices on
    /// that boundary keep the unrounded bound.
    pub fn clip(&self, polygon: &Polygon, window: &ClipWindow) -> Polygon {
        let input: Vec<Point> = polygon
            .vertices()
            .iter()
            .copied()
            .filter(Point::is_finite)
            .collect();
        if input.len() < polygon.len() {
            warn!(
                "Dropped {} non-finite polygon vertices",
                polygon.len() - input.len()
            );
        }
        if polygon.is_degenerate() {
            debug!("Clipping degenerate polygon: {}", polygon);
        }

        let clipped = ClipEdge::PASS_ORDER
            .iter()
            .fold(input, |input, edge| edge.clip_pass(&input, window));

        let result: Polygon = clipped
            .into_iter()
            .map(|v| window.clamp(v.rounded(self.precision)))
            .collect();
        debug!(
            "Polygon clip: {} -> {} vertices (area {:.3}) in {}",
            polygon.len(),
            result.len(),
            result.signed_area().abs(),
            window
        );
        result
    }
}
