// src/math/types/geo_compat.rs

//! Konvertierungen zwischen den eigenen Typen und `geo`.
//!
//! `geo` closes polygon rings by repeating the first coordinate, while
//! [`Polygon`] keeps the closing edge implicit. The conversions below strip
//! and re-add that duplicate. Interior rings are not supported by the
//! clippers and are dropped.

use super::{ClipWindow, Point, Polygon, Segment};
use crate::math::error::{MathError, MathResult};
use geo::{Coord, Line, LineString, Rect};

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Point::new(c.x, c.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        Coord { x: p.x, y: p.y }
    }
}

impl From<Line<f64>> for Segment {
    fn from(line: Line<f64>) -> Self {
        Segment::new(line.start.into(), line.end.into())
    }
}

impl From<Segment> for Line<f64> {
    fn from(segment: Segment) -> Self {
        Line::new(Coord::from(segment.p1), Coord::from(segment.p2))
    }
}

impl TryFrom<Rect<f64>> for ClipWindow {
    type Error = MathError;

    fn try_from(rect: Rect<f64>) -> MathResult<Self> {
        ClipWindow::from_corners(rect.min().into(), rect.max().into())
    }
}

impl From<ClipWindow> for Rect<f64> {
    fn from(window: ClipWindow) -> Self {
        Rect::new(Coord::from(window.min()), Coord::from(window.max()))
    }
}

impl From<&LineString<f64>> for Polygon {
    fn from(ring: &LineString<f64>) -> Self {
        let mut vertices: Vec<Point> = ring.coords().map(|c| Point::from(*c)).collect();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Polygon::new(vertices)
    }
}

impl From<&geo::Polygon<f64>> for Polygon {
    fn from(polygon: &geo::Polygon<f64>) -> Self {
        Polygon::from(polygon.exterior())
    }
}

impl From<Polygon> for geo::Polygon<f64> {
    fn from(polygon: Polygon) -> Self {
        // geo::Polygon::new schließt den Ring selbst
        let exterior: LineString<f64> = polygon.into_iter().map(Coord::from).collect();
        geo::Polygon::new(exterior, Vec::new())
    }
}
