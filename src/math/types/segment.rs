// src/math/types/segment.rs

use super::Point;
use std::fmt;

/// Ein Liniensegment zwischen zwei Endpunkten.
///
/// The orientation `p1 -> p2` carries no meaning for clipping, but clipped
/// results keep it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Erstellt ein Segment aus vier Koordinaten `x1 y1 x2 y2`
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Point::new(x1, y1),
            p2: Point::new(x2, y2),
        }
    }

    /// Beide Endpunkte fallen zusammen
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p1, self.p2)
    }
}

impl From<[f64; 4]> for Segment {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::from_coords(x1, y1, x2, y2)
    }
}

impl From<(Point, Point)> for Segment {
    fn from((p1, p2): (Point, Point)) -> Self {
        Self { p1, p2 }
    }
}

impl From<Segment> for [f64; 4] {
    fn from(segment: Segment) -> Self {
        segment.to_array()
    }
}
