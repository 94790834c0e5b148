// src/math/types/polygon.rs

use super::{Point, Segment};
use std::fmt;

/// Geschlossener Polygonzug als geordnete Vertex-Liste.
///
/// The edge from the last vertex back to the first is implicit; the first
/// vertex is never repeated at the end. Polygons with fewer than three
/// vertices are accepted and simply degenerate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Zugriff auf Vertices
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Weniger als drei Vertices umschließen keine Fläche
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Iterates the closed loop of edges, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Vorzeichenbehaftete Fläche (Shoelace), positiv bei CCW-Umlauf
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|e| e.p1.x * e.p2.y - e.p2.x * e.p1.y)
            .sum::<f64>()
            * 0.5
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} vertices)", self.vertices.len())
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Polygon {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
