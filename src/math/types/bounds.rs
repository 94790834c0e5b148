// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use std::fmt;

/// Achsenparalleles Clip-Fenster `(xmin, ymin, xmax, ymax)`.
///
/// Width and height may be zero; such a window admits only the points lying
/// exactly on its degenerate extent. All bounds are finite and ordered once
/// constructed through [`ClipWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl ClipWindow {
    /// Erstellt ein neues Fenster mit Validierung
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> MathResult<Self> {
        for (x, y) in [(xmin, ymin), (xmax, ymax)] {
            if !x.is_finite() || !y.is_finite() {
                return Err(MathError::NonFiniteCoordinate {
                    context: "clip window".to_string(),
                    x,
                    y,
                });
            }
        }
        if xmin > xmax || ymin > ymax {
            return Err(MathError::InvalidWindow {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }

        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Constant constructor for windows whose bounds are known to be finite
    /// and ordered at compile time.
    pub(crate) const fn from_ordered(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Erstellt ein Fenster aus zwei beliebigen Eckpunkten
    pub fn from_corners(a: Point, b: Point) -> MathResult<Self> {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Kleinstes Fenster, das alle Punkte umschließt
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points_iter = points.into_iter().filter(Point::is_finite);
        let first = points_iter.next()?;

        let mut window = Self {
            xmin: first.x,
            ymin: first.y,
            xmax: first.x,
            ymax: first.y,
        };
        for p in points_iter {
            window.xmin = window.xmin.min(p.x);
            window.ymin = window.ymin.min(p.y);
            window.xmax = window.xmax.max(p.x);
            window.ymax = window.ymax.max(p.y);
        }

        Some(window)
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    pub fn min(&self) -> Point {
        Point::new(self.xmin, self.ymin)
    }

    pub fn max(&self) -> Point {
        Point::new(self.xmax, self.ymax)
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.xmin + self.xmax) * 0.5,
            (self.ymin + self.ymax) * 0.5,
        )
    }

    /// Null Breite oder null Höhe
    pub fn is_degenerate(&self) -> bool {
        self.xmin == self.xmax || self.ymin == self.ymax
    }

    /// Inclusive containment test; boundary points are inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.xmin && point.x <= self.xmax && point.y >= self.ymin && point.y <= self.ymax
    }

    /// Nächster Punkt im Fenster; Punkte im Fenster bleiben unverändert.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.xmin, self.xmax),
            point.y.clamp(self.ymin, self.ymax),
        )
    }

    /// Erzeugt die vier Eckpunkte gegen den Uhrzeigersinn, unten links zuerst
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin), // unten links
            Point::new(self.xmax, self.ymin), // unten rechts
            Point::new(self.xmax, self.ymax), // oben rechts
            Point::new(self.xmin, self.ymax), // oben links
        ]
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.xmin, self.ymin, self.xmax, self.ymax]
    }
}

impl TryFrom<[f64; 4]> for ClipWindow {
    type Error = MathError;

    fn try_from([xmin, ymin, xmax, ymax]: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(xmin, ymin, xmax, ymax)
    }
}

impl fmt::Display for ClipWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClipWindow([{}, {}] x [{}, {}])",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(matches!(
            ClipWindow::new(10.0, 0.0, -10.0, 5.0),
            Err(MathError::InvalidWindow { .. })
        ));
        assert!(matches!(
            ClipWindow::new(0.0, f64::NAN, 1.0, 1.0),
            Err(MathError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_zero_area_window_is_legal() {
        let w = ClipWindow::new(0.0, -10.0, 0.0, 10.0).unwrap();
        assert!(w.is_degenerate());
        assert_eq!(w.width(), 0.0);
        assert!(w.contains(Point::new(0.0, 3.0)));
        assert!(!w.contains(Point::new(0.001, 3.0)));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let w = ClipWindow::new(-40.0, -40.0, 40.0, 40.0).unwrap();
        assert!(w.contains(Point::new(40.0, -40.0)));
        assert!(w.contains(Point::new(0.0, 0.0)));
        assert!(!w.contains(Point::new(40.5, 0.0)));
    }

    #[test]
    fn test_clamp_pulls_points_onto_boundary() {
        let w = ClipWindow::new(0.0004, -1.0, 2.0, 1.0).unwrap();
        assert_eq!(w.clamp(Point::new(0.0, 0.5)), Point::new(0.0004, 0.5));
        assert_eq!(w.clamp(Point::new(7.0, -3.0)), Point::new(2.0, -1.0));
        assert_eq!(w.clamp(Point::new(1.0, 0.25)), Point::new(1.0, 0.25));
    }

    #[test]
    fn test_enclosing_and_corners() {
        let w = ClipWindow::enclosing([
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(f64::NAN, 100.0),
        ])
        .unwrap();
        assert_eq!(w.to_array(), [-2.0, -1.0, 3.0, 4.0]);
        assert_eq!(w.corners()[2], Point::new(3.0, 4.0));
        assert_eq!(w.center(), Point::new(0.5, 1.5));
        assert!(ClipWindow::enclosing(Vec::new()).is_none());
    }

    #[test]
    fn test_from_corners_orders_bounds() {
        let w = ClipWindow::from_corners(Point::new(5.0, 5.0), Point::new(-5.0, 1.0)).unwrap();
        assert_eq!(w.to_array(), [-5.0, 1.0, 5.0, 5.0]);
    }
}
