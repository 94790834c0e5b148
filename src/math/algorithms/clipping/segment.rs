// src/math/algorithms/clipping/segment.rs

//! # Segment Clipping
//!
//! Clips line segments against an axis-aligned [`ClipWindow`]. The default
//! algorithm is Cohen-Sutherland; Liang-Barsky is available as a parametric
//! alternative with the same inclusive-boundary semantics.

use super::{config::SegmentAlgorithm, outcode::Outcode};
use crate::math::{
    types::{ClipWindow, Point, Segment},
    utils::{
        comparison::half_difference,
        crossing::{x_at_y, y_at_x},
    },
};
use tracing::{debug, warn};

/// Jede Iteration ersetzt einen Endpunkt durch einen Randschnittpunkt; nach
/// spätestens vier Ersetzungen ist das Ergebnis entschieden.
const MAX_CLIP_ITERATIONS: usize = 8;

/// Clips segments against a rectangular window.
///
/// A rejected segment is reported as `None`; clipping never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentClipper {
    algorithm: SegmentAlgorithm,
}

impl SegmentClipper {
    /// Creates a new `SegmentClipper` with the specified algorithm.
    pub fn new(algorithm: SegmentAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Returns the maximal part of `segment` inside or on `window`, or `None`
    /// if no part of it is visible.
    ///
    /// Endpoints already inside the window are returned unchanged, so
    /// clipping an accepted result again yields the same segment. Segments
    /// with a non-finite endpoint are rejected.
    pub fn clip(&self, segment: Segment, window: &ClipWindow) -> Option<Segment> {
        if !segment.p1.is_finite() || !segment.p2.is_finite() {
            debug!("Rejecting segment with non-finite endpoint: {}", segment);
            return None;
        }
        if segment.is_degenerate() {
            debug!("Clipping zero-length segment {}", segment);
        }
        match self.algorithm {
            SegmentAlgorithm::CohenSutherland => cohen_sutherland(segment, window),
            SegmentAlgorithm::LiangBarsky => liang_barsky(segment, window),
        }
    }

    /// Clips every segment and keeps the visible results in input order.
    pub fn clip_all(&self, segments: &[Segment], window: &ClipWindow) -> Vec<Segment> {
        let visible: Vec<Segment> = segments
            .iter()
            .filter_map(|s| self.clip(*s, window))
            .collect();
        debug!(
            "{:?}: {} of {} segments visible in {}",
            self.algorithm,
            visible.len(),
            segments.len(),
            window
        );
        visible
    }
}

// --- Cohen-Sutherland ---

fn cohen_sutherland(segment: Segment, window: &ClipWindow) -> Option<Segment> {
    let Segment { mut p1, mut p2 } = segment;
    let mut code1 = Outcode::of(p1, window);
    let mut code2 = Outcode::of(p2, window);

    for _ in 0..MAX_CLIP_ITERATIONS {
        if code1.is_inside() && code2.is_inside() {
            return Some(Segment::new(p1, p2));
        }
        if code1.shares_side_with(code2) {
            // beide Endpunkte jenseits derselben Randgeraden
            return None;
        }

        if !code1.is_inside() {
            p1 = boundary_crossing(p1, p2, code1, window);
            code1 = Outcode::of(p1, window);
        } else {
            p2 = boundary_crossing(p1, p2, code2, window);
            code2 = Outcode::of(p2, window);
        }
    }

    warn!(
        "Cohen-Sutherland did not converge for {} against {}; rejecting",
        segment, window
    );
    None
}

/// Crossing of the line `p1 -> p2` with the single boundary selected by
/// `code`, tested in the order TOP, BOTTOM, RIGHT, LEFT.
fn boundary_crossing(p1: Point, p2: Point, code: Outcode, window: &ClipWindow) -> Point {
    if code.contains(Outcode::TOP) {
        let y = window.ymax();
        Point::new(x_at_y(p1.x, p1.y, p2.x, p2.y, y), y)
    } else if code.contains(Outcode::BOTTOM) {
        let y = window.ymin();
        Point::new(x_at_y(p1.x, p1.y, p2.x, p2.y, y), y)
    } else if code.contains(Outcode::RIGHT) {
        let x = window.xmax();
        Point::new(x, y_at_x(p1.x, p1.y, p2.x, p2.y, x))
    } else {
        let x = window.xmin();
        Point::new(x, y_at_x(p1.x, p1.y, p2.x, p2.y, x))
    }
}

// --- Liang-Barsky ---

fn liang_barsky(segment: Segment, window: &ClipWindow) -> Option<Segment> {
    let Segment { p1, p2 } = segment;
    // Alle Terme halbiert: t = q / p bleibt gleich, nichts läuft über
    let dx = half_difference(p1.x, p2.x);
    let dy = half_difference(p1.y, p2.y);

    let p = [-dx, dx, -dy, dy];
    let q = [
        half_difference(window.xmin(), p1.x),
        half_difference(p1.x, window.xmax()),
        half_difference(window.ymin(), p1.y),
        half_difference(p1.y, window.ymax()),
    ];

    let bounds = [window.xmin(), window.xmax(), window.ymin(), window.ymax()];

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;
    // Index der Kante, die u1 bzw. u2 zuletzt festgelegt hat
    let mut enter = None;
    let mut leave = None;

    for (k, (pk, qk)) in p.into_iter().zip(q).enumerate() {
        if pk == 0.0 {
            if qk < 0.0 {
                return None; // parallel und außerhalb
            }
        } else {
            let t = qk / pk;
            if pk < 0.0 && t > u1 {
                u1 = t;
                enter = Some(k);
            } else if pk > 0.0 && t < u2 {
                u2 = t;
                leave = Some(k);
            }
        }
    }

    if u1 > u2 {
        return None;
    }

    // Ohne begrenzende Kante liegt der Endpunkt bereits im Fenster.
    let at = |edge: Option<usize>, endpoint: Point| match edge {
        None => window.clamp(endpoint),
        Some(k @ (0 | 1)) => {
            let x = bounds[k];
            let y = y_at_x(p1.x, p1.y, p2.x, p2.y, x);
            Point::new(x, y.clamp(window.ymin(), window.ymax()))
        }
        Some(k) => {
            let y = bounds[k];
            let x = x_at_y(p1.x, p1.y, p2.x, p2.y, y);
            Point::new(x.clamp(window.xmin(), window.xmax()), y)
        }
    };

    Some(Segment::new(at(enter, p1), at(leave, p2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const ALGORITHMS: [SegmentAlgorithm; 2] =
        [SegmentAlgorithm::CohenSutherland, SegmentAlgorithm::LiangBarsky];

    fn window() -> ClipWindow {
        ClipWindow::new(-40.0, -40.0, 40.0, 40.0).unwrap()
    }

    fn assert_segment_eq(actual: Segment, expected: Segment) {
        assert_relative_eq!(actual.p1.x, expected.p1.x, epsilon = 1e-9);
        assert_relative_eq!(actual.p1.y, expected.p1.y, epsilon = 1e-9);
        assert_relative_eq!(actual.p2.x, expected.p2.x, epsilon = 1e-9);
        assert_relative_eq!(actual.p2.y, expected.p2.y, epsilon = 1e-9);
    }

    #[test]
    fn test_inside_segment_is_unchanged() {
        let s = Segment::from_coords(-10.0, 5.0, 30.0, -39.0);
        for algorithm in ALGORITHMS {
            assert_eq!(SegmentClipper::new(algorithm).clip(s, &window()), Some(s));
        }
    }

    #[test]
    fn test_segment_on_boundary_is_unchanged() {
        let s = Segment::from_coords(-40.0, 40.0, 40.0, 40.0);
        for algorithm in ALGORITHMS {
            assert_eq!(SegmentClipper::new(algorithm).clip(s, &window()), Some(s));
        }
    }

    #[test]
    fn test_one_side_outside_is_rejected() {
        let left = Segment::from_coords(-90.0, -10.0, -41.0, 30.0);
        let below = Segment::from_coords(-100.0, -50.0, 100.0, -45.0);
        for algorithm in ALGORITHMS {
            let clipper = SegmentClipper::new(algorithm);
            assert_eq!(clipper.clip(left, &window()), None);
            assert_eq!(clipper.clip(below, &window()), None);
        }
    }

    #[test]
    fn test_partial_segment_keeps_orientation() {
        // nur der zweite Endpunkt liegt rechts außerhalb
        let s = Segment::from_coords(-10.0, 20.0, 50.0, -30.0);
        let expected = Segment::from_coords(-10.0, 20.0, 40.0, -21.666_666_666_666_664);
        for algorithm in ALGORITHMS {
            let clipped = SegmentClipper::new(algorithm).clip(s, &window()).unwrap();
            assert_segment_eq(clipped, expected);
            assert!(window().contains(clipped.p1) && window().contains(clipped.p2));
        }

        let reversed = SegmentClipper::default().clip(s.reversed(), &window()).unwrap();
        assert_segment_eq(reversed, expected.reversed());
    }

    #[test]
    fn test_shared_corner_region_is_rejected() {
        // beide Endpunkte oben rechts
        let s = Segment::from_coords(100.0, 100.0, 200.0, 200.0);
        let w = window();
        assert!(Outcode::of(s.p1, &w).shares_side_with(Outcode::of(s.p2, &w)));
        for algorithm in ALGORITHMS {
            assert_eq!(SegmentClipper::new(algorithm).clip(s, &w), None);
        }
    }

    #[test]
    fn test_example_scene_segments() {
        let clipper = SegmentClipper::default();
        let w = window();

        let horizontal = clipper.clip(Segment::from_coords(-50.0, 0.0, 80.0, 0.0), &w);
        assert_eq!(horizontal, Some(Segment::from_coords(-40.0, 0.0, 40.0, 0.0)));

        let vertical = clipper.clip(Segment::from_coords(0.0, -40.0, 0.0, 60.0), &w);
        assert_eq!(vertical, Some(Segment::from_coords(0.0, -40.0, 0.0, 40.0)));

        // läuft an der oberen linken Ecke vorbei
        let miss = clipper.clip(Segment::from_coords(-80.0, -20.0, -20.0, 80.0), &w);
        assert_eq!(miss, None);

        let diagonal = clipper.clip(Segment::from_coords(30.0, 30.0, 120.0, 120.0), &w);
        assert_eq!(diagonal, Some(Segment::from_coords(30.0, 30.0, 40.0, 40.0)));
    }

    #[test]
    fn test_both_endpoints_outside_crossing_window() {
        let s = Segment::from_coords(-60.0, -60.0, 60.0, 60.0);
        for algorithm in ALGORITHMS {
            let clipped = SegmentClipper::new(algorithm).clip(s, &window()).unwrap();
            assert_segment_eq(clipped, Segment::from_coords(-40.0, -40.0, 40.0, 40.0));
        }
    }

    #[test]
    fn test_zero_length_segment() {
        let inside = Segment::from_coords(3.0, 3.0, 3.0, 3.0);
        let outside = Segment::from_coords(50.0, 3.0, 50.0, 3.0);
        for algorithm in ALGORITHMS {
            let clipper = SegmentClipper::new(algorithm);
            assert_eq!(clipper.clip(inside, &window()), Some(inside));
            assert_eq!(clipper.clip(outside, &window()), None);
        }
    }

    #[test]
    fn test_zero_width_window() {
        let w = ClipWindow::new(0.0, -10.0, 0.0, 10.0).unwrap();
        let crossing = Segment::from_coords(-5.0, 1.0, 5.0, 3.0);
        let beside = Segment::from_coords(1.0, -5.0, 4.0, 5.0);
        for algorithm in ALGORITHMS {
            let clipper = SegmentClipper::new(algorithm);
            let clipped = clipper.clip(crossing, &w).unwrap();
            assert_segment_eq(clipped, Segment::from_coords(0.0, 2.0, 0.0, 2.0));
            assert_eq!(clipper.clip(beside, &w), None);
        }
    }

    #[test]
    fn test_parallel_segments_never_divide_by_zero() {
        let w = window();
        let horizontal = Segment::from_coords(-100.0, 10.0, 100.0, 10.0);
        let vertical = Segment::from_coords(-5.0, -100.0, -5.0, 100.0);
        for algorithm in ALGORITHMS {
            let clipper = SegmentClipper::new(algorithm);
            let h = clipper.clip(horizontal, &w).unwrap();
            let v = clipper.clip(vertical, &w).unwrap();
            assert!(h.p1.is_finite() && h.p2.is_finite());
            assert!(v.p1.is_finite() && v.p2.is_finite());
            assert_segment_eq(h, Segment::from_coords(-40.0, 10.0, 40.0, 10.0));
            assert_segment_eq(v, Segment::from_coords(-5.0, -40.0, -5.0, 40.0));
        }
    }

    #[test]
    fn test_huge_coordinates_stay_finite_and_contained() {
        let w = window();
        let diagonals = [
            Segment::from_coords(-1e308, -1e308, 1e308, 1e308),
            Segment::from_coords(-1e200, -1e200, 1e200, 1e200),
            Segment::from_coords(1e308, -1e308, -1e308, 1e308),
            Segment::from_coords(-f64::MAX, 0.0, f64::MAX, 0.0),
        ];
        for algorithm in ALGORITHMS {
            let clipper = SegmentClipper::new(algorithm);
            for s in diagonals {
                let clipped = clipper
                    .clip(s, &w)
                    .unwrap_or_else(|| panic!("{:?} rejected {}", algorithm, s));
                assert!(clipped.p1.is_finite() && clipped.p2.is_finite());
                assert!(
                    w.contains(clipped.p1) && w.contains(clipped.p2),
                    "{:?}: {} escapes {}",
                    algorithm,
                    clipped,
                    w
                );
            }

            // läuft weit an der Ecke vorbei
            let miss = Segment::from_coords(-1e308, 1e308, 1e308, 1e308);
            assert_eq!(clipper.clip(miss, &w), None);
        }
    }

    #[test]
    fn test_huge_horizontal_segment_is_cut_to_window_width() {
        let s = Segment::from_coords(-f64::MAX, 10.0, f64::MAX, 10.0);
        for algorithm in ALGORITHMS {
            let clipped = SegmentClipper::new(algorithm).clip(s, &window()).unwrap();
            assert_segment_eq(clipped, Segment::from_coords(-40.0, 10.0, 40.0, 10.0));
        }
    }

    #[test]
    fn test_non_finite_endpoints_are_rejected() {
        let nan = Segment::from_coords(f64::NAN, 0.0, 10.0, 10.0);
        let inf = Segment::from_coords(0.0, 0.0, f64::INFINITY, 0.0);
        for algorithm in ALGORITHMS {
            let clipper = SegmentClipper::new(algorithm);
            assert_eq!(clipper.clip(nan, &window()), None);
            assert_eq!(clipper.clip(inf, &window()), None);
        }
    }

    #[test]
    fn test_clip_all_omits_rejected_segments() {
        let segments = [
            Segment::from_coords(-10.0, 20.0, 50.0, -30.0),
            Segment::from_coords(100.0, 100.0, 200.0, 200.0),
            Segment::from_coords(0.0, 0.0, 1.0, 1.0),
        ];
        let visible = SegmentClipper::default().clip_all(&segments, &window());
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[1], segments[2]);
    }

    #[test]
    fn test_random_segments_contained_idempotent_and_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        let w = ClipWindow::new(-40.0, -25.0, 35.0, 40.0).unwrap();
        let cs = SegmentClipper::new(SegmentAlgorithm::CohenSutherland);
        let lb = SegmentClipper::new(SegmentAlgorithm::LiangBarsky);

        for _ in 0..2000 {
            let s = Segment::from_coords(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            );
            let a = cs.clip(s, &w);
            let b = lb.clip(s, &w);
            assert_eq!(a.is_some(), b.is_some(), "visibility differs for {}", s);

            if let (Some(a), Some(b)) = (a, b) {
                assert!(w.contains(a.p1) && w.contains(a.p2), "{} escapes {}", a, w);
                assert!(w.contains(b.p1) && w.contains(b.p2), "{} escapes {}", b, w);
                assert_eq!(cs.clip(a, &w), Some(a));
                assert_eq!(lb.clip(b, &w), Some(b));
                assert_relative_eq!(a.p1.x, b.p1.x, epsilon = 1e-7);
                assert_relative_eq!(a.p1.y, b.p1.y, epsilon = 1e-7);
                assert_relative_eq!(a.p2.x, b.p2.x, epsilon = 1e-7);
                assert_relative_eq!(a.p2.y, b.p2.y, epsilon = 1e-7);
            }
        }
    }
}
