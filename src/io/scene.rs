// src/io/scene.rs

//! # Text Scenes
//!
//! A scene is a whitespace-separated token stream:
//!
//! ```text
//! n
//! x1 y1 x2 y2      (n times)
//! m                (optional)
//! x y              (m times)
//! xmin ymin xmax ymax
//! ```
//!
//! The polygon section is present iff more than four tokens remain once the
//! segments are read; the last four tokens are always the window.

use super::error::{InputError, InputResult};
use crate::math::{
    algorithms::clipping::{ClipConfig, PolygonClipper, SegmentClipper},
    error::MathResult,
    types::{ClipWindow, Point, Polygon, Segment},
};
use std::str::FromStr;
use tracing::{debug, info};

const EXAMPLE_SEGMENTS: [[f64; 4]; 5] = [
    [-10.0, 20.0, 50.0, -30.0],
    [-50.0, 0.0, 80.0, 0.0],
    [0.0, -40.0, 0.0, 60.0],
    [-80.0, -20.0, -20.0, 80.0],
    [30.0, 30.0, 120.0, 120.0],
];
const EXAMPLE_POLYGON: [[f64; 2]; 5] = [
    [-60.0, -10.0],
    [-10.0, 70.0],
    [50.0, 60.0],
    [90.0, 10.0],
    [30.0, -40.0],
];
const EXAMPLE_WINDOW: ClipWindow = ClipWindow::from_ordered(-40.0, -40.0, 40.0, 40.0);

/// Input geometry together with its clip window.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub polygon: Polygon,
    pub window: ClipWindow,
}

/// Ergebnis eines Clip-Durchlaufs über eine [`Scene`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClippedScene {
    /// Visible parts in input order; rejected segments are omitted.
    pub segments: Vec<Segment>,
    pub polygon: Polygon,
}

impl Scene {
    pub fn new(segments: Vec<Segment>, polygon: Polygon, window: ClipWindow) -> Self {
        Self {
            segments,
            polygon,
            window,
        }
    }

    /// Five segments and a pentagon around the window `[-40, 40]²`.
    pub fn example() -> Self {
        Self {
            segments: EXAMPLE_SEGMENTS.into_iter().map(Segment::from).collect(),
            polygon: EXAMPLE_POLYGON.into_iter().map(Point::from).collect(),
            window: EXAMPLE_WINDOW,
        }
    }

    /// Parses the text format described in the module docs.
    pub fn parse(input: &str) -> InputResult<Self> {
        let mut tokens = Tokens::new(input);
        if tokens.remaining() == 0 {
            return Err(InputError::Empty);
        }

        let n = tokens.next_count("segment count")?;
        tokens.ensure_available(n, 4, "segment coordinate")?;
        let mut segments = Vec::with_capacity(n);
        for _ in 0..n {
            let start = tokens.next_point("segment coordinate")?;
            let end = tokens.next_point("segment coordinate")?;
            segments.push(Segment::new(start, end));
        }

        let polygon = if tokens.remaining() > 4 {
            let m = tokens.next_count("polygon vertex count")?;
            tokens.ensure_available(m, 2, "polygon coordinate")?;
            (0..m)
                .map(|_| tokens.next_point("polygon coordinate"))
                .collect::<InputResult<Polygon>>()?
        } else {
            Polygon::empty()
        };

        let min = tokens.next_point("window coordinate")?;
        let max = tokens.next_point("window coordinate")?;
        tokens.finish()?;
        let window = ClipWindow::new(min.x, min.y, max.x, max.y)?;

        debug!(
            "Parsed scene: {} segments, {} polygon vertices, {}",
            segments.len(),
            polygon.len(),
            window
        );
        Ok(Self::new(segments, polygon, window))
    }

    /// Serialisiert die Szene zurück in das Textformat.
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.segments.len().to_string()];
        lines.extend(
            self.segments
                .iter()
                .map(|s| format!("{} {} {} {}", s.p1.x, s.p1.y, s.p2.x, s.p2.y)),
        );
        if !self.polygon.is_empty() {
            lines.push(self.polygon.len().to_string());
            lines.extend(
                self.polygon
                    .vertices()
                    .iter()
                    .map(|v| format!("{} {}", v.x, v.y)),
            );
        }
        let [xmin, ymin, xmax, ymax] = self.window.to_array();
        lines.push(format!("{} {} {} {}", xmin, ymin, xmax, ymax));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Clips all segments and the polygon against the scene window.
    pub fn clip(&self, config: &ClipConfig) -> MathResult<ClippedScene> {
        config.validate()?;
        if self.window.is_degenerate() {
            debug!("Clip window {} has zero area", self.window);
        }
        let segments =
            SegmentClipper::new(config.segment_algorithm).clip_all(&self.segments, &self.window);
        let polygon = PolygonClipper::new()
            .with_precision(config.precision)
            .clip(&self.polygon, &self.window);

        info!(
            "Clipped {} segments, polygon: {} vertices",
            segments.len(),
            polygon.len()
        );
        Ok(ClippedScene { segments, polygon })
    }
}

impl FromStr for Scene {
    type Err = InputError;

    fn from_str(s: &str) -> InputResult<Self> {
        Self::parse(s)
    }
}

/// Cursor über die Tokens der Eingabe.
struct Tokens<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace().collect(),
            pos: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// 1-basierte Position des nächsten Tokens
    fn position(&self) -> usize {
        self.pos + 1
    }

    fn next_token(&mut self, expected: &str) -> InputResult<&'a str> {
        let token = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or_else(|| InputError::UnexpectedEnd {
                position: self.position(),
                expected: expected.to_string(),
            })?;
        self.pos += 1;
        Ok(token)
    }

    fn invalid(&self, token: &str, expected: &str) -> InputError {
        InputError::InvalidToken {
            // `pos` steht bereits hinter dem Token
            position: self.pos,
            token: token.to_string(),
            expected: expected.to_string(),
        }
    }

    fn next_count(&mut self, what: &str) -> InputResult<usize> {
        let token = self.next_token(what)?;
        token
            .parse::<usize>()
            .map_err(|_| self.invalid(token, &format!("{what} (non-negative integer)")))
    }

    fn next_number(&mut self, what: &str) -> InputResult<f64> {
        let token = self.next_token(what)?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.invalid(token, &format!("{what} (finite number)"))),
        }
    }

    fn next_point(&mut self, what: &str) -> InputResult<Point> {
        let x = self.next_number(what)?;
        let y = self.next_number(what)?;
        Ok(Point::new(x, y))
    }

    /// Fails early when `count` records of `width` numbers cannot fit in the
    /// remaining input, before anything is allocated for them.
    fn ensure_available(&self, count: usize, width: usize, what: &str) -> InputResult<()> {
        let needed = count.saturating_mul(width);
        if needed > self.remaining() {
            return Err(InputError::UnexpectedEnd {
                position: self.tokens.len() + 1,
                expected: format!("{needed} tokens for {count} x {what}"),
            });
        }
        Ok(())
    }

    fn finish(&self) -> InputResult<()> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(InputError::TrailingTokens {
                position: self.position(),
                count,
            }),
        }
    }
}
