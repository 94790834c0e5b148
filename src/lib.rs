// src/lib.rs

//! Rechteck-Clipping von Liniensegmenten (Cohen-Sutherland, Liang-Barsky)
//! und Polygonen (Sutherland-Hodgman), mit Text- und JSON-Eingabe und
//! SVG-Ausgabe.

pub mod debug;
pub mod io;
pub mod math;

pub use io::{ClippedScene, Scene, handle_clip_request};
pub use math::{
    algorithms::clipping::{ClipConfig, PolygonClipper, SegmentAlgorithm, SegmentClipper},
    error::{MathError, MathResult},
    types::{ClipWindow, Point, Polygon, Segment},
};
