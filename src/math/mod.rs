// src/math/mod.rs
pub mod algorithms;
pub mod error;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::clipping::{
            ClipConfig, ClipEdge, ClippingOperations, Outcode, PolygonClipper, SegmentAlgorithm,
            SegmentClipper,
        },
        error::{MathError, MathResult},
        types::{ClipWindow, Point, Polygon, Segment},
    };
}
