// src/math/algorithms/mod.rs

pub mod clipping;

pub use self::clipping::{
    ClipConfig, ClipEdge, ClippingOperations, Outcode, PolygonClipper, SegmentAlgorithm,
    SegmentClipper,
};
