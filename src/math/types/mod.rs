// src/math/types/mod.rs
pub mod bounds;
pub mod geo_compat;
pub mod point;
pub mod polygon;
pub mod segment;

pub use bounds::*;
pub use point::*;
pub use polygon::*;
pub use segment::*;
