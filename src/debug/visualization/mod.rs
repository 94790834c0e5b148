// src/debug/visualization/mod.rs
pub mod svg;
pub mod viewport;

pub use svg::{RenderConfig, render_scene_svg, save_scene_svg};
pub use viewport::Viewport;
