// src/debug/visualization/svg.rs
use super::viewport::Viewport;
use crate::{
    io::scene::{ClippedScene, Scene},
    math::{
        error::{MathError, MathResult},
        types::{ClipWindow, Point, Polygon, Segment},
    },
};
use std::path::Path;
use svg::{
    Document,
    node::element::{Group, Line, Polygon as SvgPolygon, Rectangle},
};
use tracing::info;

const BACKGROUND_FILL: &str = "#ffffff";
const WINDOW_FILL: &str = "rgba(100,150,255,0.2)";
const WINDOW_STROKE: &str = "#4a88c7";
const SEGMENT_STROKE: &str = "#ff9999";
const CLIPPED_SEGMENT_STROKE: &str = "#e60000";
const POLYGON_FILL: &str = "rgba(183,245,183,0.4)";
const POLYGON_STROKE: &str = "#009000";
const CLIPPED_POLYGON_FILL: &str = "rgba(0,120,0,0.4)";
const CLIPPED_POLYGON_STROKE: &str = "#004400";

/// Leinwand-Einstellungen für das SVG-Rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Horizontaler Rand links und rechts.
    pub margin_x: f64,
    /// Vertikaler Rand oben und unten.
    pub margin_y: f64,
    /// Strichstärke der Eingabe-Geometrie; geclippte Geometrie wird breiter gezeichnet.
    pub stroke_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            margin_x: 50.0,
            margin_y: 50.0,
            stroke_width: 1.5,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margins(mut self, margin_x: f64, margin_y: f64) -> Self {
        self.margin_x = margin_x;
        self.margin_y = margin_y;
        self
    }

    pub fn drawable_width(&self) -> f64 {
        self.width - 2.0 * self.margin_x
    }

    pub fn drawable_height(&self) -> f64 {
        self.height - 2.0 * self.margin_y
    }

    pub fn validate(&self) -> MathResult<()> {
        let values = [
            self.width,
            self.height,
            self.margin_x,
            self.margin_y,
            self.stroke_width,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: "Render settings must be finite numbers.".to_string(),
            });
        }
        if self.margin_x < 0.0 || self.margin_y < 0.0 || self.stroke_width <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: "Margins must be non-negative and stroke width positive.".to_string(),
            });
        }
        if self.drawable_width() <= 0.0 || self.drawable_height() <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Canvas {}x{} leaves no drawable area with margins ({}, {}).",
                    self.width, self.height, self.margin_x, self.margin_y
                ),
            });
        }
        Ok(())
    }
}

/// Ein Helfer zum Erstellen des SVG-Dokuments.
struct SvgBuilder<'a> {
    document: Document,
    layers: Vec<Group>,
    viewport: Viewport,
    config: &'a RenderConfig,
}

impl<'a> SvgBuilder<'a> {
    fn new(viewport: Viewport, config: &'a RenderConfig) -> Self {
        let document = Document::new()
            .set("width", config.width)
            .set("height", config.height)
            .set("viewBox", format!("0 0 {} {}", config.width, config.height))
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", config.width)
                    .set("height", config.height)
                    .set("fill", BACKGROUND_FILL),
            );

        Self {
            document,
            layers: Vec::new(),
            viewport,
            config,
        }
    }

    fn canvas(&self, p: Point) -> Point {
        self.viewport.to_canvas(p)
    }

    fn draw_window(&mut self, window: &ClipWindow) {
        // y ist gespiegelt: die obere linke Ecke kommt von (xmin, ymax)
        let top_left = self.canvas(Point::new(window.xmin(), window.ymax()));
        let rect = Rectangle::new()
            .set("x", top_left.x)
            .set("y", top_left.y)
            .set("width", self.viewport.to_canvas_length(window.width()))
            .set("height", self.viewport.to_canvas_length(window.height()))
            .set("fill", WINDOW_FILL)
            .set("stroke", WINDOW_STROKE)
            .set("stroke-width", 2);
        self.add_layer("window", Group::new().add(rect));
    }

    fn draw_segments(&mut self, id: &str, segments: &[Segment], stroke: &str, width: f64) {
        let mut group = Group::new()
            .set("stroke", stroke)
            .set("stroke-width", width);
        for segment in segments {
            let a = self.canvas(segment.p1);
            let b = self.canvas(segment.p2);
            group = group.add(
                Line::new()
                    .set("x1", a.x)
                    .set("y1", a.y)
                    .set("x2", b.x)
                    .set("y2", b.y),
            );
        }
        self.add_layer(id, group);
    }

    fn draw_polygon(&mut self, id: &str, polygon: &Polygon, fill: &str, stroke: &str, width: f64) {
        let mut group = Group::new();
        if !polygon.is_empty() {
            let points = polygon
                .vertices()
                .iter()
                .map(|v| {
                    let p = self.canvas(*v);
                    format!("{:.3},{:.3}", p.x, p.y)
                })
                .collect::<Vec<_>>()
                .join(" ");
            group = group.add(
                SvgPolygon::new()
                    .set("points", points)
                    .set("fill", fill)
                    .set("stroke", stroke)
                    .set("stroke-width", width),
            );
        }
        self.add_layer(id, group);
    }

    fn add_layer(&mut self, id: &str, group: Group) {
        self.layers.push(group.set("id", id));
    }

    fn finish(self) -> Document {
        self.layers
            .into_iter()
            .fold(self.document, |document, layer| document.add(layer))
    }
}

/// Rendert Fenster, Eingabe und (optional) Clip-Ergebnis in ein SVG-Dokument.
///
/// Layers are emitted in drawing order as groups with the ids `window`,
/// `segments`, `clipped-segments`, `polygon` and `clipped-polygon`; the
/// clipped layers are only present when `clipped` is given.
pub fn render_scene_svg(
    scene: &Scene,
    clipped: Option<&ClippedScene>,
    config: &RenderConfig,
) -> MathResult<Document> {
    config.validate()?;

    let points = scene
        .segments
        .iter()
        .flat_map(|s| [s.p1, s.p2])
        .chain(scene.polygon.vertices().iter().copied())
        .chain(scene.window.corners());
    let bounds = ClipWindow::enclosing(points).unwrap_or(scene.window);
    let viewport = Viewport::fit(&bounds, config);

    let mut svg = SvgBuilder::new(viewport, config);
    let thin = svg.config.stroke_width;
    let thick = thin + 1.0;

    svg.draw_window(&scene.window);
    svg.draw_segments("segments", &scene.segments, SEGMENT_STROKE, thin);
    if let Some(clipped) = clipped {
        svg.draw_segments(
            "clipped-segments",
            &clipped.segments,
            CLIPPED_SEGMENT_STROKE,
            thick,
        );
    }
    svg.draw_polygon("polygon", &scene.polygon, POLYGON_FILL, POLYGON_STROKE, thin);
    if let Some(clipped) = clipped {
        svg.draw_polygon(
            "clipped-polygon",
            &clipped.polygon,
            CLIPPED_POLYGON_FILL,
            CLIPPED_POLYGON_STROKE,
            thick,
        );
    }

    Ok(svg.finish())
}

/// Speichert das Dokument als SVG-Datei.
pub fn save_scene_svg(path: impl AsRef<Path>, document: &Document) -> std::io::Result<()> {
    let path = path.as_ref();
    svg::save(path, document)?;
    info!("Scene SVG '{}' wurde erstellt.", path.display());
    Ok(())
}
