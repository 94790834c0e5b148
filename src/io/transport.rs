// src/io/transport.rs

//! JSON request/response handling for remote clip calls.
//!
//! [`handle_clip_request`] takes a raw request body and always produces a
//! [`TransportResponse`]; malformed input becomes status 400 with an
//! `{"error": ...}` body instead of a Rust error.

use super::{
    error::RequestError,
    scene::{ClippedScene, Scene},
};
use crate::math::{
    algorithms::clipping::ClipConfig,
    types::{ClipWindow, Point, Polygon, Segment},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error, warn};

/// Eingehende Clip-Anfrage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipRequest {
    #[serde(default)]
    pub segments: Vec<[f64; 4]>,
    #[serde(default)]
    pub polygon: Vec<[f64; 2]>,
    #[serde(default)]
    pub window: Option<[f64; 4]>,
    #[serde(default)]
    pub config: Option<ClipConfig>,
}

impl ClipRequest {
    /// Validates the request and builds the scene and configuration from it.
    pub fn into_scene(self) -> Result<(Scene, ClipConfig), RequestError> {
        let [xmin, ymin, xmax, ymax] = self.window.ok_or(RequestError::MissingWindow)?;
        let window = ClipWindow::new(xmin, ymin, xmax, ymax)?;

        let config = self.config.unwrap_or_default();
        config.validate()?;

        let segments = self.segments.into_iter().map(Segment::from).collect();
        let polygon = self.polygon.into_iter().map(Point::from).collect();
        Ok((Scene::new(segments, polygon, window), config))
    }
}

impl From<&Scene> for ClipRequest {
    fn from(scene: &Scene) -> Self {
        Self {
            segments: scene.segments.iter().map(|s| s.to_array()).collect(),
            polygon: scene.polygon.vertices().iter().map(|p| p.to_array()).collect(),
            window: Some(scene.window.to_array()),
            config: None,
        }
    }
}

/// Successful clip result as sent over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipResponse {
    pub clipped_segments: Vec<[f64; 4]>,
    pub clipped_polygon: Vec<[f64; 2]>,
}

impl From<&ClippedScene> for ClipResponse {
    fn from(clipped: &ClippedScene) -> Self {
        Self {
            clipped_segments: clipped.segments.iter().map(|s| s.to_array()).collect(),
            clipped_polygon: clipped
                .polygon
                .vertices()
                .iter()
                .map(|p| p.to_array())
                .collect(),
        }
    }
}

impl From<&ClipResponse> for ClippedScene {
    fn from(response: &ClipResponse) -> Self {
        Self {
            segments: response
                .clipped_segments
                .iter()
                .copied()
                .map(Segment::from)
                .collect(),
            polygon: response
                .clipped_polygon
                .iter()
                .copied()
                .map(Point::from)
                .collect::<Polygon>(),
        }
    }
}

/// Status code plus serialized JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub const OK: u16 = 200;
    pub const INTERNAL_ERROR: u16 = 500;

    fn error(status: u16, message: impl std::fmt::Display) -> Self {
        Self {
            status,
            body: json!({ "error": message.to_string() }).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parses, validates and clips a request body.
pub fn process_clip_request(body: &str) -> Result<ClipResponse, RequestError> {
    if body.trim().is_empty() {
        return Err(RequestError::EmptyBody);
    }
    let request: ClipRequest = serde_json::from_str(body)?;
    let (scene, config) = request.into_scene()?;
    let clipped = scene.clip(&config)?;
    Ok(ClipResponse::from(&clipped))
}

/// Handles one clip request end to end.
pub fn handle_clip_request(body: &str) -> TransportResponse {
    let response = match process_clip_request(body) {
        Ok(response) => response,
        Err(err) => {
            warn!("Rejected clip request: {}", err);
            return TransportResponse::error(err.status(), err);
        }
    };

    match serde_json::to_string(&response) {
        Ok(body) => {
            debug!(
                "Clip request answered: {} segments, {} polygon vertices",
                response.clipped_segments.len(),
                response.clipped_polygon.len()
            );
            TransportResponse {
                status: TransportResponse::OK,
                body,
            }
        }
        Err(err) => {
            error!("Failed to serialize clip response: {}", err);
            TransportResponse::error(TransportResponse::INTERNAL_ERROR, err)
        }
    }
}
