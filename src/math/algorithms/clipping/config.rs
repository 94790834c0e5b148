// src/math/algorithms/clipping/config.rs

use crate::math::{
    error::{MathError, MathResult},
    utils::constants,
};
use serde::{Deserialize, Serialize};

/// Specifies the algorithm used for segment clipping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentAlgorithm {
    /// Outcode-basiertes Clipping, eine Randkante pro Iteration.
    #[default]
    CohenSutherland,
    /// Parametrisches Clipping über die vier Halbebenen in einem Durchlauf.
    LiangBarsky,
}

/// Konfiguration für das Clipping einer Szene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    /// Algorithmus für Liniensegmente.
    pub segment_algorithm: SegmentAlgorithm,
    /// Nachkommastellen, auf die Polygon-Vertices gerundet werden.
    pub precision: u32,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            segment_algorithm: SegmentAlgorithm::default(),
            precision: constants::DEFAULT_OUTPUT_PRECISION,
        }
    }
}

impl ClipConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segment_algorithm(mut self, algorithm: SegmentAlgorithm) -> Self {
        self.segment_algorithm = algorithm;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.precision > constants::MAX_OUTPUT_PRECISION {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "precision must be at most {} decimal digits, got {}",
                    constants::MAX_OUTPUT_PRECISION,
                    self.precision
                ),
            });
        }
        Ok(())
    }
}
