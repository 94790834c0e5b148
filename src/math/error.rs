// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error(
        "Invalid clip window ({xmin}, {ymin}, {xmax}, {ymax}): min must not exceed max"
    )]
    InvalidWindow {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },

    #[error("Non-finite coordinate in {context}: ({x}, {y})")]
    NonFiniteCoordinate { context: String, x: f64, y: f64 },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
