// src/io/error.rs
use crate::math::error::MathError;
use thiserror::Error;

/// Fehler beim Einlesen einer Text-Szene.
///
/// Positions are 1-based token indices into the whitespace-split input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Empty input: expected a segment count")]
    Empty,

    #[error("Token {position}: expected {expected}, found end of input")]
    UnexpectedEnd { position: usize, expected: String },

    #[error("Token {position}: '{token}' is not a valid {expected}")]
    InvalidToken {
        position: usize,
        token: String,
        expected: String,
    },

    #[error("Token {position}: {count} unexpected trailing token(s)")]
    TrailingTokens { position: usize, count: usize },

    #[error("Invalid scene geometry: {0}")]
    Geometry(#[from] MathError),
}

/// Fehler bei der Verarbeitung einer JSON-Clip-Anfrage.
///
/// Every variant is a client error and maps to status 400.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Expected JSON body.")]
    EmptyBody,

    #[error("Malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("No window provided.")]
    MissingWindow,

    #[error("Invalid request: {0}")]
    Geometry(#[from] MathError),
}

impl RequestError {
    pub fn status(&self) -> u16 {
        400
    }
}

pub type InputResult<T> = Result<T, InputError>;
