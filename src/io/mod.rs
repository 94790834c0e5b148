// src/io/mod.rs

//! Ein- und Ausgabe: Text-Szenen und JSON-Anfragen.

pub mod error;
pub mod scene;
pub mod transport;

pub use error::{InputError, InputResult, RequestError};
pub use scene::{ClippedScene, Scene};
pub use transport::{ClipRequest, ClipResponse, TransportResponse, handle_clip_request};
