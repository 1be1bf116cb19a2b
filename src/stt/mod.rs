//! Speech recognition stage.

pub mod recognizer;
pub mod whisper;

pub use recognizer::{MockRecognizer, RecognitionConfig, Recognizer};
