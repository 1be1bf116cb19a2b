//! scriba - Japanese listening-comprehension audio transcriber
//!
//! Three-stage offline pipeline: speech recognition, timestamp alignment,
//! and speaker attribution, rendered as SRT, plain text, and JSON.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod align;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod config;
pub mod defaults;
pub mod device;
pub mod diarize;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod stt;
pub mod transcript;

// Composition root - wires config, CLI, and the pipeline together
#[cfg(feature = "cli")]
pub mod app;

// Stage seams
pub use align::{Aligner, AlignmentModel};
pub use diarize::Diarizer;
pub use stt::recognizer::Recognizer;

// Pipeline
pub use pipeline::orchestrator::{PipelineOptions, PipelineOrchestrator};

// Core data model
pub use device::Device;
pub use transcript::{Segment, TranscriptResult, Word};

// Error handling
pub use error::{Result, ScribaError};

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
