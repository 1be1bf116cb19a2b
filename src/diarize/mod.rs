//! Speaker attribution stage.
//!
//! The diarization collaborator labels time ranges of the audio with speaker
//! identities; the adapter merges those labels into an aligned transcript.

pub mod adapter;

pub use adapter::DiarizationAdapter;

use crate::error::{Result, ScribaError};
use std::path::Path;

/// One speaker-labeled time range from the diarization collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerTurn {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
}

impl SpeakerTurn {
    pub fn new(start: f64, end: f64, speaker: impl Into<String>) -> Self {
        Self {
            start,
            end,
            speaker: speaker.into(),
        }
    }
}

/// Trait for the diarization collaborator.
pub trait Diarizer: Send + Sync {
    fn diarize(&self, audio_path: &Path) -> Result<Vec<SpeakerTurn>>;
}

/// Mock diarizer for testing
#[derive(Debug, Clone, Default)]
pub struct MockDiarizer {
    turns: Vec<SpeakerTurn>,
    should_fail: bool,
}

impl MockDiarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to return specific speaker turns
    pub fn with_turns(mut self, turns: Vec<SpeakerTurn>) -> Self {
        self.turns = turns;
        self
    }

    /// Configure the mock to fail on diarize
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Diarizer for MockDiarizer {
    fn diarize(&self, _audio_path: &Path) -> Result<Vec<SpeakerTurn>> {
        if self.should_fail {
            return Err(ScribaError::Diarization {
                message: "mock diarization failure".to_string(),
            });
        }
        Ok(self.turns.clone())
    }
}
