use crate::defaults;
use crate::error::{Result, ScribaError};
use crate::transcript::TranscriptResult;
use std::path::Path;
use std::sync::Arc;

/// Trait for the speech recognition collaborator.
///
/// This trait allows swapping implementations (real Whisper vs mock).
pub trait Recognizer: Send + Sync {
    /// Transcribe an audio file into time-stamped segments.
    ///
    /// The returned transcript is the pipeline's initial, pre-alignment
    /// result; failure here is fatal for the run.
    fn recognize(&self, audio_path: &Path, config: &RecognitionConfig)
    -> Result<TranscriptResult>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;

    /// Check if the recognizer is ready
    fn is_ready(&self) -> bool;
}

/// Implement Recognizer for Arc<T> to allow sharing.
impl<T: Recognizer> Recognizer for Arc<T> {
    fn recognize(
        &self,
        audio_path: &Path,
        config: &RecognitionConfig,
    ) -> Result<TranscriptResult> {
        (**self).recognize(audio_path, config)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// Fixed decoding configuration handed to the recognizer.
#[derive(Debug, Clone)]
pub struct RecognitionConfig {
    /// Target language code
    pub language: String,
    /// Beam search width
    pub beam_size: usize,
    /// Request word-level timing in the output
    pub word_timestamps: bool,
    /// Vocabulary-priming prompt, if any
    pub initial_prompt: Option<String>,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: defaults::DEFAULT_LANGUAGE.to_string(),
            beam_size: defaults::BEAM_SIZE,
            word_timestamps: true,
            initial_prompt: Some(defaults::INITIAL_PROMPT.to_string()),
        }
    }
}

/// Mock recognizer for testing
#[derive(Debug, Clone)]
pub struct MockRecognizer {
    model_name: String,
    segments: TranscriptResult,
    should_fail: bool,
}

impl MockRecognizer {
    /// Create a new mock recognizer with default settings
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            segments: TranscriptResult::default(),
            should_fail: false,
        }
    }

    /// Configure the mock to return specific segments
    pub fn with_segments(mut self, segments: TranscriptResult) -> Self {
        self.segments = segments;
        self
    }

    /// Configure the mock to fail on recognize
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Recognizer for MockRecognizer {
    fn recognize(
        &self,
        _audio_path: &Path,
        _config: &RecognitionConfig,
    ) -> Result<TranscriptResult> {
        if self.should_fail {
            Err(ScribaError::Recognition {
                message: "mock recognition failure".to_string(),
            })
        } else {
            Ok(self.segments.clone())
        }
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        !self.should_fail
    }
}
