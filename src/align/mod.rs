//! Timestamp alignment stage.
//!
//! The alignment collaborator recomputes word/segment boundaries against the
//! audio waveform. Its ad hoc wire shapes stay behind this boundary; the rest
//! of the crate only ever sees [`crate::transcript::TranscriptResult`].

pub mod adapter;

pub use adapter::AlignmentAdapter;

use crate::device::Device;
use crate::error::{Result, ScribaError};
use std::path::Path;

/// Segment in the alignment collaborator's input schema.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignInput {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub words: Vec<AlignWord>,
}

/// Word-level timing in the collaborator's schema.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

/// The collaborator's response: refined segments, same schema as the input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedTranscript {
    pub segments: Vec<AlignInput>,
}

/// Trait for the alignment collaborator.
///
/// `load` acquires the language-specific model for a device; the returned
/// handle owns any accelerator memory and releases it on drop.
pub trait Aligner: Send + Sync {
    fn load(&self, language: &str, device: Device) -> Result<Box<dyn AlignmentModel>>;
}

/// A loaded alignment model, valid for one stage invocation.
pub trait AlignmentModel {
    fn align(
        &self,
        segments: &[AlignInput],
        audio_path: &Path,
        device: Device,
    ) -> Result<AlignedTranscript>;
}

/// Mock aligner for testing
#[derive(Debug, Clone, Default)]
pub struct MockAligner {
    refined: Option<AlignedTranscript>,
    fail_on_load: bool,
    fail_on_align: bool,
}

impl MockAligner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to return specific refined segments.
    /// Without this, the mock echoes its input back unchanged.
    pub fn with_refined(mut self, refined: AlignedTranscript) -> Self {
        self.refined = Some(refined);
        self
    }

    /// Configure the mock to fail while loading the model
    pub fn with_load_failure(mut self) -> Self {
        self.fail_on_load = true;
        self
    }

    /// Configure the mock to fail during alignment
    pub fn with_align_failure(mut self) -> Self {
        self.fail_on_align = true;
        self
    }
}

struct MockAlignmentModel {
    refined: Option<AlignedTranscript>,
    fail_on_align: bool,
}

impl Aligner for MockAligner {
    fn load(&self, _language: &str, _device: Device) -> Result<Box<dyn AlignmentModel>> {
        if self.fail_on_load {
            return Err(ScribaError::Alignment {
                message: "mock model load failure".to_string(),
            });
        }
        Ok(Box::new(MockAlignmentModel {
            refined: self.refined.clone(),
            fail_on_align: self.fail_on_align,
        }))
    }
}

impl AlignmentModel for MockAlignmentModel {
    fn align(
        &self,
        segments: &[AlignInput],
        _audio_path: &Path,
        _device: Device,
    ) -> Result<AlignedTranscript> {
        if self.fail_on_align {
            return Err(ScribaError::Alignment {
                message: "mock alignment failure".to_string(),
            });
        }
        Ok(self.refined.clone().unwrap_or(AlignedTranscript {
            segments: segments.to_vec(),
        }))
    }
}
