//! Schema conversion between the unified transcript and the alignment
//! collaborator.

use crate::align::{AlignInput, AlignWord, Aligner};
use crate::device::Device;
use crate::error::{Result, ScribaError};
use crate::transcript::{Segment, TranscriptResult, Word};
use std::path::Path;
use std::sync::Arc;

/// Runs the alignment stage: convert out, invoke, convert back.
///
/// The adapter either returns a fully valid replacement transcript or an
/// error; it never hands back a partially populated sequence, and it never
/// mutates its input.
pub struct AlignmentAdapter {
    aligner: Arc<dyn Aligner>,
}

impl AlignmentAdapter {
    pub fn new(aligner: Arc<dyn Aligner>) -> Self {
        Self { aligner }
    }

    pub fn align(
        &self,
        transcript: &TranscriptResult,
        audio_path: &Path,
        language: &str,
        device: Device,
    ) -> Result<TranscriptResult> {
        let inputs: Vec<AlignInput> = transcript.segments.iter().map(to_align_input).collect();

        // The model handle lives only for this stage; dropping it at scope
        // end releases any accelerator memory it holds.
        let model = self.aligner.load(language, device)?;
        let aligned = model.align(&inputs, audio_path, device)?;

        let result = TranscriptResult::new(
            aligned
                .segments
                .into_iter()
                .map(from_align_segment)
                .collect(),
        );

        if !result.is_renderable() {
            return Err(ScribaError::Alignment {
                message: "aligner returned an unrenderable segment sequence".to_string(),
            });
        }

        Ok(result)
    }
}

fn to_align_input(segment: &Segment) -> AlignInput {
    AlignInput {
        start: segment.start,
        end: segment.end,
        text: segment.text.clone(),
        words: segment
            .words
            .iter()
            .map(|w| AlignWord {
                word: w.word.clone(),
                start: w.start,
                end: w.end,
            })
            .collect(),
    }
}

fn from_align_segment(segment: AlignInput) -> Segment {
    Segment {
        start: segment.start,
        end: segment.end,
        text: segment.text,
        // Speakers are assigned after alignment; the collaborator never
        // carries them.
        speaker: None,
        words: segment
            .words
            .into_iter()
            .map(|w| Word {
                word: w.word,
                start: w.start,
                end: w.end,
            })
            .collect(),
    }
}
