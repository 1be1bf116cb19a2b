//! Unified transcript data model.
//!
//! Every pipeline stage produces and consumes the same shape: a
//! [`TranscriptResult`] holding chronologically ordered [`Segment`]s. Stages
//! replace the result wholesale; nothing is patched field by field, and
//! nothing outlives a single pipeline run.

pub mod timestamp;

use serde::{Deserialize, Serialize};

/// One word with its refined time boundaries.
///
/// Word lists are the alignment collaborator's unit of work; final rendering
/// only needs segment-level timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

/// A contiguous span of speech with its transcribed text.
///
/// `speaker` is populated only after a successful diarization merge; `None`
/// means unknown/unassigned. `words` may be empty for recognizers that do
/// not emit word-level timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<Word>,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            speaker: None,
            words: Vec::new(),
        }
    }

    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = words;
        self
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Text as rendered in the subtitle and plain-text outputs:
    /// `[speaker] text` when a speaker is assigned, bare text otherwise.
    pub fn display_text(&self) -> String {
        match &self.speaker {
            Some(speaker) => format!("[{speaker}] {}", self.text),
            None => self.text.clone(),
        }
    }

    /// A segment the renderers can handle: valid ordering and non-empty text.
    pub fn is_renderable(&self) -> bool {
        self.start >= 0.0 && self.start < self.end && !self.text.trim().is_empty()
    }
}

/// The ordered segment sequence passed between pipeline stages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranscriptResult {
    pub segments: Vec<Segment>,
}

impl TranscriptResult {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Stage-boundary invariant: every segment renderable, sequence ordered
    /// by non-decreasing start time.
    pub fn is_renderable(&self) -> bool {
        self.segments.iter().all(Segment::is_renderable)
            && self
                .segments
                .windows(2)
                .all(|pair| pair[0].start <= pair[1].start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranscriptResult {
        TranscriptResult::new(vec![
            Segment::new(0.0, 4.2, "こんにちは"),
            Segment::new(4.2, 9.8, "ありがとう"),
        ])
    }

    #[test]
    fn display_text_without_speaker_is_bare() {
        let segment = Segment::new(0.0, 1.0, "hello");
        assert_eq!(segment.display_text(), "hello");
    }

    #[test]
    fn display_text_with_speaker_is_prefixed() {
        let segment = Segment::new(0.0, 1.0, "hello").with_speaker("SPEAKER_00");
        assert_eq!(segment.display_text(), "[SPEAKER_00] hello");
    }

    #[test]
    fn renderable_requires_ordering_and_text() {
        assert!(Segment::new(0.0, 1.0, "ok").is_renderable());
        assert!(!Segment::new(1.0, 1.0, "ok").is_renderable());
        assert!(!Segment::new(2.0, 1.0, "ok").is_renderable());
        assert!(!Segment::new(0.0, 1.0, "  ").is_renderable());
        assert!(!Segment::new(-0.5, 1.0, "ok").is_renderable());
    }

    #[test]
    fn transcript_renderable_checks_sequence_order() {
        assert!(sample().is_renderable());

        let out_of_order = TranscriptResult::new(vec![
            Segment::new(4.2, 9.8, "second"),
            Segment::new(0.0, 4.2, "first"),
        ]);
        assert!(!out_of_order.is_renderable());
    }

    #[test]
    fn json_omits_speaker_and_empty_words() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("speaker"));
        assert!(!json.contains("words"));
    }

    #[test]
    fn json_includes_speaker_when_assigned() {
        let result = TranscriptResult::new(vec![
            Segment::new(0.0, 1.0, "hello").with_speaker("SPEAKER_01"),
        ]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"speaker\":\"SPEAKER_01\""));
    }

    #[test]
    fn json_round_trips_losslessly() {
        let original = TranscriptResult::new(vec![
            Segment::new(0.0, 4.2, "こんにちは")
                .with_words(vec![Word {
                    word: "こんにちは".to_string(),
                    start: 0.1,
                    end: 4.0,
                }])
                .with_speaker("SPEAKER_00"),
            Segment::new(4.2, 9.8, "ありがとう"),
        ]);
        let json = serde_json::to_string_pretty(&original).unwrap();
        let parsed: TranscriptResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn serializes_as_bare_sequence() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['), "expected a top-level array: {json}");
    }

    #[test]
    fn non_ascii_text_is_not_escaped() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("こんにちは"));
        assert!(!json.contains("\\u"));
    }
}
