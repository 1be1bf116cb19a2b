//! Merging speaker turns into an aligned transcript.

use crate::diarize::{Diarizer, SpeakerTurn};
use crate::error::Result;
use crate::transcript::TranscriptResult;
use std::path::Path;
use std::sync::Arc;

/// Runs the diarization stage and merges its labels into the transcript.
///
/// The output sequence has identical ordering and timing to the input; only
/// the `speaker` field is added.
pub struct DiarizationAdapter {
    diarizer: Arc<dyn Diarizer>,
}

impl DiarizationAdapter {
    pub fn new(diarizer: Arc<dyn Diarizer>) -> Self {
        Self { diarizer }
    }

    pub fn assign_speakers(
        &self,
        transcript: &TranscriptResult,
        audio_path: &Path,
    ) -> Result<TranscriptResult> {
        let turns = self.diarizer.diarize(audio_path)?;

        let mut result = transcript.clone();
        for segment in &mut result.segments {
            segment.speaker = dominant_speaker(segment.start, segment.end, &turns);
        }
        Ok(result)
    }
}

/// The speaker whose turn overlaps `[start, end)` the most.
/// Returns None when no turn overlaps the span at all.
fn dominant_speaker(start: f64, end: f64, turns: &[SpeakerTurn]) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for turn in turns {
        let overlap = (end.min(turn.end) - start.max(turn.start)).max(0.0);
        if overlap <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_overlap)) if best_overlap >= overlap => {}
            _ => best = Some((&turn.speaker, overlap)),
        }
    }
    best.map(|(speaker, _)| speaker.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diarize::MockDiarizer;
    use crate::error::ScribaError;
    use crate::transcript::Segment;
    use std::path::PathBuf;

    fn aligned_transcript() -> TranscriptResult {
        TranscriptResult::new(vec![
            Segment::new(0.0, 4.0, "first"),
            Segment::new(4.0, 9.0, "second"),
        ])
    }

    #[test]
    fn assigns_speaker_with_maximal_overlap() {
        // First segment: 3s of SPEAKER_00 vs 1s of SPEAKER_01
        let diarizer = MockDiarizer::new().with_turns(vec![
            SpeakerTurn::new(0.0, 3.0, "SPEAKER_00"),
            SpeakerTurn::new(3.0, 9.0, "SPEAKER_01"),
        ]);
        let adapter = DiarizationAdapter::new(Arc::new(diarizer));

        let tagged = adapter
            .assign_speakers(&aligned_transcript(), &PathBuf::from("a.wav"))
            .unwrap();

        assert_eq!(tagged.segments[0].speaker.as_deref(), Some("SPEAKER_00"));
        assert_eq!(tagged.segments[1].speaker.as_deref(), Some("SPEAKER_01"));
    }

    #[test]
    fn segment_without_overlap_stays_unassigned() {
        let diarizer =
            MockDiarizer::new().with_turns(vec![SpeakerTurn::new(20.0, 25.0, "SPEAKER_00")]);
        let adapter = DiarizationAdapter::new(Arc::new(diarizer));

        let tagged = adapter
            .assign_speakers(&aligned_transcript(), &PathBuf::from("a.wav"))
            .unwrap();
        assert!(tagged.segments.iter().all(|s| s.speaker.is_none()));
    }

    #[test]
    fn touching_turns_do_not_count_as_overlap() {
        // Turn ends exactly where the segment starts
        let diarizer =
            MockDiarizer::new().with_turns(vec![SpeakerTurn::new(0.0, 4.0, "SPEAKER_00")]);
        let adapter = DiarizationAdapter::new(Arc::new(diarizer));

        let tagged = adapter
            .assign_speakers(&aligned_transcript(), &PathBuf::from("a.wav"))
            .unwrap();
        assert_eq!(tagged.segments[0].speaker.as_deref(), Some("SPEAKER_00"));
        assert!(tagged.segments[1].speaker.is_none());
    }

    #[test]
    fn ordering_and_timing_are_untouched() {
        let diarizer =
            MockDiarizer::new().with_turns(vec![SpeakerTurn::new(0.0, 9.0, "SPEAKER_00")]);
        let adapter = DiarizationAdapter::new(Arc::new(diarizer));

        let input = aligned_transcript();
        let tagged = adapter
            .assign_speakers(&input, &PathBuf::from("a.wav"))
            .unwrap();

        assert_eq!(tagged.len(), input.len());
        for (before, after) in input.segments.iter().zip(&tagged.segments) {
            assert_eq!(before.start, after.start);
            assert_eq!(before.end, after.end);
            assert_eq!(before.text, after.text);
        }
    }

    #[test]
    fn collaborator_failure_propagates() {
        let adapter = DiarizationAdapter::new(Arc::new(MockDiarizer::new().with_failure()));
        let result = adapter.assign_speakers(&aligned_transcript(), &PathBuf::from("a.wav"));
        assert!(matches!(result, Err(ScribaError::Diarization { .. })));
    }

    #[test]
    fn dominant_speaker_prefers_larger_overlap() {
        let turns = vec![
            SpeakerTurn::new(0.0, 1.0, "A"),
            SpeakerTurn::new(1.0, 4.0, "B"),
        ];
        assert_eq!(dominant_speaker(0.0, 4.0, &turns).as_deref(), Some("B"));
        assert_eq!(dominant_speaker(0.0, 1.5, &turns).as_deref(), Some("A"));
        assert_eq!(dominant_speaker(10.0, 12.0, &turns), None);
    }
}
