//! The pipeline coordinator: recognition → alignment → diarization → output.
//!
//! Stage 1 failure is fatal; stage 2 and 3 failures are absorbed here with a
//! warning, and the run continues with the last-known-good transcript. Each
//! stage replaces the transcript wholesale, so a failed stage can never leave
//! a half-updated sequence behind.

use crate::align::{Aligner, AlignmentAdapter};
use crate::device::Device;
use crate::diarize::{DiarizationAdapter, Diarizer};
use crate::error::{Result, ScribaError};
use crate::output::{OutputPaths, OutputWriter};
use crate::stt::recognizer::{RecognitionConfig, Recognizer};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Per-run switches, resolved from the CLI before the run starts.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Run the timestamp realignment stage
    pub enable_alignment: bool,
    /// Run the speaker attribution stage
    pub enable_diarization: bool,
    /// Execution device, threaded through every stage call
    pub device: Device,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            enable_alignment: true,
            enable_diarization: true,
            device: Device::auto(),
        }
    }
}

/// Sequences the three model stages and renders the final transcript.
///
/// Alignment and diarization run only when a backend is attached; the
/// recognizer is always required.
pub struct PipelineOrchestrator {
    recognizer: Arc<dyn Recognizer>,
    recognition: RecognitionConfig,
    alignment: Option<AlignmentAdapter>,
    diarization: Option<DiarizationAdapter>,
    writer: OutputWriter,
}

impl PipelineOrchestrator {
    pub fn new(recognizer: Arc<dyn Recognizer>) -> Self {
        Self {
            recognizer,
            recognition: RecognitionConfig::default(),
            alignment: None,
            diarization: None,
            writer: OutputWriter::new(),
        }
    }

    /// Override the fixed decoding configuration.
    pub fn with_recognition_config(mut self, config: RecognitionConfig) -> Self {
        self.recognition = config;
        self
    }

    /// Attach an alignment collaborator.
    pub fn with_aligner(mut self, aligner: Arc<dyn Aligner>) -> Self {
        self.alignment = Some(AlignmentAdapter::new(aligner));
        self
    }

    /// Attach a diarization collaborator.
    pub fn with_diarizer(mut self, diarizer: Arc<dyn Diarizer>) -> Self {
        self.diarization = Some(DiarizationAdapter::new(diarizer));
        self
    }

    /// Run the full pipeline for one audio file.
    ///
    /// Writes `{base}.srt`, `{base}.txt`, and `{base}.json` under
    /// `output_dir`, where `base` is the audio file's stem. Propagates only
    /// recognition and output-write failures.
    pub fn run(
        &self,
        audio_path: &Path,
        output_dir: &Path,
        options: &PipelineOptions,
    ) -> Result<OutputPaths> {
        let started = Instant::now();
        let base_name = audio_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ScribaError::InvalidAudioPath {
                path: audio_path.to_string_lossy().to_string(),
            })?
            .to_string();

        log::info!(
            "transcribing {} with model '{}' on {}",
            audio_path.display(),
            self.recognizer.model_name(),
            options.device
        );

        // Stage 1: recognition. No fallback — without it there is nothing
        // to output.
        let mut transcript = self.recognizer.recognize(audio_path, &self.recognition)?;
        log::info!("recognition produced {} segments", transcript.len());

        // Stage 2: alignment. Failure keeps the raw transcript.
        let mut aligned = false;
        if options.enable_alignment
            && let Some(adapter) = &self.alignment
        {
            match adapter.align(
                &transcript,
                audio_path,
                &self.recognition.language,
                options.device,
            ) {
                Ok(refined) => {
                    transcript = refined;
                    aligned = true;
                }
                Err(e) => {
                    log::warn!("alignment failed: {e}; keeping the raw transcript");
                }
            }
        }

        // Stage 3: diarization. Gated on alignment success and on the
        // collaborator's accelerator-only limitation; failure keeps the
        // aligned transcript.
        if options.enable_diarization
            && aligned
            && options.device.supports_diarization()
            && let Some(adapter) = &self.diarization
        {
            match adapter.assign_speakers(&transcript, audio_path) {
                Ok(tagged) => transcript = tagged,
                Err(e) => {
                    log::warn!("diarization failed: {e}; keeping the aligned transcript");
                }
            }
        }

        let paths = self.writer.write(&transcript, output_dir, &base_name)?;
        log::info!(
            "wrote {} segments in {:.2}s",
            transcript.len(),
            started.elapsed().as_secs_f64()
        );
        Ok(paths)
    }
}
