//! Whisper-based speech recognition.
//!
//! This module provides a Whisper implementation of the Recognizer trait using
//! whisper-rs.
//!
//! # Feature Gate
//!
//! This module requires the `whisper` feature to be enabled and cmake to be
//! installed. To build with Whisper support:
//!
//! ```bash
//! cargo build --features whisper
//! ```

use crate::error::{Result, ScribaError};
use crate::stt::recognizer::{RecognitionConfig, Recognizer};
use crate::transcript::{Segment, TranscriptResult, Word};
use std::path::{Path, PathBuf};

#[cfg(feature = "whisper")]
use std::sync::{Mutex, Once};
#[cfg(feature = "whisper")]
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, install_logging_hooks,
};

#[cfg(feature = "whisper")]
static LOGGING_HOOKS_INSTALLED: Once = Once::new();

/// Sample rate Whisper expects.
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;

/// Configuration for the Whisper recognizer.
#[derive(Debug, Clone)]
pub struct WhisperConfig {
    /// Path to the Whisper model file
    pub model_path: PathBuf,
    /// Number of threads for inference (None = auto-detect)
    pub threads: Option<usize>,
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/ggml-base.bin"),
            threads: None,
        }
    }
}

/// Whisper-based recognizer implementation.
///
/// The WhisperContext is wrapped in a Mutex to ensure thread safety.
///
/// # Feature Gate
///
/// The real implementation is only available when the `whisper` feature is
/// enabled; without it a stub that always errors is compiled instead.
#[cfg(feature = "whisper")]
pub struct WhisperRecognizer {
    context: Mutex<WhisperContext>,
    config: WhisperConfig,
    model_name: String,
}

#[cfg(feature = "whisper")]
impl std::fmt::Debug for WhisperRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperRecognizer")
            .field("config", &self.config)
            .field("model_name", &self.model_name)
            .field("context", &"<WhisperContext>")
            .finish()
    }
}

/// Whisper-based recognizer placeholder (without whisper feature).
#[cfg(not(feature = "whisper"))]
#[derive(Debug)]
pub struct WhisperRecognizer {
    config: WhisperConfig,
    model_name: String,
}

fn model_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(feature = "whisper")]
impl WhisperRecognizer {
    /// Load a Whisper model from disk.
    ///
    /// # Errors
    /// Returns `ScribaError::RecognitionModelNotFound` if the model file
    /// doesn't exist, `ScribaError::Recognition` if loading fails.
    pub fn new(config: WhisperConfig) -> Result<Self> {
        // Install logging hooks to suppress whisper.cpp output (only once)
        LOGGING_HOOKS_INSTALLED.call_once(|| {
            install_logging_hooks();
        });

        if !config.model_path.exists() {
            return Err(ScribaError::RecognitionModelNotFound {
                path: config.model_path.to_string_lossy().to_string(),
            });
        }

        let model_name = model_name_from_path(&config.model_path);

        let context_params = WhisperContextParameters::default();
        let context = WhisperContext::new_with_params(
            config
                .model_path
                .to_str()
                .ok_or_else(|| ScribaError::Recognition {
                    message: "Invalid UTF-8 in model path".to_string(),
                })?,
            context_params,
        )
        .map_err(|e| ScribaError::Recognition {
            message: format!("Failed to load Whisper model: {e}"),
        })?;

        Ok(Self {
            context: Mutex::new(context),
            config,
            model_name,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &WhisperConfig {
        &self.config
    }
}

#[cfg(not(feature = "whisper"))]
impl WhisperRecognizer {
    /// Create a Whisper recognizer (stub implementation).
    pub fn new(config: WhisperConfig) -> Result<Self> {
        if !config.model_path.exists() {
            return Err(ScribaError::RecognitionModelNotFound {
                path: config.model_path.to_string_lossy().to_string(),
            });
        }

        let model_name = model_name_from_path(&config.model_path);
        Ok(Self { config, model_name })
    }

    /// Get the configuration
    pub fn config(&self) -> &WhisperConfig {
        &self.config
    }
}

/// Read a WAV file into f32 samples at Whisper's expected rate.
///
/// Multi-channel input is downmixed by averaging. Other sample rates are
/// rejected rather than silently resampled.
#[cfg(feature = "whisper")]
fn load_wav_samples(audio_path: &Path) -> Result<Vec<f32>> {
    let reader = hound::WavReader::open(audio_path).map_err(|e| ScribaError::Recognition {
        message: format!("Failed to read WAV file: {e}"),
    })?;
    let spec = reader.spec();

    if spec.sample_rate != WHISPER_SAMPLE_RATE {
        return Err(ScribaError::Recognition {
            message: format!(
                "Unsupported sample rate {} Hz (expected {} Hz); resample the input first",
                spec.sample_rate, WHISPER_SAMPLE_RATE
            ),
        });
    }

    let channels = spec.channels.max(1) as usize;
    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Int => reader
            .into_samples::<i16>()
            .map(|s| s.map(|v| v as f32 / 32768.0))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| ScribaError::Recognition {
                message: format!("Failed to decode WAV samples: {e}"),
            })?,
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| ScribaError::Recognition {
                message: format!("Failed to decode WAV samples: {e}"),
            })?,
    };

    if channels == 1 {
        return Ok(interleaved);
    }

    Ok(interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect())
}

/// Whisper timestamps come in 10ms units.
#[cfg(feature = "whisper")]
fn centi_to_seconds(raw: i64) -> f64 {
    raw.max(0) as f64 / 100.0
}

#[cfg(feature = "whisper")]
impl Recognizer for WhisperRecognizer {
    fn recognize(
        &self,
        audio_path: &Path,
        config: &RecognitionConfig,
    ) -> Result<TranscriptResult> {
        let samples = load_wav_samples(audio_path)?;

        let context = self.context.lock().map_err(|e| ScribaError::Recognition {
            message: format!("Failed to acquire context lock: {e}"),
        })?;

        let mut state = context.create_state().map_err(|e| ScribaError::Recognition {
            message: format!("Failed to create Whisper state: {e}"),
        })?;

        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: config.beam_size as i32,
            patience: -1.0,
        });
        params.set_language(Some(&config.language));
        if let Some(prompt) = config.initial_prompt.as_deref() {
            params.set_initial_prompt(prompt);
        }
        params.set_token_timestamps(config.word_timestamps);
        params.set_split_on_word(true);
        if let Some(threads) = self.config.threads {
            params.set_n_threads(threads as i32);
        }

        // Disable printing to stdout/stderr
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state
            .full(params, &samples)
            .map_err(|e| ScribaError::Recognition {
                message: format!("Whisper inference failed: {e}"),
            })?;

        let mut segments = Vec::new();
        for idx in 0..state.full_n_segments() {
            let Some(segment) = state.get_segment(idx) else {
                continue;
            };
            let start = centi_to_seconds(segment.start_timestamp());
            let end = centi_to_seconds(segment.end_timestamp());
            let text = segment
                .to_str_lossy()
                .map(|cow| cow.trim().to_string())
                .unwrap_or_default();
            if text.is_empty() {
                continue;
            }

            let mut words = Vec::new();
            if config.word_timestamps {
                for token_idx in 0..segment.n_tokens().max(0) {
                    let Some(token) = segment.get_token(token_idx) else {
                        continue;
                    };
                    let token_text = token
                        .to_str_lossy()
                        .map(|cow| cow.to_string())
                        .unwrap_or_default();
                    // Skip special markers like [_BEG_] and <|endoftext|>
                    if token_text.starts_with("[_") || token_text.starts_with("<|") {
                        continue;
                    }
                    let data = token.token_data();
                    words.push(Word {
                        word: token_text.trim().to_string(),
                        start: centi_to_seconds(data.t0),
                        end: centi_to_seconds(data.t1),
                    });
                }
                words.retain(|w| !w.word.is_empty());
            }

            segments.push(Segment::new(start, end, text).with_words(words));
        }

        Ok(TranscriptResult::new(segments))
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(not(feature = "whisper"))]
impl Recognizer for WhisperRecognizer {
    fn recognize(
        &self,
        _audio_path: &Path,
        _config: &RecognitionConfig,
    ) -> Result<TranscriptResult> {
        Err(ScribaError::Recognition {
            message: concat!(
                "Whisper feature not enabled. This binary was built without speech recognition.\n",
                "To fix: cargo build --release (whisper is enabled by default)\n",
                "If build fails with cmake errors, install: sudo apt install cmake"
            )
            .to_string(),
        })
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        false
    }
}
