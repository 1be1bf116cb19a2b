//! Error types for scriba.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScribaError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    // Input errors
    #[error("Audio file not found: {path}")]
    AudioFileNotFound { path: String },

    #[error("Invalid audio path: {path}")]
    InvalidAudioPath { path: String },

    // Recognition errors (stage 1, fatal)
    #[error("Recognition model not found at {path}")]
    RecognitionModelNotFound { path: String },

    #[error("Recognition failed: {message}")]
    Recognition { message: String },

    // Alignment errors (stage 2, recoverable)
    #[error("Alignment failed: {message}")]
    Alignment { message: String },

    // Diarization errors (stage 3, recoverable)
    #[error("Diarization failed: {message}")]
    Diarization { message: String },

    // Output serialization
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, ScribaError>;

impl ScribaError {
    /// True for stage failures the pipeline absorbs instead of propagating.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScribaError::Alignment { .. } | ScribaError::Diarization { .. }
        )
    }
}
