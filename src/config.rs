use crate::defaults;
use crate::device::Device;
use crate::error::{Result, ScribaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub stt: SttConfig,
    pub output: OutputConfig,
}

/// Speech-to-text configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SttConfig {
    pub model: String,
    pub language: String,
    pub device: Option<Device>,
    /// Directory holding the ggml model files. None means ~/.local/share/scriba/models
    pub model_dir: Option<PathBuf>,
    pub threads: Option<usize>,
}

/// Output rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_MODEL.to_string(),
            language: defaults::DEFAULT_LANGUAGE.to_string(),
            device: None,
            model_dir: None,
            threads: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(defaults::DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if the file doesn't
    /// exist. Invalid TOML still fails the run.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(ScribaError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SCRIBA_MODEL → stt.model
    /// - SCRIBA_LANGUAGE → stt.language
    /// - SCRIBA_DEVICE → stt.device
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("SCRIBA_MODEL")
            && !model.is_empty()
        {
            self.stt.model = model;
        }

        if let Ok(language) = std::env::var("SCRIBA_LANGUAGE")
            && !language.is_empty()
        {
            self.stt.language = language;
        }

        if let Ok(device) = std::env::var("SCRIBA_DEVICE")
            && !device.is_empty()
        {
            match device.parse::<Device>() {
                Ok(device) => self.stt.device = Some(device),
                Err(e) => log::warn!("ignoring SCRIBA_DEVICE: {e}"),
            }
        }

        self
    }

    fn validate(&self) -> Result<()> {
        if !defaults::MODEL_TIERS.contains(&self.stt.model.as_str()) {
            return Err(ScribaError::ConfigInvalidValue {
                key: "stt.model".to_string(),
                message: format!(
                    "unknown model tier '{}' (expected one of {})",
                    self.stt.model,
                    defaults::MODEL_TIERS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/scriba/config.toml on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scriba").join("config.toml"))
    }

    /// Directory searched for the ggml model files.
    pub fn model_dir(&self) -> PathBuf {
        if let Some(dir) = &self.stt.model_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scriba")
            .join("models")
    }

    /// Full path to the configured recognition model file.
    pub fn model_path(&self) -> PathBuf {
        self.model_dir().join(defaults::model_file_name(&self.stt.model))
    }
}
