//! Transcription application entry point.
//!
//! Wires the configuration and CLI overrides into a pipeline run:
//! recognize → align → attribute speakers → write outputs.

use crate::cli::Cli;
use crate::config::Config;
use crate::defaults;
use crate::device::Device;
use crate::error::{Result, ScribaError};
use crate::pipeline::{PipelineOptions, PipelineOrchestrator};
use crate::stt::recognizer::RecognitionConfig;
use crate::stt::whisper::{WhisperConfig, WhisperRecognizer};
use std::path::PathBuf;
use std::sync::Arc;

/// Run one transcription end to end.
///
/// CLI arguments override the config file, which overrides built-in
/// defaults. Prints the output file locations on success unless `--quiet`
/// was given.
pub fn run_transcribe_command(mut config: Config, cli: &Cli) -> Result<()> {
    if !cli.audio_path.exists() {
        return Err(ScribaError::AudioFileNotFound {
            path: cli.audio_path.to_string_lossy().to_string(),
        });
    }

    // Apply CLI overrides
    if let Some(model) = &cli.model {
        if !defaults::MODEL_TIERS.contains(&model.as_str()) {
            return Err(ScribaError::ConfigInvalidValue {
                key: "model".to_string(),
                message: format!(
                    "unknown model tier '{model}' (expected one of {})",
                    defaults::MODEL_TIERS.join(", ")
                ),
            });
        }
        config.stt.model = model.clone();
    }

    let device = cli
        .device
        .or(config.stt.device)
        .unwrap_or_else(Device::auto);
    let output_dir = resolve_output_dir(cli, &config);

    if !cli.quiet {
        eprintln!("Loading model '{}'...", config.stt.model);
    }
    let recognizer = Arc::new(WhisperRecognizer::new(WhisperConfig {
        model_path: config.model_path(),
        threads: config.stt.threads,
    })?);

    let recognition = RecognitionConfig {
        language: config.stt.language.clone(),
        ..RecognitionConfig::default()
    };

    let orchestrator =
        PipelineOrchestrator::new(recognizer).with_recognition_config(recognition);

    // No alignment or diarization backend ships with this binary; say so
    // instead of letting the stage flags pass without effect.
    log::info!("alignment and speaker attribution backends are not bundled in this build");

    let options = PipelineOptions {
        enable_alignment: !cli.no_align,
        enable_diarization: !cli.no_speakers,
        device,
    };

    let paths = orchestrator.run(&cli.audio_path, &output_dir, &options)?;

    if !cli.quiet {
        println!("Transcription complete:");
        println!("  {}", paths.srt.display());
        println!("  {}", paths.txt.display());
        println!("  {}", paths.json.display());
    }

    Ok(())
}

/// Output directory precedence: `--output` beats the config file, which
/// beats the built-in `./output` default (carried by `OutputConfig`).
fn resolve_output_dir(cli: &Cli, config: &Config) -> PathBuf {
    cli.output
        .clone()
        .unwrap_or_else(|| config.output.dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn output_flag_overrides_configured_dir() {
        let cli = parse(&["scriba", "lesson01.wav", "-o", "/tmp/from-cli"]);
        let config = Config {
            output: crate::config::OutputConfig {
                dir: PathBuf::from("/tmp/from-config"),
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_output_dir(&cli, &config),
            PathBuf::from("/tmp/from-cli")
        );
    }

    #[test]
    fn configured_dir_applies_without_output_flag() {
        let cli = parse(&["scriba", "lesson01.wav"]);
        let config = Config {
            output: crate::config::OutputConfig {
                dir: PathBuf::from("/tmp/from-config"),
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_output_dir(&cli, &config),
            PathBuf::from("/tmp/from-config")
        );
    }

    #[test]
    fn default_output_dir_is_the_builtin_one() {
        let cli = parse(&["scriba", "lesson01.wav"]);
        assert_eq!(
            resolve_output_dir(&cli, &Config::default()),
            PathBuf::from("./output")
        );
    }

    #[test]
    fn missing_audio_file_fails_early() {
        let cli = parse(&["scriba", "/nonexistent/audio.wav"]);
        let result = run_transcribe_command(Config::default(), &cli);
        assert!(matches!(result, Err(ScribaError::AudioFileNotFound { .. })));
    }

    #[test]
    fn unknown_model_override_is_rejected() {
        let audio = tempfile::NamedTempFile::with_suffix(".wav").unwrap();
        let cli = parse(&[
            "scriba",
            audio.path().to_str().unwrap(),
            "--model",
            "colossal",
        ]);
        let result = run_transcribe_command(Config::default(), &cli);
        assert!(matches!(
            result,
            Err(ScribaError::ConfigInvalidValue { .. })
        ));
    }

    #[test]
    fn missing_model_file_is_reported() {
        let audio = tempfile::NamedTempFile::with_suffix(".wav").unwrap();
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            stt: crate::config::SttConfig {
                model_dir: Some(dir.path().to_path_buf()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = parse(&["scriba", audio.path().to_str().unwrap(), "--quiet"]);
        let result = run_transcribe_command(config, &cli);
        assert!(matches!(
            result,
            Err(ScribaError::RecognitionModelNotFound { .. })
        ));
    }
}
