//! Command-line interface for scriba
//!
//! Provides argument parsing using clap derive macros.

use crate::device::Device;
use clap::Parser;
use std::path::PathBuf;

/// Japanese listening-comprehension audio transcriber
#[derive(Parser, Debug)]
#[command(
    name = "scriba",
    version,
    about = "Transcribe Japanese audio into subtitle, text, and JSON files"
)]
pub struct Cli {
    /// Audio file to transcribe (16 kHz mono WAV)
    #[arg(value_name = "AUDIO")]
    pub audio_path: PathBuf,

    /// Directory for the generated .srt/.txt/.json files
    /// (default: the configured output dir, else ./output)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Whisper model tier (tiny, base, small, medium, large-v3)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Execution device (cpu, cuda). Defaults to the best available
    #[arg(long, value_name = "DEVICE")]
    pub device: Option<Device>,

    /// Skip the timestamp realignment stage
    #[arg(long)]
    pub no_align: bool,

    /// Skip speaker attribution
    #[arg(long)]
    pub no_speakers: bool,

    /// Suppress progress output (quiet mode)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (-v: stage progress, -vv: full diagnostics)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_audio_only() {
        let cli = Cli::try_parse_from(["scriba", "lesson01.wav"]).unwrap();
        assert_eq!(cli.audio_path, PathBuf::from("lesson01.wav"));
        assert!(cli.output.is_none());
        assert!(cli.model.is_none());
        assert!(cli.config.is_none());
        assert!(cli.device.is_none());
        assert!(!cli.no_align);
        assert!(!cli.no_speakers);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_audio_path_is_required() {
        let result = Cli::try_parse_from(["scriba"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_output_short_flag() {
        let cli = Cli::try_parse_from(["scriba", "lesson01.wav", "-o", "/tmp/out"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_parse_output_long_flag() {
        let cli =
            Cli::try_parse_from(["scriba", "lesson01.wav", "--output", "results"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("results")));
    }

    #[test]
    fn test_parse_model() {
        let cli = Cli::try_parse_from(["scriba", "lesson01.wav", "--model", "large-v3"]).unwrap();
        assert_eq!(cli.model.as_deref(), Some("large-v3"));
    }

    #[test]
    fn test_parse_device_cpu() {
        let cli = Cli::try_parse_from(["scriba", "lesson01.wav", "--device", "cpu"]).unwrap();
        assert_eq!(cli.device, Some(Device::Cpu));
    }

    #[test]
    fn test_parse_device_cuda() {
        let cli = Cli::try_parse_from(["scriba", "lesson01.wav", "--device", "cuda"]).unwrap();
        assert_eq!(cli.device, Some(Device::Cuda));
    }

    #[test]
    fn test_parse_device_invalid() {
        let result = Cli::try_parse_from(["scriba", "lesson01.wav", "--device", "mps"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_stage_switches() {
        let cli =
            Cli::try_parse_from(["scriba", "lesson01.wav", "--no-align", "--no-speakers"])
                .unwrap();
        assert!(cli.no_align);
        assert!(cli.no_speakers);
    }

    #[test]
    fn test_parse_config_path() {
        let cli =
            Cli::try_parse_from(["scriba", "lesson01.wav", "--config", "/tmp/scriba.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/scriba.toml")));
    }

    #[test]
    fn test_parse_verbose_repeated() {
        let cli = Cli::try_parse_from(["scriba", "lesson01.wav", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_quiet() {
        let cli = Cli::try_parse_from(["scriba", "-q", "lesson01.wav"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["scriba", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(["scriba", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_non_ascii_audio_path() {
        let cli = Cli::try_parse_from(["scriba", "聴解問題.wav"]).unwrap();
        assert_eq!(cli.audio_path, PathBuf::from("聴解問題.wav"));
    }
}
