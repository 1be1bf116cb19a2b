use anyhow::Result;
use clap::Parser;
use scriba::app::run_transcribe_command;
use scriba::cli::Cli;
use scriba::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.quiet, cli.verbose);

    let config = load_config(&cli)?;
    run_transcribe_command(config, &cli)?;

    Ok(())
}

/// Map -q/-v flags onto the log filter. RUST_LOG still wins when set.
fn init_logging(quiet: bool, verbose: u8) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/scriba/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else if let Some(default_path) = Config::default_path() {
        Config::load_or_default(&default_path)?
    } else {
        Config::default()
    };

    Ok(config.with_env_overrides())
}
