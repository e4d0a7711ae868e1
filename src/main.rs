use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use textnorm::logging::init_logging;
use textnorm::{AppConfig, ConsoleSink, Controller, FsStore};

/// Normalize a text file into one well-formatted paragraph.
#[derive(Debug, Parser)]
#[command(name = "textnorm", version)]
struct Cli {
    /// Input file [default: input.txt]
    input: Option<PathBuf>,

    /// Output file, parent directories are created [default: output.txt]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ./textnorm.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `textnorm=info`
    #[arg(long)]
    log_level: Option<String>,

    /// Do not echo the original and normalized text
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    }
    .with_paths(cli.input, cli.output);
    if let Some(level) = cli.log_level {
        cfg.log_level = level;
    }
    if cli.quiet {
        cfg.echo_text = false;
    }

    init_logging(&cfg.log_level, cfg.log_json)?;
    tracing::debug!(?cfg, "configuration resolved");

    let mut controller = Controller::new(FsStore, ConsoleSink::stdio(cfg.echo_text));
    match controller.run(&cfg.input_path, &cfg.output_path) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
