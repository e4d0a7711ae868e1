//! Runtime configuration for the `textnorm` binary.
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults (`input.txt`, `output.txt`, log level `warn`)
//! 2. an optional `textnorm.toml` in the working directory
//! 3. `TEXTNORM__*` environment variables (e.g. `TEXTNORM__LOG_LEVEL=debug`)
//! 4. command-line arguments, applied by the binary via [`AppConfig::with_paths`]
//!
//! ## Example file
//!
//! ```toml
//! input_path = "notes/raw.txt"
//! output_path = "notes/clean.txt"
//! log_level = "info"
//! log_json = false
//! echo_text = true
//! ```
//!
//! The normalization rules themselves are fixed and have no settings.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Base name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "textnorm";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TEXTNORM";

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// File to read the raw text from.
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// File to write the normalized text to.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// `tracing` filter directive, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of the human format.
    #[serde(default)]
    pub log_json: bool,

    /// Print the original and normalized text along with status lines.
    #[serde(default = "default_true")]
    pub echo_text: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            log_level: default_log_level(),
            log_json: false,
            echo_text: default_true(),
        }
    }
}

impl AppConfig {
    /// Loads `textnorm.toml` (if present) and environment overrides.
    pub fn load() -> Result<Self, PipelineError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
        Self::finish(builder.build()?)
    }

    /// Loads an explicit configuration file (which must exist) and environment
    /// overrides.
    pub fn load_from(path: &Path) -> Result<Self, PipelineError> {
        let builder = Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
        Self::finish(builder.build()?)
    }

    /// Parses TOML text with no environment layer.
    pub fn from_toml(toml: &str) -> Result<Self, PipelineError> {
        let built = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Self::finish(built)
    }

    /// Applies positional paths from the command line. `None` keeps the
    /// configured value.
    pub fn with_paths(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        self
    }

    fn finish(built: Config) -> Result<Self, PipelineError> {
        let cfg: AppConfig = built.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), PipelineError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(PipelineError::Config("input_path must not be empty".into()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(PipelineError::Config("output_path must not be empty".into()));
        }
        if self.log_level.trim().is_empty() {
            return Err(PipelineError::Config("log_level must not be empty".into()));
        }
        Ok(())
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}
