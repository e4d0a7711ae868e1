//! `tracing` subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::error::PipelineError;

/// Installs the global subscriber, writing to stderr so it never mixes with
/// the status lines on stdout.
///
/// `RUST_LOG` wins over `level` when it is set.
pub fn init_logging(level: &str, json: bool) -> Result<(), PipelineError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|err| PipelineError::Config(format!("invalid log level {level:?}: {err}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| PipelineError::Config(format!("cannot install logger: {err}")))
}
