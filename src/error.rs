//! Error types produced while running a normalization job.
//!
//! The normalizer itself cannot fail; every variant here comes from the
//! collaborators around it (file store, configuration) or from a defect
//! caught while the core was running.
//!
//! | Error | Raised by | Meaning |
//! |-------|-----------|---------|
//! | [`Read`](PipelineError::Read) | store | missing, not a file, permission, I/O, bad UTF-8 |
//! | [`EmptyInput`](PipelineError::EmptyInput) | store | file exists but is blank after trimming |
//! | [`Normalization`](PipelineError::Normalization) | controller | the core panicked |
//! | [`Write`](PipelineError::Write) | store | directory creation, permission, I/O |
//! | [`Config`](PipelineError::Config) | config | configuration could not be loaded |

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by [`Controller::run`](crate::Controller::run) and the
/// [`TextStore`](crate::TextStore) implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("cannot read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },
    #[error("file is empty: {}", path.display())]
    EmptyInput { path: PathBuf },
    #[error("cannot write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
    #[error("normalization failed: {0}")]
    Normalization(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PipelineError {
    pub(crate) fn read(path: &Path, reason: impl Into<String>) -> Self {
        PipelineError::Read {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn write(path: &Path, reason: impl Into<String>) -> Self {
        PipelineError::Write {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// `true` for the blank-input case, which is reported as a warning rather
    /// than a failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, PipelineError::EmptyInput { .. })
    }
}

impl From<config::ConfigError> for PipelineError {
    fn from(value: config::ConfigError) -> Self {
        PipelineError::Config(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_path_and_reason() {
        let err = PipelineError::read(Path::new("missing.txt"), "file not found");
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn empty_input_is_flagged() {
        let err = PipelineError::EmptyInput {
            path: PathBuf::from("blank.txt"),
        };
        assert!(err.is_empty_input());
        assert_eq!(err.to_string(), "file is empty: blank.txt");
        assert!(!PipelineError::Normalization("boom".into()).is_empty_input());
    }

    #[test]
    fn write_error_display() {
        let err = PipelineError::write(Path::new("out/x.txt"), "permission denied");
        assert_eq!(err.to_string(), "cannot write out/x.txt: permission denied");
    }
}
