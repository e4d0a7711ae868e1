//! Read/write collaborators consumed by the controller.
//!
//! [`TextStore`] is the seam between the pure normalizer and wherever the
//! text actually lives. [`FsStore`] is the local filesystem implementation
//! the binary uses; tests plug in an in-memory store instead.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::PipelineError;

/// Source and destination of the text being normalized.
pub trait TextStore {
    /// Loads the text at `path`.
    ///
    /// Implementations return [`PipelineError::Read`] when the text cannot be
    /// loaded and [`PipelineError::EmptyInput`] when it is blank.
    fn read(&self, path: &Path) -> Result<String, PipelineError>;

    /// Stores `text` at `path`, replacing anything already there.
    fn write(&self, path: &Path, text: &str) -> Result<(), PipelineError>;
}

/// UTF-8 text files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl TextStore for FsStore {
    /// Reads the whole file, unifies line endings to `\n` and trims it.
    fn read(&self, path: &Path) -> Result<String, PipelineError> {
        let meta = fs::metadata(path).map_err(|err| PipelineError::read(path, describe(&err)))?;
        if !meta.is_file() {
            return Err(PipelineError::read(path, "path is not a regular file"));
        }

        let bytes = fs::read(path).map_err(|err| PipelineError::read(path, describe(&err)))?;
        let text = String::from_utf8(bytes)
            .map_err(|err| PipelineError::read(path, format!("invalid UTF-8: {err}")))?;

        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::EmptyInput {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), bytes = trimmed.len(), "input read");
        Ok(trimmed.to_string())
    }

    /// Creates missing parent directories, refuses read-only targets and
    /// writes the text as UTF-8.
    fn write(&self, path: &Path, text: &str) -> Result<(), PipelineError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|err| {
                    PipelineError::write(
                        path,
                        format!("cannot create directory {}: {}", parent.display(), describe(&err)),
                    )
                })?;
                tracing::debug!(dir = %parent.display(), "created output directory");
            }
        }

        if let Ok(meta) = fs::metadata(path) {
            if meta.permissions().readonly() {
                return Err(PipelineError::write(path, "permission denied"));
            }
        }

        fs::write(path, text).map_err(|err| PipelineError::write(path, describe(&err)))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "output written");
        Ok(())
    }
}

fn describe(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "file not found".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        _ => err.to_string(),
    }
}
