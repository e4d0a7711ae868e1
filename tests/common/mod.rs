#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use textnorm::{PipelineError, StatusLevel, StatusSink, TextStore};

/// In-memory [`TextStore`] with the same blank/trim rules as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<PathBuf, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn with_file(path: &str, text: &str) -> Self {
        let store = Self::default();
        store
            .files
            .borrow_mut()
            .insert(PathBuf::from(path), text.to_string());
        store
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }
}

impl TextStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<String, PipelineError> {
        match self.files.borrow().get(path) {
            None => Err(PipelineError::Read {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }),
            Some(text) if text.trim().is_empty() => Err(PipelineError::EmptyInput {
                path: path.to_path_buf(),
            }),
            Some(text) => Ok(text.trim().to_string()),
        }
    }

    fn write(&self, path: &Path, text: &str) -> Result<(), PipelineError> {
        if self.fail_writes {
            return Err(PipelineError::Write {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            });
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}

/// Everything the controller told the sink, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<String>,
}

impl RecordingSink {
    pub fn lines(&self, level: StatusLevel) -> Vec<String> {
        let prefix = level.prefix();
        self.events
            .iter()
            .filter_map(|e| e.strip_prefix(prefix).map(str::to_string))
            .collect()
    }

    pub fn contains(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }
}

impl StatusSink for RecordingSink {
    fn status(&mut self, level: StatusLevel, message: &str) {
        self.events.push(textnorm::format_status(level, message));
    }

    fn welcome(&mut self) {
        self.events.push("<welcome>".into());
    }

    fn separator(&mut self) {
        self.events.push("<separator>".into());
    }

    fn original_text(&mut self, text: &str) {
        self.events.push(format!("<original> {text}"));
    }

    fn normalized_text(&mut self, text: &str) {
        self.events.push(format!("<normalized> {text}"));
    }

    fn done(&mut self) {
        self.events.push("<done>".into());
    }
}
