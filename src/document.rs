use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One normalization job: where the text comes from, where it goes, and how
/// far it got.
///
/// `raw_content` is set once the input has been read and
/// `normalized_content` once the normalizer returned. Neither changes after
/// that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextDocument {
    input_path: PathBuf,
    output_path: PathBuf,
    raw_content: Option<String>,
    normalized_content: Option<String>,
}

impl TextDocument {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            raw_content: None,
            normalized_content: None,
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn raw_content(&self) -> Option<&str> {
        self.raw_content.as_deref()
    }

    pub fn normalized_content(&self) -> Option<&str> {
        self.normalized_content.as_deref()
    }

    pub(crate) fn record_raw(&mut self, raw: String) {
        debug_assert!(self.raw_content.is_none(), "raw content recorded twice");
        self.raw_content = Some(raw);
    }

    pub(crate) fn record_normalized(&mut self, normalized: String) {
        debug_assert!(
            self.normalized_content.is_none(),
            "normalized content recorded twice"
        );
        self.normalized_content = Some(normalized);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_no_content() {
        let doc = TextDocument::new("in.txt", "out/out.txt");
        assert_eq!(doc.input_path(), Path::new("in.txt"));
        assert_eq!(doc.output_path(), Path::new("out/out.txt"));
        assert!(doc.raw_content().is_none());
        assert!(doc.normalized_content().is_none());
    }

    #[test]
    fn records_progress() {
        let mut doc = TextDocument::new("in.txt", "out.txt");
        doc.record_raw("hello".into());
        doc.record_normalized("Hello.".into());
        assert_eq!(doc.raw_content(), Some("hello"));
        assert_eq!(doc.normalized_content(), Some("Hello."));
    }

    #[test]
    fn serializes_with_progress_fields() {
        let mut doc = TextDocument::new("in.txt", "out.txt");
        doc.record_raw("hello".into());

        let json = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(json["input_path"], "in.txt");
        assert_eq!(json["raw_content"], "hello");
        assert!(json["normalized_content"].is_null());

        let back: TextDocument = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, doc);
    }
}
