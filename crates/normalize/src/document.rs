//! Before/after pair produced by [`normalize_document`](crate::normalize_document).
//!
//! # Examples
//!
//! ```rust
//! use normalize::normalize_document;
//!
//! let doc = normalize_document("line one\n\nline two");
//! assert_eq!(doc.raw_text(), "line one\n\nline two");
//! assert_eq!(doc.normalized_text(), "Line one line two.");
//! assert!(!doc.is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// Raw input and its normalized form.
///
/// Both values are fixed at construction; the struct only hands out shared
/// references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedDocument {
    raw_text: String,
    normalized_text: String,
}

impl NormalizedDocument {
    pub(crate) fn new(raw_text: String, normalized_text: String) -> Self {
        Self {
            raw_text,
            normalized_text,
        }
    }

    /// The text exactly as it was handed to the normalizer.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The single-paragraph result.
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// `true` when the input was blank and nothing was produced.
    pub fn is_empty(&self) -> bool {
        self.normalized_text.is_empty()
    }

    /// Consumes the document and returns the normalized text.
    pub fn into_normalized(self) -> String {
        self.normalized_text
    }
}
