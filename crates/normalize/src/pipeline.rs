use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::casing::{capitalize_after_dot, capitalize_first_letter, lowercase_outside_quotes};
use crate::document::NormalizedDocument;
use crate::punctuation::{ensure_trailing_dot, space_punctuation};
use crate::quotes::trim_inside_quotes;
use crate::whitespace::{collapse_horizontal_whitespace, merge_lines};

/// One step of the normalization pipeline, listed in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    MergeLines,
    CollapseWhitespace,
    PunctuationSpacing,
    LowercaseOutsideQuotes,
    CapitalizeAfterDot,
    TrimInsideQuotes,
    CapitalizeFirstLetter,
    TrailingDot,
}

impl Stage {
    /// All stages in the order [`normalize`] runs them.
    pub const ALL: [Stage; 8] = [
        Stage::MergeLines,
        Stage::CollapseWhitespace,
        Stage::PunctuationSpacing,
        Stage::LowercaseOutsideQuotes,
        Stage::CapitalizeAfterDot,
        Stage::TrimInsideQuotes,
        Stage::CapitalizeFirstLetter,
        Stage::TrailingDot,
    ];

    /// Stable identifier used in logs and serialized traces.
    pub fn name(self) -> &'static str {
        match self {
            Stage::MergeLines => "merge_lines",
            Stage::CollapseWhitespace => "collapse_whitespace",
            Stage::PunctuationSpacing => "punctuation_spacing",
            Stage::LowercaseOutsideQuotes => "lowercase_outside_quotes",
            Stage::CapitalizeAfterDot => "capitalize_after_dot",
            Stage::TrimInsideQuotes => "trim_inside_quotes",
            Stage::CapitalizeFirstLetter => "capitalize_first_letter",
            Stage::TrailingDot => "trailing_dot",
        }
    }

    /// Runs this stage alone over `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Stage::MergeLines => merge_lines(text),
            Stage::CollapseWhitespace => collapse_horizontal_whitespace(text),
            Stage::PunctuationSpacing => space_punctuation(text),
            Stage::LowercaseOutsideQuotes => lowercase_outside_quotes(text),
            Stage::CapitalizeAfterDot => capitalize_after_dot(text),
            Stage::TrimInsideQuotes => trim_inside_quotes(text),
            Stage::CapitalizeFirstLetter => capitalize_first_letter(text),
            Stage::TrailingDot => ensure_trailing_dot(text),
        }
    }
}

/// Text as it looked right after a stage ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub stage: Stage,
    pub text: String,
}

/// Main entry point. Normalizes `raw` into a single formatted paragraph.
///
/// Empty or whitespace-only input returns an empty string without running
/// any stage. Every other input goes through all eight stages in order.
///
/// # Examples
///
/// ```rust
/// use normalize::normalize;
///
/// assert_eq!(normalize("hello   world"), "Hello world.");
/// assert_eq!(
///     normalize("first sentence.second sentence"),
///     "First sentence. Second sentence."
/// );
/// assert_eq!(normalize(" \n\t "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut text = raw.to_string();
    for stage in Stage::ALL {
        text = stage.apply(&text);
        tracing::trace!(stage = stage.name(), len = text.len(), "stage applied");
    }
    text
}

/// Same result as [`normalize`], plus the intermediate text after each stage.
///
/// Blank input yields an empty string and no snapshots.
pub fn normalize_traced(raw: &str) -> (String, Vec<StageSnapshot>) {
    if raw.trim().is_empty() {
        return (String::new(), Vec::new());
    }

    let mut snapshots: Vec<StageSnapshot> = Vec::with_capacity(Stage::ALL.len());
    let mut text = raw.to_string();
    for stage in Stage::ALL {
        text = stage.apply(&text);
        tracing::debug!(stage = stage.name(), text = %text, "stage output");
        snapshots.push(StageSnapshot {
            stage,
            text: text.clone(),
        });
    }
    (text, snapshots)
}

/// Normalizes `raw` and keeps the input next to the result.
pub fn normalize_document(raw: impl Into<String>) -> NormalizedDocument {
    let raw_text: String = raw.into();
    let normalized_text = normalize(&raw_text);
    NormalizedDocument::new(raw_text, normalized_text)
}

/// Normalizes independent documents, on the rayon pool when `parallel` is set.
///
/// Results line up with `texts`.
pub fn normalize_batch<S>(texts: &[S], parallel: bool) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    if parallel {
        texts.par_iter().map(|t| normalize(t.as_ref())).collect()
    } else {
        texts.iter().map(|t| normalize(t.as_ref())).collect()
    }
}
