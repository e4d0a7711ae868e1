//! Paragraph normalizer.
//!
//! This crate turns free-form, possibly multi-line text into one well-formed
//! paragraph. It is the pure core of `textnorm`; file handling and status
//! output live in the root crate.
//!
//! ## What we do
//!
//! Eight stages, always in this order, each consuming the previous output:
//!
//! 1. Merge lines: drop blank lines, join the rest with single spaces
//! 2. Collapse runs of spaces and tabs into one space
//! 3. Punctuation spacing: no space before `,` `.` `:`, one space after
//! 4. Lowercase everything outside `"..."` spans
//! 5. Uppercase the first letter after each `.` outside quotes
//! 6. Trim the spaces just inside each quoted span
//! 7. Uppercase the first letter of the text
//! 8. Make sure the text ends with `.`
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale. [`normalize`] is total: it returns a string
//! for every input, and an empty string for blank input.
//!
//! ## Quotes
//!
//! Stages 4, 5 and 6 each track quotes on their own by flipping a flag on
//! every `"`. Unbalanced quotes are not repaired: whatever follows the last
//! odd quote counts as quoted.
//!
//! ```rust
//! use normalize::normalize;
//!
//! assert_eq!(
//!     normalize("she said \" hello there \" to him"),
//!     "She said \"hello there\" to him."
//! );
//! ```

mod casing;
mod document;
mod pipeline;
mod punctuation;
mod quotes;
mod whitespace;

pub use crate::casing::{capitalize_after_dot, capitalize_first_letter, lowercase_outside_quotes};
pub use crate::document::NormalizedDocument;
pub use crate::pipeline::{
    normalize, normalize_batch, normalize_document, normalize_traced, Stage, StageSnapshot,
};
pub use crate::punctuation::{ensure_trailing_dot, remove_space_before_marks, space_punctuation};
pub use crate::quotes::{trim_inside_quotes, QUOTE};
pub use crate::whitespace::{collapse_horizontal_whitespace, merge_lines};
