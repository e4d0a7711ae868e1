//! Line merging and horizontal whitespace collapsing (stages 1 and 2).
//!
//! These two stages turn arbitrary multi-line input into one logical line
//! with single spaces between tokens. Neither stage looks at quotes or
//! punctuation; that happens later in the pipeline.
//!
//! # Examples
//!
//! ```rust
//! use normalize::{collapse_horizontal_whitespace, merge_lines};
//!
//! let merged = merge_lines("  first line \r\n\r\n\tsecond   line\n");
//! assert_eq!(merged, "first line second   line");
//!
//! let collapsed = collapse_horizontal_whitespace(&merged);
//! assert_eq!(collapsed, "first line second line");
//! ```

/// Joins the non-blank lines of `text` with single spaces.
///
/// Lines are split on `\n` (a preceding `\r` is trimmed with the rest of the
/// line's edge whitespace). Each line is trimmed and lines that are empty
/// after trimming are dropped. Surviving lines keep their original order.
///
/// # Examples
///
/// ```rust
/// use normalize::merge_lines;
///
/// assert_eq!(merge_lines("line one\n\nline two"), "line one line two");
/// assert_eq!(merge_lines("\n \n\t\n"), "");
/// ```
pub fn merge_lines(text: &str) -> String {
    let mut merged = String::with_capacity(text.len());
    for line in text.split('\n').map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(line);
    }
    merged
}

/// Replaces every run of spaces and tabs with one space and trims the result.
///
/// Only `' '` and `'\t'` count as horizontal whitespace here. Other
/// characters (including non-breaking spaces) are left in place.
///
/// # Examples
///
/// ```rust
/// use normalize::collapse_horizontal_whitespace;
///
/// assert_eq!(collapse_horizontal_whitespace(" a \t\t b  "), "a b");
/// assert_eq!(collapse_horizontal_whitespace("a\u{00A0}\u{00A0}b"), "a\u{00A0}\u{00A0}b");
/// ```
pub fn collapse_horizontal_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if is_horizontal_space(ch) {
            pending_space = true;
            continue;
        }
        if pending_space {
            collapsed.push(' ');
            pending_space = false;
        }
        collapsed.push(ch);
    }

    // A leading run was pushed as a single space before the first token.
    collapsed.trim().to_string()
}

#[inline]
fn is_horizontal_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_drops_blank_and_whitespace_only_lines() {
        let input = "alpha\n   \n\t\nbeta\n\ngamma";
        assert_eq!(merge_lines(input), "alpha beta gamma");
    }

    #[test]
    fn merge_handles_crlf_line_endings() {
        assert_eq!(merge_lines("one\r\ntwo\r\n\r\nthree\r\n"), "one two three");
    }

    #[test]
    fn merge_keeps_interior_spacing_of_each_line() {
        assert_eq!(merge_lines("  a   b  \n c "), "a   b c");
    }

    #[test]
    fn merge_of_single_line_is_trimmed_copy() {
        assert_eq!(merge_lines("   only line   "), "only line");
    }

    #[test]
    fn collapse_mixed_tabs_and_spaces() {
        assert_eq!(collapse_horizontal_whitespace("a \t \t b\tc"), "a b c");
    }

    #[test]
    fn collapse_trims_edges() {
        assert_eq!(collapse_horizontal_whitespace("\t  word  \t"), "word");
    }

    #[test]
    fn collapse_empty_and_blank() {
        assert_eq!(collapse_horizontal_whitespace(""), "");
        assert_eq!(collapse_horizontal_whitespace(" \t "), "");
    }

    #[test]
    fn collapse_is_noop_on_normalized_text() {
        let text = "already single spaced";
        assert_eq!(collapse_horizontal_whitespace(text), text);
    }
}
