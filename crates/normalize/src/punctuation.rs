//! Punctuation spacing (stage 3) and the trailing dot rule (stage 8).
//!
//! Stage 3 is three ordered passes over the text. Spaces in front of `,`,
//! `.` and `:` are removed first, then exactly one space is inserted after
//! `,`/`:` and after `.` whenever the next character is not whitespace.
//! Running the removal first is what guarantees one space rather than zero
//! or two.
//!
//! The insertion passes consume the mark together with the character that
//! follows it, so in `",,x"` only the first comma gets a space: the second
//! comma was already consumed as the "following character" of the first.
//! None of the passes know about quotes; stage 6 repairs quoted spans.

/// Marks that may not be preceded by whitespace.
const CLOSING_MARKS: [char; 3] = [',', '.', ':'];

/// Applies the three stage 3 passes in order.
///
/// # Examples
///
/// ```rust
/// use normalize::space_punctuation;
///
/// assert_eq!(space_punctuation("a ,b :c .d"), "a, b: c. d");
/// assert_eq!(space_punctuation("end ."), "end.");
/// ```
pub fn space_punctuation(text: &str) -> String {
    let tight = remove_space_before_marks(text);
    let spaced = space_after(&tight, |ch| ch == ',' || ch == ':');
    space_after(&spaced, |ch| ch == '.')
}

/// Deletes every whitespace run that sits directly in front of `,`, `.` or `:`.
pub fn remove_space_before_marks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if CLOSING_MARKS.contains(&ch) {
            let kept = out.trim_end_matches(is_pattern_space).len();
            out.truncate(kept);
        }
        out.push(ch);
    }
    out
}

/// Inserts one space after each mark matched by `is_mark` when the next
/// character is not whitespace. The mark and its follower are consumed as a
/// pair.
fn space_after(text: &str, is_mark: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        out.push(ch);
        if !is_mark(ch) {
            continue;
        }
        if let Some(next) = chars.next_if(|&next| !is_pattern_space(next)) {
            out.push(' ');
            out.push(next);
        }
    }
    out
}

/// Strips trailing whitespace and appends `.` unless the text already ends
/// with one (stage 8).
///
/// # Examples
///
/// ```rust
/// use normalize::ensure_trailing_dot;
///
/// assert_eq!(ensure_trailing_dot("done  "), "done.");
/// assert_eq!(ensure_trailing_dot("done."), "done.");
/// assert_eq!(ensure_trailing_dot("really?"), "really?.");
/// ```
pub fn ensure_trailing_dot(text: &str) -> String {
    let trimmed = text.trim_end();
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push_str(trimmed);
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}

/// The whitespace class used by the spacing passes: ASCII space, tab, line
/// feed, vertical tab, form feed and carriage return.
#[inline]
pub(crate) fn is_pattern_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}
