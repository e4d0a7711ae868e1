//! Quote tracking and quote trimming (stage 6).
//!
//! Every quote-aware stage owns a fresh [`QuoteState`] and derives the
//! inside/outside flag from scratch. The flag flips on each literal `"`; there
//! is no balancing, so an odd final quote leaves the remainder of the text
//! "inside".

/// The literal quote character that toggles quote state.
pub const QUOTE: char = '"';

/// Inside/outside flag for one left-to-right scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuoteState {
    inside: bool,
}

impl QuoteState {
    /// Flips the flag for a quote character and returns `true` when the quote
    /// just opened a span.
    #[inline]
    pub(crate) fn toggle(&mut self) -> bool {
        self.inside = !self.inside;
        self.inside
    }

    #[inline]
    pub(crate) fn inside(&self) -> bool {
        self.inside
    }
}

/// Removes the spaces just inside each quoted span.
///
/// After an opening quote every following space is dropped; before a closing
/// quote every preceding space is dropped. Spaces outside the quotes are left
/// alone. Only `' '` is trimmed.
///
/// # Examples
///
/// ```rust
/// use normalize::trim_inside_quotes;
///
/// assert_eq!(
///     trim_inside_quotes("the \" second row \" here"),
///     "the \"second row\" here"
/// );
/// // An unbalanced quote never closes, so only its leading side is trimmed.
/// assert_eq!(trim_inside_quotes("say \"  open end "), "say \"open end ");
/// ```
pub fn trim_inside_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quotes = QuoteState::default();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != QUOTE {
            out.push(ch);
            continue;
        }

        if quotes.toggle() {
            out.push(ch);
            while chars.next_if_eq(&' ').is_some() {}
        } else {
            let kept = out.trim_end_matches(' ').len();
            out.truncate(kept);
            out.push(ch);
        }
    }

    out
}
