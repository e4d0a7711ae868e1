//! Quote-aware case folding and capitalization (stages 4, 5 and 7).
//!
//! Lowercasing uses the full Unicode lowercase mapping. Capitalization only
//! applies one-to-one uppercase mappings: a character whose uppercase form
//! is several characters long (such as `ß`) is left as it is, so stages 5
//! and 7 never change the number of characters.

use crate::quotes::{QuoteState, QUOTE};

/// Lowercases everything outside quoted spans (stage 4).
///
/// Quote characters are copied unchanged and flip the state. Inside a span
/// characters keep their original case.
///
/// # Examples
///
/// ```rust
/// use normalize::lowercase_outside_quotes;
///
/// assert_eq!(
///     lowercase_outside_quotes("SHE Said \"Keep THIS\" OK"),
///     "she said \"Keep THIS\" ok"
/// );
/// ```
pub fn lowercase_outside_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quotes = QuoteState::default();

    for ch in text.chars() {
        if ch == QUOTE {
            quotes.toggle();
            out.push(ch);
        } else if quotes.inside() {
            out.push(ch);
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}

/// Uppercases the first letter after every `.` that is outside quotes
/// (stage 5).
///
/// Only spaces are skipped between the dot and the letter. If anything else
/// comes first (a digit, a quote, more punctuation) that dot changes nothing.
pub fn capitalize_after_dot(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut quotes = QuoteState::default();

    for i in 0..chars.len() {
        let ch = chars[i];
        if ch == QUOTE {
            quotes.toggle();
        }
        if ch != '.' || quotes.inside() {
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && chars[j] == ' ' {
            j += 1;
        }
        if let Some(next) = chars.get_mut(j) {
            if next.is_alphabetic() {
                *next = to_upper_single(*next);
            }
        }
    }

    chars.into_iter().collect()
}

/// Uppercases the first alphabetic character of the text (stage 7).
///
/// Digits, punctuation, quotes and spaces before it are skipped. Text without
/// any letter is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use normalize::capitalize_first_letter;
///
/// assert_eq!(capitalize_first_letter("\"42 apples\""), "\"42 Apples\"");
/// assert_eq!(capitalize_first_letter("123 ..."), "123 ...");
/// ```
pub fn capitalize_first_letter(text: &str) -> String {
    let Some((idx, first)) = text.char_indices().find(|(_, ch)| ch.is_alphabetic()) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..idx]);
    out.push(to_upper_single(first));
    out.push_str(&text[idx + first.len_utf8()..]);
    out
}

/// Uppercase mapping restricted to single characters.
#[inline]
pub(crate) fn to_upper_single(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => ch,
    }
}
