//! Structural cleanup — line breaks, digits, punctuation, whitespace.
//!
//! These run unconditionally (except [`strip_punctuation`] and
//! [`lowercase_tokens`], which sit behind config flags) and carry the
//! corpus-specific quirks of the cleanup: the literal `\n` artifact left
//! by upstream serialization, and the `". com"` fracture that markup
//! stripping can introduce into domain names.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());
static RE_NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static RE_WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Replace newline and tab artifacts with single spaces.
///
/// Handles the two-character literal `\n` before real newlines, then
/// tabs and stray backslashes, and finally repairs `". com"` back to
/// `".com"`. The repair is a narrow, documented quirk for domain names
/// fractured by earlier passes; do not widen it.
pub fn normalize_breaks(text: &str) -> String {
    text.replace("\\n", " ")
        .replace('\n', " ")
        .replace('\t', " ")
        .replace('\\', " ")
        .replace(". com", ".com")
}

/// Delete every run of decimal digits.
pub fn strip_digit_runs(text: &str) -> String {
    RE_DIGIT_RUN.replace_all(text, "").into_owned()
}

/// Delete every character that is neither a word character nor whitespace.
pub fn strip_punctuation(text: &str) -> String {
    RE_NON_WORD.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs to single spaces, then pad `?` and `)` so
/// they cannot fuse with a neighboring token.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE_RUN
        .replace_all(text, " ")
        .replace('?', " ? ")
        .replace(')', ") ")
}

/// Lowercase each whitespace-delimited token, re-joining with single
/// spaces.
pub fn lowercase_tokens(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
