//! Pure text normalization for the word-cloud corpus.
//!
//! The filter chain mirrors the preprocessing applied upstream of the
//! sentiment classifier: social-media markup is stripped and colloquial
//! tokens are rewritten to their formal equivalents so that aggregated
//! term counts are not fragmented across spelling variants.

use crate::slang::SlangMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// URLs, @-mentions and #-hashtags, each consuming to the next whitespace.
static MARKUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+|www\S+|@\S+|#\S+").unwrap());

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Normalize one raw text into a cleaned string.
///
/// Steps, in order: lowercase; strip URLs/mentions/hashtags; strip digit
/// runs; strip ASCII punctuation; substitute whitespace-delimited tokens
/// through `slang` (unknown tokens pass through); rejoin with single
/// spaces and trim.
///
/// Total over all inputs, no side effects. The output contains no digits,
/// no ASCII punctuation, and no ASCII uppercase letters.
pub fn normalize(text: &str, slang: &SlangMap) -> String {
    let lowered = text.to_lowercase();
    let no_markup = MARKUP_RE.replace_all(&lowered, "");
    let no_digits = DIGITS_RE.replace_all(&no_markup, "");
    let no_punct: String = no_digits
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    let tokens: Vec<&str> = no_punct
        .split_whitespace()
        .map(|tok| slang.get(tok).unwrap_or(tok))
        .collect();
    tokens.join(" ")
}
