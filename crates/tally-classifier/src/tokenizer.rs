//! Description text → normalized feature tokens.
//!
//! Lower-cases, splits on every character that is neither alphabetic nor
//! numeric, and drops empty pieces. The same function runs at training and
//! prediction time, so spellings always line up.

use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of letters and digits (Unicode-aware).
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Alphabetic}\p{N}]+").unwrap());

/// Split `text` into lower-cased alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True when `text` produces no tokens at all.
pub fn is_blank(text: &str) -> bool {
    TOKEN_RE.find(text).is_none()
}
