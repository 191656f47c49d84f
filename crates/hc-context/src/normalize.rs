//! Input canonicalization shared by every pipeline stage.

use std::sync::LazyLock;

use regex::Regex;

static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lower-case, replace punctuation with spaces, collapse whitespace, trim.
///
/// Word characters are Unicode-aware, so Vietnamese letters such as "ộ" or
/// "đ" survive untouched.
pub fn normalize(input: &str) -> String {
    let lower = input.to_lowercase();
    let spaced = RE_NON_WORD.replace_all(&lower, " ");
    RE_SPACES.replace_all(&spaced, " ").trim().to_string()
}
