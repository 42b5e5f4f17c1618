//! Slug generation for file names.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid separator regex"))
}

/// Convert free text into a lowercase, hyphen-separated slug.
///
/// Accents are folded to their base letters, every run of characters outside
/// `[a-z0-9]` becomes a single `-`, and leading/trailing hyphens are trimmed.
/// Characters with no ASCII base (CJK, emoji) are treated as separators.
///
/// ```
/// use unitsplit::annotate::slugify;
///
/// assert_eq!(slugify("What is 2+2?"), "what-is-2-2");
/// assert_eq!(slugify("  Crème brûlée  "), "creme-brulee");
/// ```
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    separator_regex()
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}

/// Slugify and keep at most `max_len` characters.
///
/// The cut is not re-trimmed, so a slug may end in `-`.
pub fn slugify_truncated(text: &str, max_len: usize) -> String {
    slugify(text).chars().take(max_len).collect()
}
