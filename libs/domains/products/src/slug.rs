use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// URL-safe form of `name`: transliterated to ASCII, then lowercase words
/// joined by single hyphens. Empty when `name` has no letters or digits.
pub fn slugify(name: &str) -> String {
    let lowered = deunicode(name.trim()).to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
