use std::sync::LazyLock;

use regex::Regex;

/// One lowercase, punctuation-free clause of the source text.
pub type SentenceUnit = String;

static OUTSIDE_ALPHABET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9.]+").expect("static pattern compiles"));

/// Collapses every run of characters outside `[A-Za-z0-9.]` into one space,
/// lowercases, and splits on `.`.
///
/// Empty units from consecutive or trailing periods are kept; the stopword
/// filter drops empty tokens later. The result always has one more unit than
/// the input has periods.
pub fn normalize(text: &str) -> Vec<SentenceUnit> {
    let cleaned = OUTSIDE_ALPHABET.replace_all(text, " ").to_ascii_lowercase();
    cleaned.split('.').map(String::from).collect()
}
