//! Text normalization for search and major matching
//!
//! All fuzzy comparison in the engine goes through one normal form:
//! case-folded, accent-stripped, punctuation collapsed to single spaces.
//! Tokenization additionally drops stopwords and derives an acronym from
//! the remaining words, so "Massachusetts Institute of Technology" yields
//! a "mit" token alongside the full words.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["the", "of", "and", "for", "at", "in", "on", "to", "a", "an", "&"]
        .into_iter()
        .collect()
});

/// Minimum word length that contributes a letter to a derived acronym
const ACRONYM_MIN_WORD_LEN: usize = 3;

/// Normalize text to the engine's canonical comparison form
///
/// Lowercases, strips combining accents (NFD), maps punctuation other than
/// `&` to spaces, and collapses runs of whitespace.
///
/// # Example
///
/// ```
/// use uniscope_core::text::normalize;
///
/// assert_eq!(normalize("  Pomona   College, CA"), "pomona college ca");
/// assert_eq!(normalize("Universit\u{e9}"), "universite");
/// ```
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.to_lowercase().nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_alphanumeric() || c == '&' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

/// Normalize and remove all spaces, for compact substring comparison
pub fn compact(s: &str) -> String {
    let mut c = normalize(s);
    c.retain(|ch| ch != ' ');
    c
}

/// Derive an acronym from the significant words of a name
///
/// Takes the first letter of every normalized word longer than two
/// characters. Returns an empty string when fewer than two words qualify.
pub fn acronym(s: &str) -> String {
    let n = normalize(s);
    let letters: String = n
        .split(' ')
        .filter(|w| w.len() >= ACRONYM_MIN_WORD_LEN)
        .flat_map(|w| w.chars().next())
        .collect();
    if letters.chars().count() >= 2 {
        letters
    } else {
        String::new()
    }
}

/// Tokenize text into deduplicated search terms plus a derived acronym
///
/// Stopwords are dropped from the token list but still contribute to word
/// positions for the acronym ("of" never becomes a letter because acronym
/// letters come only from words of three or more characters).
///
/// # Example
///
/// ```
/// use uniscope_core::text::tokenize;
///
/// let tokens = tokenize("Massachusetts Institute of Technology");
/// assert!(tokens.contains(&"massachusetts".to_string()));
/// assert!(tokens.contains(&"mit".to_string()));
/// assert!(!tokens.contains(&"of".to_string()));
/// ```
pub fn tokenize(s: &str) -> Vec<String> {
    let n = normalize(s);
    let words: Vec<&str> = n.split(' ').filter(|w| !w.is_empty()).collect();

    let mut seen = HashSet::new();
    let mut tokens: Vec<String> = words
        .iter()
        .filter(|w| !STOPWORDS.contains(**w))
        .map(|w| (*w).to_string())
        .filter(|t| seen.insert(t.clone()))
        .collect();

    let acro: String = words
        .iter()
        .filter(|w| w.len() >= ACRONYM_MIN_WORD_LEN)
        .flat_map(|w| w.chars().next())
        .collect();
    if acro.chars().count() >= 2 && seen.insert(acro.clone()) {
        tokens.push(acro);
    }

    tokens
}
