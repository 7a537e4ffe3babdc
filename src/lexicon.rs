//! # Abuse Lexicon
//! Static abusive-word set, polite-rewrite suggestions, and per-word severity.
//!
//! The lexicon and suggestion table are embedded JSON assets, parsed once on
//! first use. Entries are lowercased on load; starred spellings (`f**k`,
//! `sh*t`, ...) are kept for data parity but can never match the `\w+`
//! tokenizer — de-obfuscation in [`crate::normalize`] is what makes the plain
//! forms matchable.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

static LEXICON: Lazy<HashSet<String>> = Lazy::new(|| {
    let raw = include_str!("../assets/abuse_lexicon.json");
    let words: Vec<String> = serde_json::from_str(raw).expect("valid abuse lexicon");
    words.into_iter().map(|w| w.to_lowercase()).collect()
});

static SUGGESTIONS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let raw = include_str!("../assets/suggestions.json");
    serde_json::from_str(raw).expect("valid suggestion map")
});

/// The short list of words classified as high severity; every other lexicon
/// match is `Moderate`.
static SEVERE: &[&str] = &[
    "fuck",
    "fucking",
    "fucked",
    "fucker",
    "fucks",
    "bitch",
    "bastard",
    "asshole",
    "motherf**ker",
    "madarchod",
    "behenchod",
    "bhosdike",
    "randi",
    "chutiya",
];

/// Fallback shown when a matched word has no entry in the suggestion map.
pub const FALLBACK_SUGGESTION: &str = "Use polite language.";

static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern"));

/// Per-word severity bucket (fixed list, no learned weighting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordSeverity {
    High,
    Moderate,
}

impl fmt::Display for WordSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSeverity::High => write!(f, "High"),
            WordSeverity::Moderate => write!(f, "Moderate"),
        }
    }
}

/// Membership test against the static lexicon (expects a lowercase word).
pub fn is_abusive(word: &str) -> bool {
    LEXICON.contains(word)
}

/// Extract every abusive token from `text`, in order of first appearance,
/// duplicates preserved per occurrence. Tokenization is `\b\w+\b` on the
/// lowercased text.
pub fn detect(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE_WORD
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|tok| LEXICON.contains(*tok))
        .map(str::to_string)
        .collect()
}

/// Polite-rewrite suggestion for a matched word; falls back to
/// [`FALLBACK_SUGGESTION`] for words outside the suggestion map.
pub fn suggest(word: &str) -> &'static str {
    SUGGESTIONS
        .get(word)
        .map(String::as_str)
        .unwrap_or(FALLBACK_SUGGESTION)
}

/// Two-tier severity for a matched word.
pub fn word_severity(word: &str) -> WordSeverity {
    if SEVERE.contains(&word) {
        WordSeverity::High
    } else {
        WordSeverity::Moderate
    }
}
