//! # Text Normalizer
//! Deterministic rewriting of obfuscated spellings plus noise removal, applied
//! before lexicon matching and classification.
//!
//! Order matters: de-obfuscation runs on the original-case text first, then the
//! cleaning pass lowercases and strips noise. Both passes are total (fixed
//! literal patterns, nothing user-supplied is interpreted as a regex) and
//! `normalize` is idempotent on its own output.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_STARRED_F: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)f\*+k").expect("starred-f pattern"));
static RE_STARRED_AHOLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)a\*+hole").expect("starred-ahole pattern"));
static RE_STARRED_MOFO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)motherf\*+ker").expect("starred-mofo pattern"));

static RE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\.\S+").expect("url pattern"));
static RE_MENTION_OR_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\w+|#\w+").expect("mention/hashtag pattern"));
static RE_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s*]").expect("noise pattern"));
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Rewrite known censored spellings to their canonical forms, case-insensitively.
///
/// Applied to the original-case text, before any cleaning. The `f*k` rule runs
/// first, so `motherf**ker` collapses via the `f**k` substring into
/// `motherfucker` before the dedicated pattern would ever see it; the dedicated
/// rule stays for inputs that star other letters.
pub fn normalize_censored(text: &str) -> String {
    let t = RE_STARRED_F.replace_all(text, "fuck");
    let t = RE_STARRED_AHOLE.replace_all(&t, "asshole");
    RE_STARRED_MOFO.replace_all(&t, "motherf**ker").into_owned()
}

/// Lowercase and strip noise: URLs, @mentions, #hashtags, and every character
/// outside `[a-z0-9\s*]`; collapse runs of whitespace and trim.
pub fn clean_text(text: &str) -> String {
    let t = text.to_lowercase();
    let t = RE_URL.replace_all(&t, " ");
    let t = RE_MENTION_OR_TAG.replace_all(&t, " ");
    let t = RE_NOISE.replace_all(&t, " ");
    let t = RE_WHITESPACE.replace_all(&t, " ");
    t.trim().to_string()
}

/// Full normalization pipeline: de-obfuscation followed by cleaning.
pub fn normalize(raw: &str) -> String {
    clean_text(&normalize_censored(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_starred_spellings_case_insensitively() {
        assert_eq!(normalize_censored("F**K this"), "fuck this");
        assert_eq!(normalize_censored("what an a***hole"), "what an asshole");
        // The f-rule wins inside the longer word.
        assert_eq!(normalize_censored("motherf**ker"), "motherfucker");
    }

    #[test]
    fn strips_urls_mentions_and_hashtags() {
        let out = normalize("check https://example.com/x @bob #rage now");
        assert_eq!(out, "check now");
    }

    #[test]
    fn removes_punctuation_but_keeps_digits_and_stars() {
        assert_eq!(normalize("He's 2 good, really!"), "he s 2 good really");
        assert_eq!(normalize("keep sh*t starred"), "keep sh*t starred");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  a \t b \n  c  "), "a b c");
    }

    #[test]
    fn empty_and_all_noise_inputs_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
        assert_eq!(normalize("!!!???;;;"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [
            "You are STUPID and a f**king idiot!!!",
            "visit www.spam.example @someone #tag",
            "already clean text 123",
            "",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
