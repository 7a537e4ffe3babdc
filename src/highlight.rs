//! HTML highlighting of matched abusive words for the demo page: each matched
//! word is wrapped in a `<span class="abusive-word">` case-insensitively.

use regex::Regex;

/// Wrap every occurrence of the matched words in `text` with a highlight span.
///
/// Words are regex-escaped before matching, so lexicon content is never
/// interpreted as a pattern. Duplicates in `abusive_tokens` are collapsed
/// first; a second pass over an already-wrapped word would nest spans.
pub fn highlight(text: &str, abusive_tokens: &[String]) -> String {
    let mut out = text.to_string();
    for word in dedup_first_occurrence(abusive_tokens) {
        let pattern = format!("(?i){}", regex::escape(word));
        let re = Regex::new(&pattern).expect("escaped word pattern");
        let replacement = format!("<span class=\"abusive-word\">{word}</span>");
        out = re.replace_all(&out, replacement.as_str()).into_owned();
    }
    out
}

/// Distinct words in first-occurrence order.
pub fn dedup_first_occurrence(words: &[String]) -> Vec<&String> {
    let mut seen = std::collections::HashSet::new();
    words.iter().filter(|w| seen.insert(w.as_str())).collect()
}
