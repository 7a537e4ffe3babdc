//! # Report Export
//! Suggestion-table rows and their CSV encoding for the download button.
//!
//! The table de-duplicates matched words on first occurrence (the KPI counters
//! keep multiplicity; only the table collapses repeats).

use anyhow::{Context, Result};
use serde::Serialize;

use crate::highlight::dedup_first_occurrence;
use crate::lexicon::{self, WordSeverity};

pub const CSV_HEADER: [&str; 3] = ["Abusive Word", "Suggestion", "Severity"];

/// One row of the exported report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub word: String,
    pub suggestion: String,
    pub severity: WordSeverity,
}

/// Build the de-duplicated suggestion table for a set of matched tokens.
pub fn suggestion_rows(abusive_tokens: &[String]) -> Vec<ReportRow> {
    dedup_first_occurrence(abusive_tokens)
        .into_iter()
        .map(|word| ReportRow {
            word: word.clone(),
            suggestion: lexicon::suggest(word).to_string(),
            severity: lexicon::word_severity(word),
        })
        .collect()
}

/// Encode rows as a comma-separated file with a header line.
pub fn to_csv(rows: &[ReportRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .context("writing report header")?;
    for row in rows {
        writer
            .write_record([
                row.word.as_str(),
                row.suggestion.as_str(),
                &row.severity.to_string(),
            ])
            .with_context(|| format!("writing report row for {:?}", row.word))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing report writer: {e}"))?;
    String::from_utf8(bytes).context("report is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn rows_are_deduplicated_in_first_occurrence_order() {
        let rows = suggestion_rows(&toks(&["idiot", "stupid", "idiot"]));
        let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["idiot", "stupid"]);
    }

    #[test]
    fn rows_carry_suggestions_and_severity() {
        let rows = suggestion_rows(&toks(&["fucking", "moron"]));
        assert_eq!(rows[0].severity, WordSeverity::High);
        assert_eq!(rows[0].suggestion, lexicon::suggest("fucking"));
        assert_eq!(rows[1].severity, WordSeverity::Moderate);
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let rows = suggestion_rows(&toks(&["idiot", "hate"]));
        let out = to_csv(&rows).expect("encode csv");
        let lines: Vec<&str> = out.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Abusive Word,Suggestion,Severity");
        assert!(lines[1].starts_with("idiot,"));
        assert!(lines[1].ends_with(",Moderate"));
    }

    #[test]
    fn empty_token_list_yields_header_only_csv() {
        let out = to_csv(&[]).expect("encode csv");
        assert_eq!(out.trim_end(), "Abusive Word,Suggestion,Severity");
    }
}
