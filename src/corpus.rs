//! Word-cloud corpus assembly and term-frequency aggregation.

use crate::normalizer::normalize;
use crate::slang::SlangMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Joined cleaned text, capped to a maximum character count.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub text: String,
    /// Rows that contributed at least one token.
    pub contributing_rows: usize,
}

/// One entry of the word-cloud input: a term and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

impl Corpus {
    /// Normalize every text, join the non-empty results with single
    /// spaces, and cap the corpus at `max_chars` characters without
    /// splitting a character.
    pub fn build(texts: &[String], slang: &SlangMap, max_chars: usize) -> Self {
        let mut text = String::new();
        let mut contributing_rows = 0;
        for raw in texts {
            let cleaned = normalize(raw, slang);
            if cleaned.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&cleaned);
            contributing_rows += 1;
        }

        if let Some((idx, _)) = text.char_indices().nth(max_chars) {
            text.truncate(idx);
            text.truncate(text.trim_end().len());
        }

        Self {
            text,
            contributing_rows,
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Count occurrences of each whitespace-delimited term.
    pub fn term_frequencies(&self) -> HashMap<String, u64> {
        let mut freqs = HashMap::new();
        for term in self.text.split_whitespace() {
            *freqs.entry(term.to_string()).or_insert(0) += 1;
        }
        freqs
    }

    /// The `k` most frequent terms, descending by count; ties break
    /// lexicographically so the output is stable.
    pub fn top_terms(&self, k: usize) -> Vec<TermCount> {
        let mut terms: Vec<TermCount> = self
            .term_frequencies()
            .into_iter()
            .map(|(term, count)| TermCount { term, count })
            .collect();
        terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        terms.truncate(k);
        terms
    }
}
