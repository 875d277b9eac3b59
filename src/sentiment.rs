//! Sentiment labels and count summaries for the dashboard's pie charts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment classes the upstream classifier emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Parse a label case-insensitively. Both English and Indonesian
    /// spellings occur in exported prediction files.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "positive" | "positif" | "pos" => Some(Sentiment::Positive),
            "negative" | "negatif" | "neg" => Some(Sentiment::Negative),
            "neutral" | "netral" | "neu" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Counts per sentiment class over one labeled column. Rows whose label
/// does not parse are counted as skipped rather than failing the run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub skipped: u64,
}

impl SentimentSummary {
    pub fn tally<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut summary = SentimentSummary::default();
        for label in labels {
            match Sentiment::parse(label) {
                Some(Sentiment::Positive) => summary.positive += 1,
                Some(Sentiment::Negative) => summary.negative += 1,
                Some(Sentiment::Neutral) => summary.neutral += 1,
                None => summary.skipped += 1,
            }
        }
        summary
    }

    pub fn classified(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }
}
