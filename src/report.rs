//! The presentation boundary: everything a renderer needs, as JSON.
//!
//! Word-cloud and pie-chart front ends consume this report; nothing in
//! the library depends on how it ends up on screen.

use crate::corpus::TermCount;
use crate::sentiment::SentimentSummary;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub rows_total: usize,
    pub rows_sampled: usize,
    /// Sampled rows that produced at least one cleaned token.
    pub contributing_rows: usize,
    pub corpus_chars: usize,
    pub top_terms: Vec<TermCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSummary>,
}

impl Report {
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub async fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        tokio::fs::write(path, self.to_json()?).await?;
        Ok(())
    }
}
