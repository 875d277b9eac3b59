//! Uploaded-dataset access: reading a named column out of a CSV file and
//! deterministic row sampling.
//!
//! The text-bearing column is configured, not guessed; the dashboards
//! this feeds have historically disagreed on `text` vs `tweet`.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing required column '{column}', found columns: {}", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("tokio task error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Read every value of one named column from CSV data. A missing column
/// halts processing and reports the columns that are present.
pub fn read_column<R: Read>(reader: R, column: &str) -> Result<Vec<String>, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let idx = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })?;

    let mut values = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        values.push(record.get(idx).unwrap_or("").to_string());
    }
    Ok(values)
}

/// Async wrapper around [`read_column`] for a file path; the blocking CSV
/// work runs on the blocking pool.
pub async fn load_column(path: &Path, column: &str) -> Result<Vec<String>, DatasetError> {
    let path = path.to_path_buf();
    let column = column.to_string();
    tokio::task::spawn_blocking(move || {
        let file = std::fs::File::open(&path)?;
        read_column(file, &column)
    })
    .await?
}

/// Pick at most `max` rows with a seeded RNG. Re-running with the same
/// seed over the same input yields the same selection.
pub fn sample(texts: &[String], max: usize, seed: u64) -> Vec<String> {
    if texts.len() <= max {
        return texts.to_vec();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    texts.choose_multiple(&mut rng, max).cloned().collect()
}
