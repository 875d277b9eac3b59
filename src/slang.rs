//! Slang-to-formal dictionary: CSV parsing, download-once caching, and the
//! process-wide read-only instance.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SlangError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("dictionary is missing required column '{0}'")]
    MissingColumn(&'static str),
}

#[derive(Debug, Deserialize)]
struct SlangRow {
    slang: String,
    formal: String,
}

/// Immutable slang -> formal lookup table, loaded once per process and
/// shared read-only across all normalization calls.
#[derive(Debug, Default, Clone)]
pub struct SlangMap {
    entries: HashMap<String, String>,
}

static GLOBAL: OnceCell<SlangMap> = OnceCell::new();

impl SlangMap {
    /// Build a map from `(slang, formal)` pairs. Later pairs win.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(s, f)| (s.into(), f.into()))
                .collect(),
        }
    }

    /// Parse a dictionary from CSV with header columns `slang` and
    /// `formal`. Duplicate slang keys keep the last row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SlangError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?;
        if !headers.iter().any(|h| h == "slang") {
            return Err(SlangError::MissingColumn("slang"));
        }
        if !headers.iter().any(|h| h == "formal") {
            return Err(SlangError::MissingColumn("formal"));
        }

        let mut entries = HashMap::new();
        for row in csv_reader.deserialize() {
            let row: SlangRow = row?;
            entries.insert(row.slang, row.formal);
        }
        Ok(Self { entries })
    }

    /// Load a dictionary from a local CSV file.
    pub fn load(path: &Path) -> Result<Self, SlangError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One-time initialization barrier for the process-wide dictionary.
    /// The first caller runs `init`; every later caller gets the same
    /// immutable instance.
    pub fn global<F>(init: F) -> Result<&'static SlangMap, SlangError>
    where
        F: FnOnce() -> Result<SlangMap, SlangError>,
    {
        GLOBAL.get_or_try_init(init)
    }
}

/// Make sure the dictionary exists at `path`, downloading it from `url`
/// if absent. Returns true when a download happened. Download failures
/// propagate; there is no retry.
///
/// The file at `path` is either absent or complete: the body is staged
/// into a sibling `.part` file and renamed into place, so an
/// interrupted write can never satisfy the existence check on the next
/// run.
pub async fn ensure_local(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
) -> Result<bool, SlangError> {
    if path.exists() {
        return Ok(false);
    }
    info!("Downloading slang dictionary from {}", url);
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "kamus.csv".into());
    let staging = path.with_file_name(format!("{file_name}.part"));
    tokio::fs::write(&staging, &body).await?;
    tokio::fs::rename(&staging, path).await?;
    Ok(true)
}
