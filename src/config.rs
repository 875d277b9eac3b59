//! Layered run configuration: built-in defaults, `OPINI_*` environment
//! variables, then CLI flags, in increasing precedence.

use config as config_rs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SLANG_URL: &str =
    "https://drive.google.com/uc?id=1fGWZu5qVYJa-pv078spaLE4urs5zDDPV";
pub const DEFAULT_SLANG_PATH: &str = "kamus.csv";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    /// Name of the text-bearing column. Exported datasets disagree on
    /// `text` vs `tweet`, so this is configuration, not a constant.
    pub text_column: String,
    /// Optional column holding sentiment labels to tally.
    pub label_column: Option<String>,
    pub sample_size: usize,
    pub seed: u64,
    pub max_corpus_chars: usize,
    pub top_terms: usize,
    pub slang_url: String,
    pub slang_path: PathBuf,
    pub model_dir: Option<PathBuf>,
}

/// CLI-provided values; `None` falls through to env or defaults.
#[derive(Debug, Default)]
pub struct Overrides {
    pub text_column: Option<String>,
    pub label_column: Option<String>,
    pub sample_size: Option<usize>,
    pub seed: Option<u64>,
    pub max_corpus_chars: Option<usize>,
    pub top_terms: Option<usize>,
    pub slang_url: Option<String>,
    pub slang_path: Option<PathBuf>,
    pub model_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
    #[error("invalid value in {var}: '{value}' is not an integer")]
    InvalidEnv { var: &'static str, value: String },
}

pub fn load_config(input: &Path, overrides: &Overrides) -> Result<AppConfig, ConfigError> {
    let mut builder = config_rs::Config::builder()
        .set_default("text_column", "text")?
        .set_default("sample_size", 1000i64)?
        .set_default("seed", 42i64)?
        .set_default("max_corpus_chars", 500_000i64)?
        .set_default("top_terms", 100i64)?
        .set_default("slang_url", DEFAULT_SLANG_URL)?
        .set_default("slang_path", DEFAULT_SLANG_PATH)?;

    for (key, var) in [
        ("text_column", "OPINI_TEXT_COLUMN"),
        ("label_column", "OPINI_LABEL_COLUMN"),
        ("slang_url", "OPINI_SLANG_URL"),
        ("slang_path", "OPINI_SLANG_PATH"),
        ("model_dir", "OPINI_MODEL_DIR"),
    ] {
        if let Ok(value) = std::env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    for (key, var) in [
        ("sample_size", "OPINI_SAMPLE_SIZE"),
        ("seed", "OPINI_SEED"),
        ("max_corpus_chars", "OPINI_MAX_CORPUS_CHARS"),
        ("top_terms", "OPINI_TOP_TERMS"),
    ] {
        if let Ok(value) = std::env::var(var) {
            // these keys are read back as i64, so parse up front
            let parsed: i64 = value
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    var,
                    value: value.clone(),
                })?;
            builder = builder.set_override(key, parsed)?;
        }
    }

    // CLI flags take precedence
    if let Some(v) = &overrides.text_column {
        builder = builder.set_override("text_column", v.clone())?;
    }
    if let Some(v) = &overrides.label_column {
        builder = builder.set_override("label_column", v.clone())?;
    }
    if let Some(v) = overrides.sample_size {
        builder = builder.set_override("sample_size", v as i64)?;
    }
    if let Some(v) = overrides.seed {
        builder = builder.set_override("seed", v as i64)?;
    }
    if let Some(v) = overrides.max_corpus_chars {
        builder = builder.set_override("max_corpus_chars", v as i64)?;
    }
    if let Some(v) = overrides.top_terms {
        builder = builder.set_override("top_terms", v as i64)?;
    }
    if let Some(v) = &overrides.slang_url {
        builder = builder.set_override("slang_url", v.clone())?;
    }
    if let Some(v) = &overrides.slang_path {
        builder = builder.set_override("slang_path", v.display().to_string())?;
    }
    if let Some(v) = &overrides.model_dir {
        builder = builder.set_override("model_dir", v.display().to_string())?;
    }

    let cfg = builder.build()?;

    Ok(AppConfig {
        input: input.to_path_buf(),
        text_column: cfg.get::<String>("text_column")?,
        label_column: cfg.get::<String>("label_column").ok(),
        sample_size: cfg.get::<i64>("sample_size")? as usize,
        seed: cfg.get::<i64>("seed")? as u64,
        max_corpus_chars: cfg.get::<i64>("max_corpus_chars")? as usize,
        top_terms: cfg.get::<i64>("top_terms")? as usize,
        slang_url: cfg.get::<String>("slang_url")?,
        slang_path: PathBuf::from(cfg.get::<String>("slang_path")?),
        model_dir: cfg.get::<String>("model_dir").ok().map(PathBuf::from),
    })
}
