//! Location checks for the pretrained tokenizer/classifier folder.
//!
//! Loading the model is the job of the external inference stack; this
//! module only verifies the folder has the expected shape so a bad path
//! fails before any data is processed.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("model directory {} does not exist", .0.display())]
    MissingDir(PathBuf),
    #[error("model directory {} is missing {file}", dir.display())]
    MissingFile { dir: PathBuf, file: &'static str },
}

/// Resolved paths of a local pretrained-model folder.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub dir: PathBuf,
    pub config: PathBuf,
    pub weights: PathBuf,
    pub vocab: PathBuf,
}

static GLOBAL: OnceCell<ModelArtifacts> = OnceCell::new();

impl ModelArtifacts {
    /// Validate `dir` as a model-hub style artifact folder: a model
    /// config, a weights file and a tokenizer vocabulary.
    pub fn locate(dir: &Path) -> Result<Self, ArtifactError> {
        if !dir.is_dir() {
            return Err(ArtifactError::MissingDir(dir.to_path_buf()));
        }

        let config = dir.join("config.json");
        if !config.is_file() {
            return Err(ArtifactError::MissingFile {
                dir: dir.to_path_buf(),
                file: "config.json",
            });
        }

        let weights = ["model.safetensors", "pytorch_model.bin"]
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| ArtifactError::MissingFile {
                dir: dir.to_path_buf(),
                file: "model.safetensors or pytorch_model.bin",
            })?;

        let vocab = dir.join("vocab.txt");
        if !vocab.is_file() {
            return Err(ArtifactError::MissingFile {
                dir: dir.to_path_buf(),
                file: "vocab.txt",
            });
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            config,
            weights,
            vocab,
        })
    }

    /// One-time initialization barrier for the process-wide artifact
    /// paths.
    pub fn global<F>(init: F) -> Result<&'static ModelArtifacts, ArtifactError>
    where
        F: FnOnce() -> Result<ModelArtifacts, ArtifactError>,
    {
        GLOBAL.get_or_try_init(init)
    }
}
