use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Corpus error: {0}")]
    CorpusError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Not found: {0}")]
    NotFound(String),
}
