use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("fetch failed for team {team}: {message}")]
    Fetch { team: String, message: String },
    #[error("index write failed for {index}/{doc_id}: {message}")]
    Write {
        index: String,
        doc_id: String,
        message: String,
    },
    #[error("index delete failed for {index}/{doc_id}: {message}")]
    Delete {
        index: String,
        doc_id: String,
        message: String,
    },
    #[error("index service error: {0}")]
    Service(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for IndexError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for IndexError {
    fn from(err: reqwest::Error) -> Self {
        Self::Service(err.to_string())
    }
}
