//! Error types for catalog loading, version indexing and batch I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, indexing or writing a card catalog.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {context}: {source}")]
    MalformedInput {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode JSON for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context} must be a JSON object")]
    NotAnObject { context: String },

    #[error("printing {key:?} has no card_id")]
    MissingCardId { key: String },

    #[error("printing {key:?} has card_id {found}, expected a string or an integer")]
    InvalidCardId { key: String, found: String },
}

impl Error {
    /// Map an I/O error on `path`, treating a missing file as [`Error::InputNotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound { path }
        } else {
            Error::Io { path, source }
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
