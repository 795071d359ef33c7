//! Content layer errors

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the content reader and writer
#[derive(Error, Debug)]
pub enum ContentError {
    /// No backing document exists for the requested slug
    #[error("Poem not found: {0}")]
    NotFound(String),

    /// A required field is missing or a slug cannot be derived
    #[error("Validation error: {0}")]
    Validation(String),

    /// The document exists but its front-matter is malformed
    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Reading or writing the underlying file failed
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ContentError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ContentError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, message: impl ToString) -> Self {
        ContentError::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
