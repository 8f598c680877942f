//! # Store Errors
//!
//! `StoreError` covers the in-memory record store. `PersistError` covers
//! reading and writing the backing JSON file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No live record has this id
    #[error("Joke not found: {0}")]
    NotFound(u64),

    /// A batch referenced at least one unknown id; nothing was changed
    #[error("One or more jokes not found: {0:?}")]
    NotFoundMany(Vec<u64>),

    /// Two records would share an id
    #[error("Duplicate joke id: {0}")]
    DuplicateId(u64),

    /// The like counter of this record cannot move any further
    #[error("Like counter out of range for joke {0}")]
    LikesOutOfRange(u64),

    /// The id counter has reached its maximum
    #[error("No joke ids left to assign")]
    IdsExhausted,
}

impl StoreError {
    /// Whether this error means the caller asked for something absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::NotFoundMany(_))
    }
}

/// Result type for file persistence
pub type PersistResult<T> = Result<T, PersistError>;

/// Backing file errors
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading, writing or renaming the file failed
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON array of jokes
    #[error("Malformed joke file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the snapshot failed
    #[error("Failed to serialize jokes: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PersistError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        PersistError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
