//! Storage-specific error type wrapping file IO errors.

use casita_domain::error::HomeError;

/// Errors originating from the flat-file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The persistence file could not be opened, read, or written.
    #[error("file error")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for HomeError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
