use crate::repo::task_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by the storage adapter.
#[derive(Debug)]
pub enum StorageError {
    /// The repository rejected or failed the operation.
    Repo(RepoError),
    /// The writer thread could not be started.
    Spawn(std::io::Error),
    /// The writer thread stopped before answering.
    WriterGone,
    /// No storage is attached; the store runs in memory only.
    Unavailable,
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Spawn(err) => write!(f, "failed to start storage writer: {err}"),
            Self::WriterGone => write!(f, "storage writer stopped"),
            Self::Unavailable => write!(f, "storage is not available"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Spawn(err) => Some(err),
            Self::WriterGone | Self::Unavailable => None,
        }
    }
}

impl From<RepoError> for StorageError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
