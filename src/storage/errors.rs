use std::io::Error as IoError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("content directory does not exist")]
    DirectoryDoesNotExist,

    #[error("no such document")]
    NotFound,

    #[error("a document with that name already exists")]
    AlreadyExists,

    #[error("document too large")]
    TooBig,

    #[error(transparent)]
    Io(#[from] IoError),
}
