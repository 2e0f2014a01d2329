use std::io::Error as IoError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserDbError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("user db parsing error: {message}")]
    Parsing {
        message: String,
    },
}

impl From<toml::de::Error> for UserDbError {
    fn from(e: toml::de::Error) -> Self {
        UserDbError::Parsing {
            message: format!("{e}"),
        }
    }
}
