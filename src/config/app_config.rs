use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::lib_constants::{
    DEFAULT_CONTENT_DIR,
    DEFAULT_MAX_DOCUMENT_LEN,
    DEFAULT_USER_DB,
};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    /// Directory holding the managed documents.
    #[serde(default = "default_content_directory")]
    pub content_directory: PathBuf,

    /// Toml file mapping usernames to password hashes.
    #[serde(default = "default_user_db")]
    pub user_db: PathBuf,

    #[serde(default = "default_max_document_len")]
    pub max_document_len: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            content_directory: default_content_directory(),
            user_db: default_user_db(),
            max_document_len: default_max_document_len(),
        }
    }
}

fn default_content_directory() -> PathBuf {
    PathBuf::from(DEFAULT_CONTENT_DIR)
}

fn default_user_db() -> PathBuf {
    PathBuf::from(DEFAULT_USER_DB)
}

fn default_max_document_len() -> u64 {
    DEFAULT_MAX_DOCUMENT_LEN
}
