use std::path::Path;

use async_trait::async_trait;

use crate::hasher::{Hasher, ProductionHasher};
use crate::user_db::internal::io_trait::{ProductionUserDbIo, UserDbIo};
use crate::user_db::UserDbError;

mod data;
mod io_trait;
mod user;
#[cfg(test)] mod tests;

/// The credential store: a read-only username to password-hash mapping.
#[async_trait]
pub trait UserDb: Send + Sync {
    async fn does_user_exist(
        &self,
        username: &str,
    ) -> Result<bool, UserDbError>;

    async fn check_user_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, UserDbError>;
}

#[allow(private_bounds)]
pub struct UserDbImpl<H: Hasher, Io: UserDbIo> {
    hasher: H,
    io: Io,
}

#[async_trait]
impl<H: Hasher, Io: UserDbIo> UserDb for UserDbImpl<H, Io> {
    async fn does_user_exist(
        &self,
        username: &str,
    ) -> Result<bool, UserDbError> {
        Ok(
            self.io
                .get_user(username)
                .await?
                .is_some()
        )
    }

    async fn check_user_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, UserDbError> {
        let user = self.io
            .get_user(username)
            .await?;

        match user {
            None => Ok(false),
            Some(user) => {
                Ok(
                    self.hasher
                        .check_hash(
                            user.hash.password_hash(),
                            password,
                        )
                )
            }
        }
    }
}

pub type ProductionUserDb = UserDbImpl<ProductionHasher, ProductionUserDbIo>;

impl ProductionUserDb {
    pub async fn new(
        user_db_filename: impl AsRef<Path> + Send,
        hasher: ProductionHasher,
    ) -> Result<ProductionUserDb, UserDbError> {
        Ok(
            UserDbImpl {
                hasher,
                io: ProductionUserDbIo::new(user_db_filename).await?,
            }
        )
    }
}
