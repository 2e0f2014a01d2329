use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::user_db::internal::data::UsersData;
use crate::user_db::internal::user::User;
use crate::user_db::UserDbError;

#[async_trait]
pub(super) trait UserDbIo: Send + Sync {
    async fn get_user(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserDbError>;
}

pub struct ProductionUserDbIo {
    users: HashMap<String, User>,
}

impl ProductionUserDbIo {
    pub async fn new(
        user_db_filename: impl AsRef<Path> + Send,
    ) -> Result<Self, UserDbError> {
        let db_str = fs::read_to_string(user_db_filename).await?;
        let parsed = toml::from_str::<UsersData>(&db_str)?;
        let users = parsed.users
            .into_iter()
            .map(|u| {
                let user = User::try_from(u)?;
                Ok((user.username.clone(), user))
            })
            .collect::<Result<HashMap<_, _>, UserDbError>>()?;
        Ok(ProductionUserDbIo { users })
    }
}

#[async_trait]
impl UserDbIo for ProductionUserDbIo {
    async fn get_user(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserDbError> {
        Ok(self.users.get(username).cloned())
    }
}
