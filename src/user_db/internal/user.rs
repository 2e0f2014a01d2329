use argon2::password_hash::PasswordHashString;

use crate::user_db::internal::data::UserData;
use crate::user_db::UserDbError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct User {
    pub username: String,
    pub hash: PasswordHashString,
}

// a malformed hash fails the whole load, so a typo in the user db is
// caught at startup instead of at somebody's login
impl TryFrom<UserData> for User {
    type Error = UserDbError;

    fn try_from(value: UserData) -> Result<Self, Self::Error> {
        let hash = PasswordHashString::new(&value.hash)
            .map_err(|e| UserDbError::Parsing {
                message: format!(
                    "invalid password hash for user {}: {}",
                    value.username, e,
                ),
            })?;
        Ok(
            User {
                username: value.username,
                hash,
            }
        )
    }
}
