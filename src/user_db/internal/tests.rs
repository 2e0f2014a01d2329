use std::collections::HashMap;

use argon2::password_hash::PasswordHashString;
use assert_fs::prelude::*;
use assert_fs::TempDir;

use crate::hasher::ProductionHasherConfig;
use super::*;

fn cheap_hasher() -> ProductionHasher {
    let argon2_params = argon2::Params::new(1024, 1, 1, None)
        .expect("test params should be valid");
    ProductionHasher::new(ProductionHasherConfig { argon2_params })
}

struct TestUserDbIo {
    users: HashMap<String, user::User>,
}

#[async_trait]
impl UserDbIo for TestUserDbIo {
    async fn get_user(
        &self,
        username: &str,
    ) -> Result<Option<user::User>, UserDbError> {
        Ok(self.users.get(username).cloned())
    }
}

fn make_db(
    entries: &[(&str, &str)],
) -> UserDbImpl<ProductionHasher, TestUserDbIo> {
    let hasher = cheap_hasher();
    let users = entries.iter()
        .map(|(username, password)| {
            let hash = PasswordHashString::new(&hasher.generate_hash(password))
                .expect("generated hash should parse");
            (
                username.to_string(),
                user::User { username: username.to_string(), hash },
            )
        })
        .collect();
    UserDbImpl {
        hasher,
        io: TestUserDbIo { users },
    }
}

#[tokio::test]
async fn known_user_exists() {
    let db = make_db(&[("admin", "secret")]);
    assert!(db.does_user_exist("admin").await.unwrap());
}

#[tokio::test]
async fn unknown_user_does_not_exist() {
    let db = make_db(&[("admin", "secret")]);
    assert!(!db.does_user_exist("ghost").await.unwrap());
}

#[tokio::test]
async fn correct_credentials_check_out() {
    let db = make_db(&[("admin", "secret")]);
    assert!(db.check_user_credentials("admin", "secret").await.unwrap());
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let db = make_db(&[("admin", "secret")]);
    assert!(!db.check_user_credentials("admin", "wrong").await.unwrap());
}

#[tokio::test]
async fn unknown_user_credentials_are_rejected() {
    let db = make_db(&[("admin", "secret")]);
    assert!(!db.check_user_credentials("ghost", "secret").await.unwrap());
}

fn write_user_db(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let file = dir.child("users");
    file.write_str(contents).expect("failed to write user db");
    let path = file.path().to_path_buf();
    (dir, path)
}

#[tokio::test]
async fn production_io_loads_users_from_toml() {
    let hash = cheap_hasher().generate_hash("secret");
    let (_dir, path) = write_user_db(&format!(
        "[[user]]\nusername = \"admin\"\nhash = \"{hash}\"\n",
    ));
    let db = ProductionUserDb::new(&path, cheap_hasher()).await.unwrap();
    assert!(db.check_user_credentials("admin", "secret").await.unwrap());
    assert!(!db.check_user_credentials("admin", "nope").await.unwrap());
}

#[tokio::test]
async fn production_io_accepts_an_empty_db() {
    let (_dir, path) = write_user_db("");
    let db = ProductionUserDb::new(&path, cheap_hasher()).await.unwrap();
    assert!(!db.does_user_exist("anyone").await.unwrap());
}

#[tokio::test]
async fn production_io_rejects_malformed_toml() {
    let (_dir, path) = write_user_db("[[user]\nusername =");
    let err = ProductionUserDb::new(&path, cheap_hasher()).await
        .err().expect("should fail");
    assert!(matches!(err, UserDbError::Parsing { .. }), "wrong error: {err:#?}");
}

#[tokio::test]
async fn production_io_rejects_a_malformed_hash() {
    let (_dir, path) = write_user_db(
        "[[user]]\nusername = \"admin\"\nhash = \"plaintext-oops\"\n",
    );
    let err = ProductionUserDb::new(&path, cheap_hasher()).await
        .err().expect("should fail");
    assert!(matches!(err, UserDbError::Parsing { .. }), "wrong error: {err:#?}");
}

#[tokio::test]
async fn production_io_reports_a_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ProductionUserDb::new(dir.path().join("absent"), cheap_hasher())
        .await.err().expect("should fail");
    assert!(matches!(err, UserDbError::Io(_)), "wrong error: {err:#?}");
}
