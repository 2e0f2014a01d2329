#[cfg(test)] mod tests;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, PasswordHash, PasswordHasher, Version};

pub trait Hasher: Send + Sync {
    fn generate_hash(&self, password: &str) -> String;
    fn check_hash(&self, hash: PasswordHash<'_>, password: &str) -> bool;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductionHasherConfig {
    pub argon2_params: argon2::Params,
}

impl Default for ProductionHasherConfig {
    fn default() -> Self {
        ProductionHasherConfig {
            argon2_params: argon2::Params::default(),
        }
    }
}

pub struct ProductionHasher {
    config: ProductionHasherConfig,
}

impl ProductionHasher {
    pub fn new(config: ProductionHasherConfig) -> Self {
        ProductionHasher { config }
    }

    fn get_hasher(&self) -> Argon2<'_> {
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            self.config.argon2_params.clone(),
        )
    }
}

impl Hasher for ProductionHasher {
    fn generate_hash(&self, password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        let hasher = self.get_hasher();
        hasher.hash_password(password.as_bytes(), &salt)
            .expect("password hashing failed")
            .serialize()
            .to_string()
    }

    // verify_password is the algorithm's constant-time check; the stored
    // hash string carries its own parameters and salt
    fn check_hash(&self, hash: PasswordHash<'_>, password: &str) -> bool {
        hash.verify_password(&[&self.get_hasher()], password).is_ok()
    }
}
