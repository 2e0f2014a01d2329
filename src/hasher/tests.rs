use argon2::PasswordHash;

use super::*;

fn cheap_hasher() -> ProductionHasher {
    // low-cost parameters, these tests exercise correctness, not cost
    let argon2_params = argon2::Params::new(1024, 1, 1, None)
        .expect("test params should be valid");
    ProductionHasher::new(ProductionHasherConfig { argon2_params })
}

#[test]
fn generated_hash_verifies() {
    let hasher = cheap_hasher();
    let hash = hasher.generate_hash("hunter2");
    let parsed = PasswordHash::new(&hash).expect("generated hash should parse");
    assert!(hasher.check_hash(parsed, "hunter2"));
}

#[test]
fn wrong_password_is_rejected() {
    let hasher = cheap_hasher();
    let hash = hasher.generate_hash("hunter2");
    let parsed = PasswordHash::new(&hash).expect("generated hash should parse");
    assert!(!hasher.check_hash(parsed, "hunter3"));
    assert!(!hasher.check_hash(PasswordHash::new(&hash).unwrap(), ""));
}

#[test]
fn hashes_are_salted() {
    let hasher = cheap_hasher();
    assert_ne!(hasher.generate_hash("same"), hasher.generate_hash("same"));
}

#[test]
fn generated_hash_is_phc_argon2id() {
    let hasher = cheap_hasher();
    assert!(hasher.generate_hash("x").starts_with("$argon2id$"));
}
