//! Password hashing with bcrypt
//!
//! Hashes are salted per call and stored in the modular crypt format
//! (`$2b$<cost>$...`), so the cost travels with the hash.

use anyhow::{Context, Result};

/// Hash a plaintext password with the given bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).context("Password hashing failed")
}

/// Verify a plaintext password against a stored bcrypt hash
///
/// Malformed or empty hashes verify as `false` rather than erroring, so a
/// corrupt row can never be used to log in.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if hash.is_empty() {
        return false;
    }

    match bcrypt::verify(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost bcrypt accepts; keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("test_password_123", TEST_COST).unwrap();

        assert!(verify_password("test_password_123", &hash));
        assert!(!verify_password("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("same", TEST_COST).unwrap();
        let second = hash_password("same", TEST_COST).unwrap();

        assert_ne!(first, second);
        assert!(verify_password("same", &first));
        assert!(verify_password("same", &second));
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("hunter2hunter2", TEST_COST).unwrap();
        assert!(!hash.contains("hunter2hunter2"));
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_empty_or_garbage_hash_returns_false() {
        assert!(!verify_password("any_password", ""));
        assert!(!verify_password("any_password", "not-a-bcrypt-hash"));
    }
}
