//! Password hashing and verification.
//!
//! Hashes are bcrypt with a per-hash random salt. `bcrypt::verify` compares
//! digests in constant time. The `_blocking` variants move the work onto the
//! blocking thread pool so a slow hash only suspends the calling request.

use anyhow::{Context, Result};
use bcrypt::{hash, verify};

pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    hash(password, cost).context("Failed to hash password")
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    verify(password, hash).context("Failed to verify password")
}

pub async fn hash_password_blocking(password: String, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .context("Password hashing task panicked")?
}

pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .context("Password verification task panicked")?
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcrypt::DEFAULT_COST;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_password_success() {
        let password = "testpassword123";
        let hash = hash_password(password, TEST_COST).unwrap();

        assert!(!hash.is_empty());
        assert_ne!(hash, password);
    }

    #[test]
    fn test_hash_respects_cost() {
        let hash = hash_password("pw", TEST_COST).unwrap();
        assert!(hash.starts_with("$2b$04$"));

        let hash = hash_password("pw", DEFAULT_COST).unwrap();
        assert!(hash.starts_with(&format!("$2b${:02}$", DEFAULT_COST)));
    }

    #[test]
    fn test_verify_password_correct() {
        let hash = hash_password("correctpassword", TEST_COST).unwrap();
        assert!(verify_password("correctpassword", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password("correctpassword", TEST_COST).unwrap();
        assert!(!verify_password("wrongpassword", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        assert!(verify_password("testpassword", "not_a_valid_bcrypt_hash").is_err());
    }

    #[test]
    fn test_hash_generates_unique_hashes() {
        let hash1 = hash_password("samepassword", TEST_COST).unwrap();
        let hash2 = hash_password("samepassword", TEST_COST).unwrap();

        assert_ne!(hash1, hash2);
        assert!(verify_password("samepassword", &hash1).unwrap());
        assert!(verify_password("samepassword", &hash2).unwrap());
    }

    #[tokio::test]
    async fn test_blocking_variants_round_trip() {
        let hash = hash_password_blocking("s3cret".to_string(), TEST_COST)
            .await
            .unwrap();

        assert!(verify_password_blocking("s3cret".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password_blocking("other".to_string(), hash)
            .await
            .unwrap());
    }
}
