//! Password hashing and verification
//!
//! Thin wrapper over bcrypt. Hashing runs on the blocking thread pool --
//! at cost 10 a single hash takes tens of milliseconds of pure CPU, which
//! would otherwise stall the async scheduler.

use thiserror::Error;

/// Password hashing errors
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Blocking task failed: {0}")]
    TaskFailed(String),
}

/// Hash a plaintext password with a random salt at the given cost factor
pub async fn hash_password(plaintext: String, cost: u32) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || {
        bcrypt::hash(plaintext, cost).map_err(|e| PasswordError::HashFailed(e.to_string()))
    })
    .await
    .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
}

/// Verify a plaintext candidate against a stored digest
///
/// The salt and cost are recovered from the digest itself and the
/// comparison is constant-time inside bcrypt. A malformed digest verifies
/// false rather than erroring out.
pub async fn verify_password(plaintext: String, digest: String) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || Ok(bcrypt::verify(plaintext, &digest).unwrap_or(false)))
        .await
        .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cost 4 is the bcrypt minimum; keeps the test suite fast.
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_and_verify_roundtrip() {
        let digest = hash_password("pw123456".to_string(), TEST_COST).await.unwrap();

        assert_ne!(digest, "pw123456");
        assert!(verify_password("pw123456".to_string(), digest.clone())
            .await
            .unwrap());
        assert!(!verify_password("wrong".to_string(), digest).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_different_salts() {
        let a = hash_password("pw123456".to_string(), TEST_COST).await.unwrap();
        let b = hash_password("pw123456".to_string(), TEST_COST).await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_malformed_digest_verifies_false() {
        let result = verify_password("pw123456".to_string(), "not-a-bcrypt-digest".to_string())
            .await
            .unwrap();
        assert!(!result);
    }
}
