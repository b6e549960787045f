//! Password hashing and verification.
//!
//! Employee credentials are stored as Argon2 hashes on the profile; the
//! plain-text password is never persisted.

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Argon2, PasswordHash, PasswordVerifier};

use crate::error::{RegistryError, RegistryResult};

/// Hashes a plain-text password with Argon2 and a random salt.
///
/// The returned string is a self-describing PHC hash suitable for storage
/// on [`Profile::password_hash`](crate::models::Profile::password_hash).
pub fn hash_password(plain: &str) -> RegistryResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| RegistryError::CredentialError {
            message: e.to_string(),
        })
}

/// Verifies a plain-text password against a stored hash.
///
/// Returns `Ok(false)` for a wrong password; a hash that cannot be parsed
/// at all is a `CredentialError`.
pub fn verify_password(plain: &str, hash: &str) -> RegistryResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| RegistryError::CredentialError {
        message: format!("stored hash is not a valid PHC string: {}", e),
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_the_plain_text() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert_ne!(hash, "hunter2hunter2");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_accepts_the_original_password() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(verify_password("hunter2hunter2", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_a_wrong_password() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently_per_salt() {
        let a = hash_password("hunter2hunter2").unwrap();
        let b = hash_password("hunter2hunter2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_a_credential_error() {
        let result = verify_password("anything", "not-a-phc-string");
        match result {
            Err(RegistryError::CredentialError { message }) => {
                assert!(message.contains("PHC"));
            }
            other => panic!("Expected CredentialError, got {:?}", other),
        }
    }
}
