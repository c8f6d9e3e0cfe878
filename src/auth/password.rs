/**
 * Password Hashing Service
 *
 * One-way salted hashing and verification for local account passwords,
 * backed by bcrypt.
 *
 * # Contract
 *
 * - `hash_password` produces an opaque secret with a per-call random
 *   salt embedded in it, so two hashes of the same plaintext differ.
 * - `verify_password` recomputes using the embedded salt and returns a
 *   plain bool; a malformed stored secret is a `false`, never an error.
 * - Plaintexts longer than `MAX_PASSWORD_LENGTH` characters are
 *   rejected to bound hashing cost.
 */

use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

/// Maximum accepted plaintext length, in characters
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Errors from password hashing
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Plaintext exceeds `MAX_PASSWORD_LENGTH`
    #[error("Password must be at most {MAX_PASSWORD_LENGTH} characters")]
    TooLong,

    /// Underlying bcrypt failure
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Hash a plaintext password into an opaque secret safe to persist
///
/// # Errors
///
/// * `PasswordError::TooLong` - plaintext exceeds `MAX_PASSWORD_LENGTH`
/// * `PasswordError::Hash` - bcrypt failure
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    if plaintext.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    Ok(hash(plaintext, DEFAULT_COST)?)
}

/// Verify a plaintext password against a stored opaque secret
///
/// Returns `false` for a wrong password, a malformed stored secret, or
/// an over-long plaintext. Never errors: callers only learn pass/fail.
pub fn verify_password(plaintext: &str, stored: &str) -> bool {
    if plaintext.chars().count() > MAX_PASSWORD_LENGTH {
        return false;
    }
    verify(plaintext, stored).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_verify_roundtrip() {
        let hashed = hash_password("pw123").unwrap();
        assert!(verify_password("pw123", &hashed));
        assert!(!verify_password("other", &hashed));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("pw123").unwrap();
        let second = hash_password("pw123").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("pw123", &first));
        assert!(verify_password("pw123", &second));
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "x".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            hash_password(&long),
            Err(PasswordError::TooLong)
        ));
        let hashed = hash_password("pw123").unwrap();
        assert!(!verify_password(&long, &hashed));
    }

    #[test]
    fn test_max_length_accepted() {
        let max = "x".repeat(MAX_PASSWORD_LENGTH);
        let hashed = hash_password(&max).unwrap();
        assert!(verify_password(&max, &hashed));
    }

    #[test]
    fn test_malformed_secret_is_false() {
        assert!(!verify_password("pw123", "not-a-bcrypt-string"));
        assert!(!verify_password("pw123", ""));
    }

    proptest! {
        // Keep the case count small: bcrypt at DEFAULT_COST is slow on
        // purpose.
        #![proptest_config(ProptestConfig::with_cases(4))]

        #[test]
        fn prop_verify_roundtrip(plaintext in "[a-zA-Z0-9!@#$%^&*]{1,64}") {
            let hashed = hash_password(&plaintext).unwrap();
            prop_assert!(verify_password(&plaintext, &hashed));
        }
    }
}
