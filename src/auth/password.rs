//! Password hashing and verification
//!
//! Argon2id with a per-record random salt, PHC string format. The time-cost
//! factor is configuration, not a compile-time constant. Verification is
//! constant-time with respect to the candidate password.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Password processing errors
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("invalid hashing parameters")]
    InvalidParams,
    #[error("password hashing failed")]
    HashingFailed,
    #[error("password verification failed")]
    VerificationFailed,
    #[error("invalid hash format")]
    InvalidHashFormat,
}

/// Argon2id hasher with a configurable work factor
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Create a hasher with the given time-cost factor
    pub fn new(time_cost: u32) -> Result<Self, PasswordError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            time_cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|_| PasswordError::InvalidParams)?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a freshly generated salt
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| PasswordError::HashingFailed)
    }

    /// Verify a plaintext password against a stored PHC hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| PasswordError::VerificationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> CredentialHasher {
        CredentialHasher::new(2).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let hash = hasher.hash("secret1").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("secret1", &hash).is_ok());
        assert!(hasher.verify("secret2", &hash).is_err());
    }

    #[test]
    fn test_same_password_different_salts() {
        let hasher = hasher();
        let hash1 = hasher.hash("secret1").unwrap();
        let hash2 = hasher.hash("secret1").unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify("secret1", &hash1).is_ok());
        assert!(hasher.verify("secret1", &hash2).is_ok());
    }

    #[test]
    fn test_invalid_hash_format() {
        let result = hasher().verify("secret1", "not-a-valid-hash");
        assert!(matches!(result, Err(PasswordError::InvalidHashFormat)));
    }

    #[test]
    fn test_invalid_time_cost() {
        assert!(CredentialHasher::new(0).is_err());
    }
}
