//! Argon2 hashing of 4-digit PINs.
//!
//! Hashing and verification are CPU-bound, so both run on the blocking thread pool.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::Error;

/// Hashes a PIN into an argon2 PHC string
pub async fn hash_pin(pin: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(pin.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::PinHashError(e.to_string()))
    })
    .await?
}

/// Checks a PIN against a stored PHC string
///
/// # Returns
/// - `Ok(true)` - PIN matches
/// - `Ok(false)` - PIN does not match
/// - `Err(Error::PinHashError)` - Stored hash is not a valid PHC string
pub async fn verify_pin(pin: String, pin_hash: String) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&pin_hash).map_err(|e| Error::PinHashError(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(pin.as_bytes(), &parsed)
            .is_ok())
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect a hashed PIN to verify only against itself
    #[tokio::test]
    async fn verifies_hashed_pin() -> Result<(), Error> {
        let hash = hash_pin("1234".to_string()).await?;

        assert!(hash.starts_with("$argon2"));
        assert!(verify_pin("1234".to_string(), hash.clone()).await?);
        assert!(!verify_pin("4321".to_string(), hash).await?);

        Ok(())
    }

    /// Expect error when the stored hash is malformed
    #[tokio::test]
    async fn fails_for_malformed_hash() {
        let result = verify_pin("1234".to_string(), "1234".to_string()).await;

        assert!(matches!(result, Err(Error::PinHashError(_))));
    }
}
