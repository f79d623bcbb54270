// src/crypto.rs
use base64::{engine::general_purpose, Engine as _};
use pbkdf2::pbkdf2_hmac;
use rand_core::{OsRng, RngCore};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use thiserror::Error;

use crate::models::DerivedHash;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Salt generation error: {0}")]
    SaltError(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

pub const SALT_LEN: usize = 16;
pub const DERIVED_KEY_LEN: usize = 32;

// Uppercase hex SHA-1 digest, as used by the k-anonymity range lookup
pub fn sha1_hex_upper(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    hex::encode_upper(hasher.finalize())
}

// PBKDF2-HMAC-SHA256 over a caller-provided salt
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; DERIVED_KEY_LEN] {
    let mut key = [0u8; DERIVED_KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

/// Derive a storable password hash with a fresh random salt.
///
/// Key and salt come back base64-encoded for the persistence layer; the
/// iteration floor is enforced by the configuration layer, not here.
pub fn hash_password_pbkdf2(password: &str, iterations: u32) -> Result<DerivedHash> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| CryptoError::SaltError(e.to_string()))?;

    let key = derive_key(password, &salt, iterations);

    Ok(DerivedHash {
        method: "pbkdf2".to_string(),
        key: general_purpose::STANDARD.encode(key),
        salt: general_purpose::STANDARD.encode(salt),
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_known_digests() {
        assert_eq!(
            sha1_hex_upper("password"),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"
        );
        assert_eq!(
            sha1_hex_upper(""),
            "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709"
        );
    }

    #[test]
    fn test_sha1_digest_length() {
        assert_eq!(sha1_hex_upper("anything").len(), 40);
    }

    #[test]
    fn test_pbkdf2_rfc_vector() {
        // PBKDF2-HMAC-SHA256, P="password", S="salt", c=1, dkLen=32
        let key = derive_key("password", b"salt", 1);
        assert_eq!(
            hex::encode(key),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn test_hash_password_shape() {
        let hash = hash_password_pbkdf2("correct horse battery staple", 10_000).unwrap();
        assert_eq!(hash.method, "pbkdf2");
        assert_eq!(hash.iterations, 10_000);
        // base64 of 32 key bytes and 16 salt bytes
        assert_eq!(hash.key.len(), 44);
        assert_eq!(hash.salt.len(), 24);
    }

    #[test]
    fn test_fresh_salt_per_call() {
        let first = hash_password_pbkdf2("same password", 10_000).unwrap();
        let second = hash_password_pbkdf2("same password", 10_000).unwrap();
        assert_ne!(first.salt, second.salt);
        assert_ne!(first.key, second.key);
    }

    #[test]
    fn test_same_salt_same_key() {
        let salt = [7u8; SALT_LEN];
        let first = derive_key("pw", &salt, 1_000);
        let second = derive_key("pw", &salt, 1_000);
        assert_eq!(first, second);
    }
}
