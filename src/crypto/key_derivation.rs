//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Stretches a low-entropy passphrase into a 256-bit AES key. The salt
//! ensures distinct keys per encryption even for a repeated passphrase;
//! the iteration count and hash are fixed configuration, not exposed to
//! callers, so the output is reproducible bit-for-bit across runs.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{HexsealError, HexsealResult};

/// Required salt length in bytes
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (256 bits for AES-256)
pub const KEY_LEN: usize = 32;

/// Fixed PBKDF2 iteration count
const PBKDF2_ITERATIONS: u32 = 1_000;

/// A derived encryption key
///
/// Exists only transiently for the duration of one cipher operation and
/// is zeroized from memory on drop. Never serialized.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the raw key bytes
    ///
    /// Use only to feed the cipher; never store or log this value.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

// Keep key material out of Debug output
impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a passphrase and a 16-byte salt.
///
/// Deterministic: the same (passphrase, salt) pair always yields the same
/// key, which is what makes decryption possible. An empty passphrase is
/// accepted and produces a valid (if weak) key.
pub fn derive_key(passphrase: &str, salt: &[u8]) -> HexsealResult<DerivedKey> {
    if salt.len() != SALT_LEN {
        return Err(HexsealError::InvalidSaltLength {
            expected: SALT_LEN,
            actual: salt.len(),
        });
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);

    Ok(DerivedKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_length() {
        let key = derive_key("test_passphrase", &[7u8; SALT_LEN]).unwrap();
        assert_eq!(key.as_bytes().len(), KEY_LEN);
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let salt = [42u8; SALT_LEN];
        let key1 = derive_key("test_passphrase", &salt).unwrap();
        let key2 = derive_key("test_passphrase", &salt).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_passphrase_different_key() {
        let salt = [42u8; SALT_LEN];
        let key1 = derive_key("passphrase1", &salt).unwrap();
        let key2 = derive_key("passphrase2", &salt).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("same_passphrase", &[1u8; SALT_LEN]).unwrap();
        let key2 = derive_key("same_passphrase", &[2u8; SALT_LEN]).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_passphrase_accepted() {
        let key = derive_key("", &[0u8; SALT_LEN]).unwrap();
        assert_eq!(key.as_bytes().len(), KEY_LEN);
    }

    #[test]
    fn test_wrong_salt_length_rejected() {
        let result = derive_key("test_passphrase", &[0u8; 8]);
        assert!(matches!(
            result,
            Err(HexsealError::InvalidSaltLength {
                expected: SALT_LEN,
                actual: 8
            })
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = derive_key("secret", &[0u8; SALT_LEN]).unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
    }
}
