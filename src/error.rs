//! Custom error types for hexseal
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for hexseal operations
#[derive(Error, Debug)]
pub enum HexsealError {
    /// Token does not split into exactly three delimited fields
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// A token field is not valid hexadecimal text
    #[error("Malformed hex: {0}")]
    MalformedHex(String),

    /// Salt passed to key derivation has the wrong length
    #[error("Invalid salt length: expected {expected} bytes, got {actual}")]
    InvalidSaltLength { expected: usize, actual: usize },

    /// Plaintext could not be encoded into bytes
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Bytes could not be decoded back into text
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// The cipher primitive rejected the operation
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Decryption failed: wrong passphrase, corrupted token, or invalid
    /// padding. These causes are deliberately not distinguished so the
    /// error channel cannot serve as a padding oracle.
    #[error("Decryption failed")]
    DecryptionFailed,
}

impl HexsealError {
    /// Check if this is a token/hex parse error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedToken(_) | Self::MalformedHex(_))
    }

    /// Check if this is the generic decryption failure
    pub fn is_decryption_failed(&self) -> bool {
        matches!(self, Self::DecryptionFailed)
    }
}

// Implement From traits for common error types

impl From<hex::FromHexError> for HexsealError {
    fn from(err: hex::FromHexError) -> Self {
        Self::MalformedHex(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for HexsealError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Decoding(err.to_string())
    }
}

/// Result type alias for hexseal operations
pub type HexsealResult<T> = Result<T, HexsealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HexsealError::MalformedToken("expected 3 fields, found 1".into());
        assert_eq!(
            err.to_string(),
            "Malformed token: expected 3 fields, found 1"
        );
    }

    #[test]
    fn test_invalid_salt_length_display() {
        let err = HexsealError::InvalidSaltLength {
            expected: 16,
            actual: 8,
        };
        assert_eq!(
            err.to_string(),
            "Invalid salt length: expected 16 bytes, got 8"
        );
    }

    #[test]
    fn test_decryption_failed_is_generic() {
        let err = HexsealError::DecryptionFailed;
        assert_eq!(err.to_string(), "Decryption failed");
        assert!(err.is_decryption_failed());
    }

    #[test]
    fn test_from_hex_error() {
        let hex_err = hex::decode("zz").unwrap_err();
        let err: HexsealError = hex_err.into();
        assert!(matches!(err, HexsealError::MalformedHex(_)));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: HexsealError = utf8_err.into();
        assert!(matches!(err, HexsealError::Decoding(_)));
    }
}
