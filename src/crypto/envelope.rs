//! Envelope assembly and the top-level encrypt/decrypt operations
//!
//! The envelope is the transportable combination of the non-secret
//! parameters (salt, IV) and the ciphertext. Its wire form is a single
//! ASCII token, `<hex-salt>-<hex-iv>-<hex-ciphertext>`, with lowercase
//! hex digits and exactly two `-` delimiters.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{HexsealError, HexsealResult};

use super::codec;
use super::encryption::{decrypt_bytes, encrypt_bytes, IV_LEN};
use super::key_derivation::{derive_key, SALT_LEN};

/// Field delimiter in the wire token
pub const TOKEN_DELIMITER: char = '-';

/// A parsed (or freshly assembled) envelope
///
/// Fields hold the hex encoding of each component, in wire order. The
/// struct serializes via serde for callers that store envelopes in
/// structured form; [`Envelope::to_token`] and [`Envelope::parse`]
/// convert to and from the flat token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Hex-encoded 16-byte key derivation salt
    pub salt: String,
    /// Hex-encoded 16-byte initialization vector
    pub iv: String,
    /// Hex-encoded ciphertext
    pub ciphertext: String,
}

impl Envelope {
    /// Assemble an envelope from raw components
    fn new(salt: &[u8], iv: &[u8], ciphertext: &[u8]) -> Self {
        Self {
            salt: codec::bytes_to_hex(salt),
            iv: codec::bytes_to_hex(iv),
            ciphertext: codec::bytes_to_hex(ciphertext),
        }
    }

    /// Split a wire token into its three fields.
    ///
    /// Fails with [`HexsealError::MalformedToken`] unless the token has
    /// exactly two delimiters. Hex validity of the fields is checked
    /// when they are decoded, not here.
    pub fn parse(token: &str) -> HexsealResult<Self> {
        let fields: Vec<&str> = token.split(TOKEN_DELIMITER).collect();
        if fields.len() != 3 {
            return Err(HexsealError::MalformedToken(format!(
                "expected 3 '{}'-separated fields, found {}",
                TOKEN_DELIMITER,
                fields.len()
            )));
        }

        Ok(Self {
            salt: fields[0].to_string(),
            iv: fields[1].to_string(),
            ciphertext: fields[2].to_string(),
        })
    }

    /// Render the wire token: salt, IV, ciphertext in fixed order
    pub fn to_token(&self) -> String {
        format!(
            "{}{d}{}{d}{}",
            self.salt,
            self.iv,
            self.ciphertext,
            d = TOKEN_DELIMITER
        )
    }

    /// Decode the salt field from hex
    fn decode_salt(&self) -> HexsealResult<Vec<u8>> {
        codec::hex_to_bytes(&self.salt)
    }

    /// Decode the IV field from hex
    fn decode_iv(&self) -> HexsealResult<Vec<u8>> {
        codec::hex_to_bytes(&self.iv)
    }

    /// Decode the ciphertext field from hex
    fn decode_ciphertext(&self) -> HexsealResult<Vec<u8>> {
        codec::hex_to_bytes(&self.ciphertext)
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token())
    }
}

impl FromStr for Envelope {
    type Err = HexsealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Encrypt plaintext under a passphrase, returning the wire token.
///
/// A fresh salt and a fresh, independent IV are drawn from the OS secure
/// random source on every call, so encrypting the same input twice
/// yields two different tokens that both decrypt to the same plaintext.
pub fn encrypt(passphrase: &str, plaintext: &str) -> HexsealResult<String> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    // Independent draw; the IV must never be derived from the salt
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let key = derive_key(passphrase, &salt)?;
    let ciphertext = encrypt_bytes(&key, &iv, codec::text_to_bytes(plaintext))?;

    Ok(Envelope::new(&salt, &iv, &ciphertext).to_token())
}

/// Decrypt a wire token under a passphrase, returning the plaintext.
///
/// The key is re-derived from the passphrase and the salt recovered from
/// the token, which reproduces the encryption-time key exactly. A wrong
/// passphrase, a corrupted ciphertext, and decrypted bytes that fail
/// UTF-8 decoding all surface as the same generic
/// [`HexsealError::DecryptionFailed`].
pub fn decrypt(passphrase: &str, token: &str) -> HexsealResult<String> {
    let envelope = Envelope::parse(token)?;
    let salt = envelope.decode_salt()?;
    let iv = envelope.decode_iv()?;
    let ciphertext = envelope.decode_ciphertext()?;

    let key = derive_key(passphrase, &salt)?;
    let plaintext = decrypt_bytes(&key, &iv, &ciphertext)?;

    codec::bytes_to_text(plaintext).map_err(|_| HexsealError::DecryptionFailed)
}
