//! AES-256-CBC encryption/decryption
//!
//! The cipher layer bound to a derived key and a per-operation IV.
//! CBC with PKCS7 padding, matching the wire format this crate commits
//! to; the mode carries no authenticator, so integrity rests on the
//! padding check alone (see the crate docs for the caveat).

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;

use crate::error::{HexsealError, HexsealResult};

use super::key_derivation::DerivedKey;

/// Required IV length in bytes
pub const IV_LEN: usize = 16;

/// AES block length in bytes
pub const BLOCK_LEN: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt plaintext bytes under the key and IV.
///
/// Output is always padded to a whole number of blocks, so even empty
/// plaintext yields one full block of ciphertext.
pub fn encrypt_bytes(key: &DerivedKey, iv: &[u8], plaintext: &[u8]) -> HexsealResult<Vec<u8>> {
    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| HexsealError::Cipher(format!("Failed to initialize cipher: {}", e)))?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt ciphertext bytes under the key and IV.
///
/// Any rejection by the cipher layer (bad length, invalid padding) maps
/// to the single generic [`HexsealError::DecryptionFailed`]; a wrong
/// passphrase and a corrupted ciphertext are indistinguishable here.
pub fn decrypt_bytes(key: &DerivedKey, iv: &[u8], ciphertext: &[u8]) -> HexsealResult<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(HexsealError::DecryptionFailed);
    }

    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| HexsealError::Cipher(format!("Failed to initialize cipher: {}", e)))?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| HexsealError::DecryptionFailed)
}
