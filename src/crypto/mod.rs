//! Cryptographic core for hexseal
//!
//! Provides AES-256-CBC encryption with PBKDF2-SHA256 key derivation,
//! layered bottom-up: codec conversions, key derivation, the cipher
//! seam, and the envelope codec that ties them into the wire token.

pub mod codec;
pub mod encryption;
pub mod envelope;
pub mod key_derivation;
pub mod secure_memory;

pub use codec::{bytes_to_hex, bytes_to_text, hex_to_bytes, text_to_bytes};
pub use encryption::{decrypt_bytes, encrypt_bytes, BLOCK_LEN, IV_LEN};
pub use envelope::{decrypt, encrypt, Envelope, TOKEN_DELIMITER};
pub use key_derivation::{derive_key, DerivedKey, KEY_LEN, SALT_LEN};
pub use secure_memory::SecureString;
