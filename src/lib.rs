//! hexseal - passphrase-based envelope encryption
//!
//! This library turns a human-supplied passphrase and a plaintext message
//! into a single transportable text token, and back. A per-encryption key
//! is stretched from the passphrase with PBKDF2-HMAC-SHA256 over a fresh
//! random salt, the message is encrypted with AES-256-CBC under a fresh
//! random IV, and the result is serialized as
//! `<hex-salt>-<hex-iv>-<hex-ciphertext>`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `crypto::codec`: text/byte/hex conversions
//! - `crypto::key_derivation`: PBKDF2-SHA256 key stretching
//! - `crypto::encryption`: the AES-256-CBC cipher layer
//! - `crypto::envelope`: token assembly/parsing and the top-level
//!   [`encrypt`]/[`decrypt`] operations
//! - `crypto::secure_memory`: zeroizing passphrase holder
//!
//! # Example
//!
//! ```rust
//! use hexseal::{decrypt, encrypt};
//!
//! let token = encrypt("correct horse", "attack at dawn")?;
//! let plaintext = decrypt("correct horse", &token)?;
//! assert_eq!(plaintext, "attack at dawn");
//! # Ok::<(), hexseal::HexsealError>(())
//! ```
//!
//! # Concurrency
//!
//! Every operation is a synchronous, stateless function over immutable
//! inputs; nothing is cached or locked, so calls may run concurrently
//! from any number of threads. Key derivation is intentionally slow, and
//! callers needing non-blocking behavior should offload to a worker
//! thread or task.
//!
//! # Integrity caveat
//!
//! CBC mode carries no authentication tag. Tampered ciphertext is
//! rejected by the padding check with high probability, but this is not
//! a cryptographic integrity guarantee; callers that need one should
//! authenticate the token separately.

pub mod crypto;
pub mod error;

pub use crypto::{decrypt, derive_key, encrypt, DerivedKey, Envelope, SecureString};
pub use error::{HexsealError, HexsealResult};
