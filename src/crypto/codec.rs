//! Text/byte/hex conversions
//!
//! Pure, stateless conversions between Unicode text, raw bytes, and
//! lowercase hexadecimal text. This is the leaf layer of the crate;
//! everything above it builds on these functions.

use crate::error::HexsealResult;

/// Encode text as its UTF-8 byte representation.
///
/// Total for every Rust string; never fails.
pub fn text_to_bytes(text: &str) -> &[u8] {
    text.as_bytes()
}

/// Decode a byte sequence back into text.
///
/// Fails with [`HexsealError::Decoding`](crate::HexsealError::Decoding)
/// if the bytes are not valid UTF-8.
pub fn bytes_to_text(bytes: Vec<u8>) -> HexsealResult<String> {
    Ok(String::from_utf8(bytes)?)
}

/// Encode bytes as lowercase hex, two digits per byte.
///
/// Output length is exactly twice the input length.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse a hex string into its byte sequence.
///
/// Fails with [`HexsealError::MalformedHex`](crate::HexsealError::MalformedHex)
/// if the input has odd length or contains non-hex characters.
pub fn hex_to_bytes(hex_str: &str) -> HexsealResult<Vec<u8>> {
    Ok(hex::decode(hex_str)?)
}
