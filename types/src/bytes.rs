//! Hex, base64, and fixed-width integer helpers for wire data.

use crate::{CodecError, Result};
use base64::{engine::general_purpose, Engine as _};

/// Encode bytes as lowercase hex, two characters per byte, no separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes.
///
/// Input is trimmed and case-insensitive. An odd trimmed length is
/// rejected before any pair is parsed.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    let normalized = input.trim();
    if normalized.len() % 2 != 0 {
        return Err(CodecError::OddHexLength);
    }
    Ok(hex::decode(normalized)?)
}

/// Interpret 4 bytes at `offset` as a big-endian unsigned 32-bit integer.
pub fn read_u32_be(buf: &[u8], offset: usize) -> Result<u32> {
    let end = offset.checked_add(4).ok_or(CodecError::EndOfBuffer)?;
    let bytes = buf.get(offset..end).ok_or(CodecError::EndOfBuffer)?;
    let array: [u8; 4] = bytes.try_into().map_err(|_| CodecError::EndOfBuffer)?;
    Ok(u32::from_be_bytes(array))
}

/// Standard base64 over raw bytes, as used for embedded log payloads.
pub fn base64_encode(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Inverse of [`base64_encode`].
pub fn base64_decode(input: &str) -> Result<Vec<u8>> {
    Ok(general_purpose::STANDARD.decode(input)?)
}
