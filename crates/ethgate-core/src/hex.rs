//! The `0x` hex convention: lowercase, leading zeros stripped for
//! numbers (a lone zero encodes as `"0x0"`, never `"0x"`).
//!
//! Encoding is strict; decoding of numbers is lenient but explicit:
//! the numeric parsers return `None` on any malformed input so that
//! callers classify it as a decode failure instead of coercing to zero.

use primitive_types::U256;

use crate::error::DecodeError;

/// Encode a byte buffer as `"0x"` + lowercase hex.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode a hex byte string. The `0x` prefix is optional.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>, DecodeError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|e| match e {
        hex::FromHexError::OddLength => DecodeError::OddLength,
        _ => DecodeError::InvalidHex,
    })
}

/// Encode an integer with leading zeros stripped. Zero is `"0x0"`.
pub fn u64_to_hex(n: u64) -> String {
    format!("{n:#x}")
}

/// Encode a big unsigned integer with leading zeros stripped.
pub fn u256_to_hex(n: U256) -> String {
    format!("{n:#x}")
}

/// Parse a hex-convention integer. `None` on any non-hex character.
pub fn hex_to_u64(s: &str) -> Option<u64> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    // from_str_radix tolerates a leading `+`; hex digits only here
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// Parse a hex-convention big unsigned integer. `None` on malformed
/// input.
pub fn hex_to_u256(s: &str) -> Option<U256> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    U256::from_str_radix(digits, 16).ok()
}
