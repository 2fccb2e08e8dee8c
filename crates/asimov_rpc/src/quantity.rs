//! Conversions between integers and the `0x`-prefixed hexadecimal quantity
//! encoding used on the wire.

use alloy_primitives::U256;

/// Error that occurs when decoding a quantity string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The value lacks the `0x` prefix.
    #[error("quantity '{0}' is missing the 0x prefix")]
    MissingPrefix(String),
    /// The value has no digits after the prefix.
    #[error("quantity '{0}' has no digits")]
    Empty(String),
    /// The value contains a non-hexadecimal digit.
    #[error("quantity '{0}' contains invalid hex digits")]
    InvalidDigits(String),
    /// The value does not fit the target integer type.
    #[error("quantity '{0}' overflows the target type")]
    Overflow(String),
}

/// Encodes an integer as a quantity: lowercase hex, `0x`-prefixed, without
/// leading zero digits. Zero encodes as `0x0`.
pub fn encode_u64(value: u64) -> String {
    format!("0x{value:x}")
}

/// Decodes a quantity string into a `u64`.
pub fn decode_u64(value: &str) -> Result<u64, FormatError> {
    let digits = strip_prefix(value)?;

    u64::from_str_radix(digits, 16).map_err(|_| {
        if digits.chars().all(|c| c.is_ascii_hexdigit()) {
            FormatError::Overflow(value.to_string())
        } else {
            FormatError::InvalidDigits(value.to_string())
        }
    })
}

/// Encodes an arbitrary-precision integer as a quantity, in the same format
/// as [`encode_u64`].
pub fn encode_u256(value: &U256) -> String {
    format!("0x{value:x}")
}

/// Decodes a quantity string into a `U256`.
pub fn decode_u256(value: &str) -> Result<U256, FormatError> {
    let digits = strip_prefix(value)?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FormatError::InvalidDigits(value.to_string()));
    }

    U256::from_str_radix(digits, 16).map_err(|_| FormatError::Overflow(value.to_string()))
}

fn strip_prefix(value: &str) -> Result<&str, FormatError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| FormatError::MissingPrefix(value.to_string()))?;

    if digits.is_empty() {
        return Err(FormatError::Empty(value.to_string()));
    }

    Ok(digits)
}
