//! Byte-token parsing.
//!
//! Each whitespace-separated token typed at the terminal is parsed
//! independently into a byte value. A `$` or `0x` prefix selects
//! hexadecimal; anything else is decimal.

use thiserror::Error;

/// Why a token could not be turned into a byte.
///
/// The display strings are exactly the per-token diagnostics printed by the
/// terminal loop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Not a number.")]
    NotANumber,

    #[error("Number must be between 0 and 255")]
    OutOfRange,
}

/// Parse a single token into a byte value.
///
/// A `$` or `0x` prefix commits the token to the hexadecimal parse path;
/// malformed digits after the prefix surface as [`TokenError::NotANumber`],
/// not as a fallback to decimal. Unprefixed tokens are decimal only.
/// Values that parse but fall outside `[0, 255]` (including negatives)
/// yield [`TokenError::OutOfRange`].
pub fn parse_byte(token: &str) -> Result<u8, TokenError> {
    let (digits, radix) = if let Some(rest) = token.strip_prefix('$') {
        (rest, 16)
    } else if let Some(rest) = token.strip_prefix("0x") {
        (rest, 16)
    } else {
        (token, 10)
    };

    let value = i64::from_str_radix(digits, radix).map_err(|_| TokenError::NotANumber)?;
    u8::try_from(value).map_err(|_| TokenError::OutOfRange)
}
