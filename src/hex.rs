//! Parsing and formatting of `#RRGGBB` colors.

use rgb::RGB8;

/// Errors produced when reading a color from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0' ..= b'9' => Some(c - b'0'),
        b'a' ..= b'f' => Some(c - b'a' + 10),
        b'A' ..= b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a color written as six hexadecimal digits, optionally
/// preceded by a single `#`.  Digits are case-insensitive.
///
/// Nothing else is accepted: no surrounding whitespace, no `#RGB`
/// shorthand and no alpha channel.
///
/// # Example
///
/// ```
/// use brand_contrast::hex::parse_hex;
/// let c = parse_hex("#1e90FF").unwrap();
/// assert_eq!((c.r, c.g, c.b), (0x1E, 0x90, 0xFF));
/// assert!(parse_hex("#12345").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<RGB8, ColorError> {
    let invalid = || ColorError::InvalidColorFormat(input.to_string());
    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();
    if digits.len() != 6 { return Err(invalid()) }
    let channel = |i: usize| -> Result<u8, ColorError> {
        match (nibble(digits[i]), nibble(digits[i + 1])) {
            (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
            _ => Err(invalid()),
        }
    };
    Ok(RGB8::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Return the red, green and blue channels of the color written in
/// `input` (see [`parse_hex`] for the accepted syntax).
#[inline]
pub fn hex_to_rgb(input: &str) -> Result<RGB8, ColorError> { parse_hex(input) }

/// Format the color as `#RRGGBB` with uppercase digits.
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

#[cfg(feature = "serde")]
pub(crate) fn serialize<S>(c: &RGB8, s: S) -> Result<S::Ok, S::Error>
where S: serde::Serializer {
    s.serialize_str(&to_hex(*c))
}
