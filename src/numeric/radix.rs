// ============================================================================
// Radix Conversion
// Digit extraction from native unsigned integers
// ============================================================================

use super::errors::{NumericError, NumericResult};
use arrayvec::ArrayVec;

/// Digit alphabet for bases up to 16.
const ALPHANUM: &[u8; 16] = b"0123456789ABCDEF";

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix.
pub const MAX_RADIX: u32 = 16;

/// Enough room for a u128 written in base 2.
const MAX_DIGITS: usize = u128::BITS as usize;

/// Digits of `value` in `radix`, most significant first.
///
/// Digits are extracted by repeated remainder, least significant first, then
/// reversed. Zero yields the single digit `0`.
///
/// # Errors
/// Returns `InvalidRadix` unless `2 <= radix <= 16`.
pub(crate) fn extract_digits(mut value: u128, radix: u32) -> NumericResult<ArrayVec<u8, MAX_DIGITS>> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(NumericError::InvalidRadix(radix));
    }

    let base = radix as u128;
    let mut digits = ArrayVec::new();
    loop {
        digits.push(ALPHANUM[(value % base) as usize]);
        value /= base;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    Ok(digits)
}

/// Format `value` in `radix` (2..=16), uppercase digits, no prefix.
///
/// # Example
/// ```
/// use big_unsigned::numeric::format_radix;
///
/// assert_eq!(format_radix(255, 16).unwrap(), "FF");
/// assert_eq!(format_radix(5, 2).unwrap(), "101");
/// assert_eq!(format_radix(0, 10).unwrap(), "0");
/// ```
///
/// # Errors
/// Returns `InvalidRadix` unless `2 <= radix <= 16`.
pub fn format_radix(value: u128, radix: u32) -> NumericResult<String> {
    let digits = extract_digits(value, radix)?;
    Ok(digits.iter().map(|&d| d as char).collect())
}
