// ============================================================================
// Big Unsigned
// Arbitrary-precision non-negative decimal integer
// ============================================================================

use super::digits::{Digits, ZERO};
use super::errors::{NumericError, NumericResult};
use super::radix;
use crate::storage::{DigitBuffer, GrowthPolicy};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Arbitrary-precision unsigned decimal integer.
///
/// Digits are kept as ASCII, least significant first, in a [`DigitBuffer`]
/// that grows in chunks (see [`GrowthPolicy`]). A value always has at
/// least one digit and never stores leading zeros; zero is the single
/// digit `0`.
///
/// Arithmetic takes the receiver by value and hands it back, so a value is
/// never aliased while it is being rewritten:
///
/// ```
/// use big_unsigned::{BigUnsigned, ONE};
///
/// let x = BigUnsigned::parse("999")?;
/// let x = x.checked_add(ONE)?.checked_scale_pow10(2)?;
/// assert_eq!(x.to_string(), "100000");
/// # Ok::<(), big_unsigned::NumericError>(())
/// ```
///
/// If an operation fails (the allocator refuses to grow the buffer) the
/// receiver has already been moved in and is dropped with the error.
pub struct BigUnsigned {
    buffer: DigitBuffer,
}

impl BigUnsigned {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse decimal digits out of arbitrary text.
    ///
    /// Every byte that is not an ASCII digit is skipped, so separators of
    /// any kind are allowed (`"18 446 744"`, `"32_936"`). Leading zeros are
    /// dropped. Input without a significant digit yields zero.
    ///
    /// # Errors
    /// Only fails when storage cannot be allocated.
    pub fn parse(text: impl AsRef<[u8]>) -> NumericResult<Self> {
        Self::parse_with_policy(text, GrowthPolicy::DEFAULT)
    }

    /// [`parse`](Self::parse) with an explicit growth policy.
    pub fn parse_with_policy(text: impl AsRef<[u8]>, policy: GrowthPolicy) -> NumericResult<Self> {
        let text = text.as_ref();

        // First pass sizes the buffer, second pass fills it
        let count = significant_digits(text).count();
        if count == 0 {
            return Self::from_digits_with_policy(ZERO, policy);
        }

        let mut buffer = DigitBuffer::with_digits(policy, count)?;
        for digit in significant_digits(text) {
            buffer.push(digit);
        }
        buffer.reverse();
        Ok(Self { buffer })
    }

    /// Create from a native unsigned integer.
    pub fn from_integer(value: u128) -> NumericResult<Self> {
        Self::from_integer_with_policy(value, GrowthPolicy::DEFAULT)
    }

    /// [`from_integer`](Self::from_integer) with an explicit growth policy.
    pub fn from_integer_with_policy(value: u128, policy: GrowthPolicy) -> NumericResult<Self> {
        let digits = radix::extract_digits(value, 10)?;
        Self::parse_with_policy(digits.as_slice(), policy)
    }

    /// Create an owned copy of a digit view, typically [`ZERO`] or
    /// [`ONE`](super::ONE).
    pub fn from_digits(digits: Digits<'_>) -> NumericResult<Self> {
        Self::from_digits_with_policy(digits, GrowthPolicy::DEFAULT)
    }

    /// [`from_digits`](Self::from_digits) with an explicit growth policy.
    pub fn from_digits_with_policy(digits: Digits<'_>, policy: GrowthPolicy) -> NumericResult<Self> {
        debug_assert!(!digits.is_empty());
        let buffer = DigitBuffer::from_slice(policy, digits.as_lsb_slice())?;
        Ok(Self { buffer })
    }

    /// Copy this value. The copy is sized for its digit count.
    ///
    /// The `Clone` impl does the same but panics on allocation failure.
    pub fn try_clone(&self) -> NumericResult<Self> {
        Ok(Self {
            buffer: self.buffer.try_clone()?,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of significant decimal digits (at least 1).
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.buffer.len()
    }

    /// Storage currently reserved, in digits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Growth policy of this value.
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.buffer.policy()
    }

    /// Read-only view of the digits.
    #[inline]
    pub fn digits(&self) -> Digits<'_> {
        Digits::from_lsb(self.buffer.as_slice())
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits().is_zero()
    }

    /// Check if value is one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.buffer.as_slice() == b"1"
    }

    /// Compare with the storage-order tie-break of [`Digits::compare`].
    #[inline]
    pub fn compare<'a>(&self, other: impl Into<Digits<'a>>) -> Ordering {
        self.digits().compare(other.into())
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut DigitBuffer {
        &mut self.buffer
    }

    /// Take over `buffer` as this value's storage, releasing the old one.
    pub(crate) fn replace_buffer(&mut self, buffer: DigitBuffer) {
        debug_assert!(!buffer.is_empty());
        self.buffer = buffer;
    }

    pub(crate) fn into_buffer(self) -> DigitBuffer {
        self.buffer
    }
}

/// Significant digits of `text` in reading order: digits only, leading zeros skipped.
fn significant_digits(text: &[u8]) -> impl Iterator<Item = u8> + '_ {
    text.iter()
        .copied()
        .filter(u8::is_ascii_digit)
        .skip_while(|&d| d == b'0')
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<'a> From<&'a BigUnsigned> for Digits<'a> {
    #[inline]
    fn from(value: &'a BigUnsigned) -> Self {
        value.digits()
    }
}

impl Clone for BigUnsigned {
    fn clone(&self) -> Self {
        self.try_clone().expect("BigUnsigned clone allocation failure")
    }
}

impl Default for BigUnsigned {
    fn default() -> Self {
        Self::from_digits(ZERO).expect("BigUnsigned allocation failure")
    }
}

impl From<Digits<'_>> for BigUnsigned {
    fn from(digits: Digits<'_>) -> Self {
        Self::from_digits(digits).expect("BigUnsigned allocation failure")
    }
}

macro_rules! impl_from_unsigned {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUnsigned {
        fn from(value: $u) -> Self {
            Self::from_integer(value as u128).expect("BigUnsigned allocation failure")
        }
    }
    )*
    };
}
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl FromStr for BigUnsigned {
    type Err = NumericError;

    /// Same as [`BigUnsigned::parse`]: never rejects input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for BigUnsigned {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.buffer.as_slice() == other.buffer.as_slice()
    }
}

impl Eq for BigUnsigned {}

impl PartialEq<Digits<'_>> for BigUnsigned {
    #[inline]
    fn eq(&self, other: &Digits<'_>) -> bool {
        self.digits() == *other
    }
}

impl PartialOrd for BigUnsigned {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Magnitude order, unlike [`BigUnsigned::compare`].
impl Ord for BigUnsigned {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits().numeric_cmp(other.digits())
    }
}

impl Hash for BigUnsigned {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.as_slice().hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.digits(), f)
    }
}

impl fmt::Debug for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BigUnsigned({}, digits={}, capacity={})",
            self,
            self.digit_count(),
            self.capacity()
        )
    }
}

// ============================================================================
// Serde (decimal string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigUnsigned {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigUnsigned {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
