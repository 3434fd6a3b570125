// ============================================================================
// Digit Views
// Read-only digit sequences and the process-wide constants
// ============================================================================

use std::cmp::Ordering;
use std::fmt;

/// Read-only view over decimal digits stored least significant first.
///
/// Every operand position of the arithmetic API takes `impl Into<Digits>`,
/// so both an owned [`BigUnsigned`](crate::BigUnsigned) (by reference) and
/// the [`ZERO`]/[`ONE`] constants can be passed. Nothing can be mutated
/// through a `Digits`, which is what keeps the constants immutable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits<'a>(&'a [u8]);

/// Canonical zero: one digit, `0`.
pub const ZERO: Digits<'static> = Digits(b"0");

/// One: one digit, `1`.
pub const ONE: Digits<'static> = Digits(b"1");

impl<'a> Digits<'a> {
    /// Wrap an already canonical least-significant-first digit slice.
    pub(crate) const fn from_lsb(digits: &'a [u8]) -> Self {
        Self(digits)
    }

    /// Number of significant digits.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.len()
    }

    /// Always false for a canonical value; zero still has one digit.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// True for the canonical zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == b"0"
    }

    /// Raw storage, least significant first.
    #[inline]
    pub const fn as_lsb_slice(self) -> &'a [u8] {
        self.0
    }

    /// Digit value (0-9) at decimal position `position` (0 = units).
    #[inline]
    pub fn digit(self, position: usize) -> Option<u8> {
        self.0.get(position).map(|d| d - b'0')
    }

    /// Digit values (0-9), least significant first.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + 'a {
        self.0.iter().map(|d| d - b'0')
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare two values the way the storage layout orders them.
    ///
    /// A value with fewer digits is smaller. With equal digit counts the
    /// storage is scanned from index 0, i.e. from the *units* digit upward,
    /// and the first differing digit decides. That is not numeric order when
    /// two equal-length values differ in more than one place: `19` compares
    /// greater than `21` here. Use [`numeric_cmp`](Self::numeric_cmp) (or
    /// `Ord` on [`BigUnsigned`](crate::BigUnsigned)) for magnitude order.
    pub fn compare(self, other: Digits<'_>) -> Ordering {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => self
                .0
                .iter()
                .zip(other.0)
                .find(|(a, b)| a != b)
                .map_or(Ordering::Equal, |(a, b)| a.cmp(b)),
            unequal => unequal,
        }
    }

    /// Compare two values by magnitude.
    ///
    /// Digit count decides first; ties are broken from the most
    /// significant digit down.
    pub fn numeric_cmp(self, other: Digits<'_>) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
    }
}

impl fmt::Display for Digits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().rev().map(|&d| d as char).collect();
        f.pad_integral(true, "", &text)
    }
}

impl fmt::Debug for Digits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digits({})", self)
    }
}
