// ============================================================================
// Growth Policy
// Chunked capacity configuration for digit buffers
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

/// Default allocation granularity, in digits.
pub const DEFAULT_CHUNK_DIGITS: usize = 256;

/// Extra slots on top of every chunk multiple (terminator + one slack slot).
pub const CAPACITY_SLACK: usize = 2;

/// Controls how much storage a digit buffer reserves.
///
/// Capacity is always the required digit count rounded up to the next
/// multiple of `chunk_digits`, plus [`CAPACITY_SLACK`]. A buffer only
/// reallocates when its digit count crosses into a different chunk multiple,
/// so appending digits one at a time costs O(1) amortized.
///
/// # Example
/// ```
/// use big_unsigned::storage::GrowthPolicy;
///
/// let policy = GrowthPolicy::default();
/// assert_eq!(policy.capacity_for(0).unwrap(), 258);
/// assert_eq!(policy.capacity_for(255).unwrap(), 258);
/// assert_eq!(policy.capacity_for(256).unwrap(), 514);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    chunk_digits: usize,
}

impl GrowthPolicy {
    /// Policy used when none is given explicitly.
    pub const DEFAULT: Self = Self {
        chunk_digits: DEFAULT_CHUNK_DIGITS,
    };

    /// Create a policy with the given chunk size.
    ///
    /// # Errors
    /// Returns `InvalidPolicy` if `chunk_digits` is zero.
    pub fn new(chunk_digits: usize) -> NumericResult<Self> {
        let policy = Self { chunk_digits };
        policy.validate()?;
        Ok(policy)
    }

    /// Builder method: set the chunk size
    pub fn with_chunk_digits(mut self, chunk_digits: usize) -> Self {
        self.chunk_digits = chunk_digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.chunk_digits == 0 {
            return Err(NumericError::InvalidPolicy);
        }
        Ok(())
    }

    /// Allocation granularity in digits.
    #[inline]
    pub const fn chunk_digits(&self) -> usize {
        self.chunk_digits
    }

    /// Storage size to reserve for `digits` significant digits.
    ///
    /// The result is always at least `digits + 2`.
    ///
    /// # Errors
    /// Returns `CapacityOverflow` if the size does not fit in `usize`, and
    /// `InvalidPolicy` for a zero chunk size built through
    /// [`with_chunk_digits`](Self::with_chunk_digits).
    pub fn capacity_for(&self, digits: usize) -> NumericResult<usize> {
        self.validate()?;
        let chunks = digits
            .checked_add(self.chunk_digits)
            .ok_or(NumericError::CapacityOverflow)?
            / self.chunk_digits;
        chunks
            .checked_mul(self.chunk_digits)
            .and_then(|c| c.checked_add(CAPACITY_SLACK))
            .ok_or(NumericError::CapacityOverflow)
    }
}

impl Default for GrowthPolicy {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.chunk_digits(), 256);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_capacity_for_chunk_boundaries() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.capacity_for(0).unwrap(), 258);
        assert_eq!(policy.capacity_for(1).unwrap(), 258);
        assert_eq!(policy.capacity_for(128).unwrap(), 258);
        assert_eq!(policy.capacity_for(255).unwrap(), 258);
        assert_eq!(policy.capacity_for(256).unwrap(), 514);
        assert_eq!(policy.capacity_for(511).unwrap(), 514);
        assert_eq!(policy.capacity_for(512).unwrap(), 770);
    }

    #[test]
    fn test_capacity_leaves_room_for_terminator() {
        let policy = GrowthPolicy::new(4).unwrap();
        for digits in 0..64 {
            assert!(policy.capacity_for(digits).unwrap() >= digits + 1);
        }
    }

    #[test]
    fn test_small_chunk() {
        let policy = GrowthPolicy::new(10).unwrap();
        assert_eq!(policy.capacity_for(9).unwrap(), 12);
        assert_eq!(policy.capacity_for(10).unwrap(), 22);
    }

    #[test]
    fn test_zero_chunk_rejected() {
        assert_eq!(GrowthPolicy::new(0), Err(NumericError::InvalidPolicy));

        let policy = GrowthPolicy::default().with_chunk_digits(0);
        assert_eq!(policy.validate(), Err(NumericError::InvalidPolicy));
        assert_eq!(policy.capacity_for(1), Err(NumericError::InvalidPolicy));
    }

    #[test]
    fn test_capacity_overflow() {
        let policy = GrowthPolicy::default();
        assert_eq!(
            policy.capacity_for(usize::MAX),
            Err(NumericError::CapacityOverflow)
        );
    }
}
