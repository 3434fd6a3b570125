// ============================================================================
// Digit Buffer
// Growable least-significant-first storage for decimal digits
// ============================================================================

use super::policy::GrowthPolicy;
use crate::numeric::{NumericError, NumericResult};

/// Owned storage for ASCII decimal digits, units digit at index 0.
///
/// The buffer tracks a *logical* capacity chosen by its [`GrowthPolicy`];
/// the backing `Vec` always holds at least that much. All allocation goes
/// through `try_reserve_exact`, so running out of memory is reported as
/// [`NumericError::AllocationFailure`] instead of aborting.
///
/// The buffer does not enforce digit-level invariants (canonical zero, no
/// leading zeros). Those belong to [`BigUnsigned`](crate::BigUnsigned).
#[derive(Debug)]
pub struct DigitBuffer {
    /// ASCII digits, least significant first
    bytes: Vec<u8>,

    /// Logical capacity, always `policy.capacity_for(..)` of some digit count
    capacity: usize,

    /// Growth policy this buffer was created with
    policy: GrowthPolicy,
}

impl DigitBuffer {
    /// Allocate an empty buffer with room for `digits` digits.
    ///
    /// # Errors
    /// `AllocationFailure` or `CapacityOverflow` if the storage cannot be reserved.
    pub fn with_digits(policy: GrowthPolicy, digits: usize) -> NumericResult<Self> {
        let capacity = policy.capacity_for(digits)?;
        let mut bytes = Vec::new();
        reserve(&mut bytes, capacity)?;
        Ok(Self {
            bytes,
            capacity,
            policy,
        })
    }

    /// Allocate a buffer holding a copy of `digits` (least significant first).
    pub fn from_slice(policy: GrowthPolicy, digits: &[u8]) -> NumericResult<Self> {
        let mut buffer = Self::with_digits(policy, digits.len())?;
        buffer.bytes.extend_from_slice(digits);
        Ok(buffer)
    }

    /// Copy this buffer. The copy is sized for its digit count, not for the
    /// source's capacity.
    pub fn try_clone(&self) -> NumericResult<Self> {
        Self::from_slice(self.policy, &self.bytes)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of stored digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if no digit has been stored yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Logical capacity chosen by the growth policy.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Growth policy of this buffer.
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Stored digits, least significant first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view of the stored digits.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    // ========================================================================
    // Growth
    // ========================================================================

    /// Make room for `digit_inc` more digits.
    ///
    /// Only reallocates when `len + digit_inc` lands in a different chunk
    /// multiple than the current capacity. Stored digits are preserved.
    ///
    /// # Errors
    /// `AllocationFailure` if the allocator refuses the request. The caller
    /// must not keep using the value that owns this buffer.
    pub fn grow(&mut self, digit_inc: usize) -> NumericResult<()> {
        let required = self
            .bytes
            .len()
            .checked_add(digit_inc)
            .ok_or(NumericError::CapacityOverflow)?;
        let capacity = self.policy.capacity_for(required)?;
        if capacity > self.capacity {
            reserve(&mut self.bytes, capacity)?;
            tracing::trace!(
                digits = required,
                from = self.capacity,
                to = capacity,
                "digit buffer reallocated"
            );
            self.capacity = capacity;
        }
        Ok(())
    }

    /// Append a digit at the most significant end.
    ///
    /// Callers must have made room with [`grow`](Self::grow) first.
    #[inline]
    pub fn push(&mut self, digit: u8) {
        debug_assert!(digit.is_ascii_digit());
        debug_assert!(self.bytes.len() < self.capacity);
        self.bytes.push(digit);
    }

    /// Append a run of digits at the most significant end.
    pub fn extend_from_slice(&mut self, digits: &[u8]) {
        debug_assert!(self.bytes.len() + digits.len() <= self.capacity);
        self.bytes.extend_from_slice(digits);
    }

    /// Insert `count` zero digits at the least significant end.
    ///
    /// Callers must have made room with [`grow`](Self::grow) first.
    pub fn shift_in_zeros(&mut self, count: usize) {
        debug_assert!(self.bytes.len() + count <= self.capacity);
        self.bytes.splice(0..0, std::iter::repeat_n(b'0', count));
    }

    /// Reverse the stored digit order in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.bytes.reverse();
    }
}

/// Ensure `bytes` can hold `capacity` elements without reallocating.
fn reserve(bytes: &mut Vec<u8>, capacity: usize) -> NumericResult<()> {
    let additional = capacity.saturating_sub(bytes.len());
    bytes.try_reserve_exact(additional).map_err(|_| {
        tracing::warn!(requested = capacity, "digit buffer allocation failed");
        NumericError::AllocationFailure {
            requested: capacity,
        }
    })
}
