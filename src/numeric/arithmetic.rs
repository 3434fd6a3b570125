// ============================================================================
// Arithmetic
// Addition, scaling and schoolbook multiplication on decimal digits
// ============================================================================

use super::big_unsigned::BigUnsigned;
use super::digits::{Digits, ONE, ZERO};
use super::errors::NumericResult;
use crate::storage::{DigitBuffer, GrowthPolicy};
use arrayvec::ArrayVec;
use std::ops::{Add, AddAssign, Mul, MulAssign};

impl BigUnsigned {
    // ========================================================================
    // Checked Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// `rhs` is only read. The receiver is consumed and returned holding the
    /// sum.
    ///
    /// # Errors
    /// `AllocationFailure` if a carry into a new digit needs storage that
    /// cannot be allocated. The receiver is dropped in that case.
    #[inline]
    pub fn checked_add<'a>(mut self, rhs: impl Into<Digits<'a>>) -> NumericResult<Self> {
        self.add_in_place(rhs.into())?;
        Ok(self)
    }

    /// Checked increment: adds [`ONE`].
    #[inline]
    pub fn checked_inc(self) -> NumericResult<Self> {
        self.checked_add(ONE)
    }

    /// Multiply by `10^times` by shifting zeros in at the units end.
    ///
    /// No-op for `times == 0` and for zero.
    pub fn checked_scale_pow10(mut self, times: usize) -> NumericResult<Self> {
        self.scale_in_place(times)?;
        Ok(self)
    }

    /// Multiply by a small count through repeated addition.
    ///
    /// Costs `times - 1` additions, so it is meant for small factors only;
    /// [`checked_mul`](Self::checked_mul) is the general multiplication.
    /// `times == 0` yields zero and `times == 1` returns the value unchanged.
    pub fn checked_mul_small(mut self, times: usize) -> NumericResult<Self> {
        match times {
            0 => Self::from_digits_with_policy(ZERO, self.policy()),
            1 => Ok(self),
            _ => {
                let addend = self.try_clone()?;
                for _ in 1..times {
                    self.add_in_place(addend.digits())?;
                }
                Ok(self)
            }
        }
    }

    /// Checked multiplication.
    ///
    /// Schoolbook long multiplication in base 10: the longer operand's
    /// multiples `0x..9x` are built once by repeated addition, then the
    /// multiple for each nonzero digit of the shorter operand is scaled
    /// into place and accumulated.
    pub fn checked_mul<'a>(mut self, rhs: impl Into<Digits<'a>>) -> NumericResult<Self> {
        self.mul_in_place(rhs.into())?;
        Ok(self)
    }

    /// `n!` for `n >= 1`; `0!` is also accepted and is 1.
    ///
    /// # Example
    /// ```
    /// use big_unsigned::BigUnsigned;
    ///
    /// let f = BigUnsigned::factorial(25)?;
    /// assert_eq!(f.to_string(), "15511210043330985984000000");
    /// # Ok::<(), big_unsigned::NumericError>(())
    /// ```
    pub fn factorial(n: usize) -> NumericResult<Self> {
        let mut product = Self::from_digits(ONE)?;
        if n <= 1 {
            return Ok(product);
        }

        let mut counter = Self::from_digits(ONE)?;
        for _ in 2..=n {
            counter.add_in_place(ONE)?;
            product.mul_in_place(counter.digits())?;
        }

        tracing::debug!(n, digits = product.digit_count(), "factorial computed");
        Ok(product)
    }

    // ========================================================================
    // In-place Kernels
    // ========================================================================

    fn add_in_place(&mut self, rhs: Digits<'_>) -> NumericResult<()> {
        if rhs.len() > self.digit_count() {
            // Accumulate into a copy of the longer operand, then move it in
            let mut accumulator = DigitBuffer::from_slice(self.policy(), rhs.as_lsb_slice())?;
            add_into(&mut accumulator, self.digits())?;
            self.replace_buffer(accumulator);
            Ok(())
        } else {
            add_into(self.buffer_mut(), rhs)
        }
    }

    fn scale_in_place(&mut self, times: usize) -> NumericResult<()> {
        if times == 0 || self.is_zero() {
            return Ok(());
        }
        let buffer = self.buffer_mut();
        buffer.grow(times)?;
        buffer.shift_in_zeros(times);
        Ok(())
    }

    fn mul_in_place(&mut self, rhs: Digits<'_>) -> NumericResult<()> {
        let lhs = self.digits();
        let (multiplicand, multiplier) = if lhs.len() < rhs.len() {
            (rhs, lhs)
        } else {
            (lhs, rhs)
        };

        let multiples = multiples_of(multiplicand, self.policy())?;
        let mut product = BigUnsigned::from_digits_with_policy(ZERO, self.policy())?;
        for (position, digit) in multiplier.iter().enumerate() {
            if digit != 0 {
                let mut partial = multiples[digit as usize].try_clone()?;
                partial.scale_in_place(position)?;
                product.add_in_place(partial.digits())?;
            }
        }

        self.replace_buffer(product.into_buffer());
        Ok(())
    }
}

/// `0·x, 1·x, ..., 9·x`, each built from the previous one with one addition.
fn multiples_of(
    multiplicand: Digits<'_>,
    policy: GrowthPolicy,
) -> NumericResult<ArrayVec<BigUnsigned, 10>> {
    let mut multiples = ArrayVec::new();
    let mut current = BigUnsigned::from_digits_with_policy(ZERO, policy)?;
    for _ in 0..9 {
        let mut next = current.try_clone()?;
        next.add_in_place(multiplicand)?;
        multiples.push(current);
        current = next;
    }
    multiples.push(current);
    Ok(multiples)
}

/// Add `addend` into `accumulator` with carry, growing by one digit on overflow.
///
/// `accumulator` must have at least as many digits as `addend`.
fn add_into(accumulator: &mut DigitBuffer, addend: Digits<'_>) -> NumericResult<()> {
    debug_assert!(accumulator.len() >= addend.len());

    let mut carry = 0u8;
    let digits = accumulator.as_mut_slice();
    for (slot, digit) in digits.iter_mut().zip(addend.iter()) {
        let sum = (*slot - b'0') + digit + carry;
        *slot = b'0' + sum % 10;
        carry = sum / 10;
    }

    // Only the carry remains past the addend's length
    for slot in digits[addend.len()..].iter_mut() {
        if carry == 0 {
            break;
        }
        let sum = (*slot - b'0') + carry;
        *slot = b'0' + sum % 10;
        carry = sum / 10;
    }

    if carry == 1 {
        accumulator.grow(1)?;
        accumulator.push(b'1');
    }
    Ok(())
}

// ============================================================================
// Operators
// ============================================================================

// Infallible operators for ergonomics (panic on allocation failure - use checked_* in production)
impl<'a> Add<&'a BigUnsigned> for BigUnsigned {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &'a BigUnsigned) -> Self::Output {
        self.checked_add(rhs).expect("BigUnsigned addition allocation failure")
    }
}

impl<'a> Add<Digits<'a>> for BigUnsigned {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Digits<'a>) -> Self::Output {
        self.checked_add(rhs).expect("BigUnsigned addition allocation failure")
    }
}

impl<'a> AddAssign<&'a BigUnsigned> for BigUnsigned {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BigUnsigned) {
        self.add_in_place(rhs.digits())
            .expect("BigUnsigned addition allocation failure");
    }
}

impl<'a> Mul<&'a BigUnsigned> for BigUnsigned {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: &'a BigUnsigned) -> Self::Output {
        self.checked_mul(rhs).expect("BigUnsigned multiplication allocation failure")
    }
}

impl<'a> MulAssign<&'a BigUnsigned> for BigUnsigned {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a BigUnsigned) {
        self.mul_in_place(rhs.digits())
            .expect("BigUnsigned multiplication allocation failure");
    }
}

// ============================================================================
// Tests
// ============================================================================
