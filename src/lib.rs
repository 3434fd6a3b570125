// ============================================================================
// Big Unsigned Library
// Arbitrary-precision unsigned decimal integers
// ============================================================================

//! # Big Unsigned
//!
//! Non-negative integers of unbounded magnitude, stored as a growable
//! buffer of decimal digits.
//!
//! ## Features
//!
//! - **Lenient parsing**: any non-digit byte is a separator
//! - **Chunked storage**: buffers grow in 256-digit chunks, O(1) amortized per digit
//! - **Schoolbook multiplication** from a table of single-digit multiples
//! - **Fallible growth**: allocation failure is reported, never truncated
//! - **Immutable constants**: [`ZERO`] and [`ONE`] are views, not values
//!
//! ## Example
//!
//! ```rust
//! use big_unsigned::prelude::*;
//!
//! let a = BigUnsigned::parse("9 223 372 036 854 775 807")?;
//! let b = BigUnsigned::parse("9_223_372_036_854_775_807")?;
//!
//! let product = a.checked_mul(&b)?;
//! assert_eq!(product.to_string(), "85070591730234615847396907784232501249");
//!
//! let next = product.checked_inc()?;
//! assert_eq!(next.to_string(), "85070591730234615847396907784232501250");
//!
//! let f = BigUnsigned::factorial(30)?;
//! assert_eq!(f.to_string(), "265252859812191058636308480000000");
//! # Ok::<(), NumericError>(())
//! ```

pub mod numeric;
pub mod storage;

pub use numeric::{BigUnsigned, Digits, NumericError, NumericResult, ONE, ZERO};

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        format_radix, BigUnsigned, Digits, NumericError, NumericResult, ONE, ZERO,
    };
    pub use crate::storage::GrowthPolicy;
}


#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;
    use std::cmp::Ordering;

    fn decimal_string() -> impl Strategy<Value = String> {
        "[1-9][0-9]{0,300}|0"
    }

    proptest! {
        #[test]
        fn prop_add_commutes(a in decimal_string(), b in decimal_string()) {
            let a = BigUnsigned::parse(&a).unwrap();
            let b = BigUnsigned::parse(&b).unwrap();
            let ab = a.try_clone().unwrap().checked_add(&b).unwrap();
            let ba = b.checked_add(&a).unwrap();
            prop_assert_eq!(ab.to_string(), ba.to_string());
        }

        #[test]
        fn prop_mul_commutes(a in decimal_string(), b in decimal_string()) {
            let a = BigUnsigned::parse(&a).unwrap();
            let b = BigUnsigned::parse(&b).unwrap();
            let ab = a.try_clone().unwrap().checked_mul(&b).unwrap();
            let ba = b.checked_mul(&a).unwrap();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn prop_add_matches_native(a in any::<u64>(), b in any::<u64>()) {
            let sum = BigUnsigned::from(a).checked_add(&BigUnsigned::from(b)).unwrap();
            prop_assert_eq!(sum.to_string(), (a as u128 + b as u128).to_string());
        }

        #[test]
        fn prop_mul_matches_native(a in any::<u64>(), b in any::<u64>()) {
            let product = BigUnsigned::from(a).checked_mul(&BigUnsigned::from(b)).unwrap();
            prop_assert_eq!(product.to_string(), (a as u128 * b as u128).to_string());
        }

        #[test]
        fn prop_mul_small_is_repeated_add(a in decimal_string(), times in 0usize..20) {
            let x = BigUnsigned::parse(&a).unwrap();
            let by_addition = x.try_clone().unwrap().checked_mul_small(times).unwrap();
            let by_product = x.checked_mul(&BigUnsigned::from(times)).unwrap();
            prop_assert_eq!(by_addition, by_product);
        }

        #[test]
        fn prop_integer_round_trip(n in any::<u128>()) {
            let x = BigUnsigned::from_integer(n).unwrap();
            let back = BigUnsigned::parse(x.to_string()).unwrap();
            prop_assert_eq!(back.compare(&x), Ordering::Equal);
            prop_assert_eq!(x.to_string(), n.to_string());
        }

        #[test]
        fn prop_numeric_order_matches_native(a in any::<u64>(), b in any::<u64>()) {
            let x = BigUnsigned::from(a);
            let y = BigUnsigned::from(b);
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn prop_capacity_invariant(a in decimal_string(), shift in 0usize..600) {
            let x = BigUnsigned::parse(&a).unwrap().checked_scale_pow10(shift).unwrap();
            prop_assert!(x.capacity() >= x.digit_count() + 1);
        }
    }

    quickcheck! {
        fn qc_parse_ignores_separators(n: u64) -> bool {
            let separated: String = n
                .to_string()
                .chars()
                .flat_map(|c| [c, '_'])
                .collect();
            BigUnsigned::parse(&separated).unwrap() == BigUnsigned::from(n)
        }
    }
}
