// ============================================================================
// Numeric Module
// Arbitrary-precision unsigned decimal arithmetic
// ============================================================================
//
// This module provides:
// - BigUnsigned: owned decimal integer of unbounded magnitude
// - Digits: read-only digit view, plus the ZERO/ONE constants
// - NumericError: error types for allocation and conversion failures
// - format_radix: native integer to digit string in bases 2-16
//
// Design principles:
// - Digits stored as ASCII, least significant first
// - Receivers are moved in and handed back; operands are read-only views
// - Allocation failure is an error, never a truncated number
// - Constants are views, so they can never be mutated in place

mod arithmetic;
mod big_unsigned;
mod digits;
mod errors;
mod radix;

pub use big_unsigned::BigUnsigned;
pub use digits::{Digits, ONE, ZERO};
pub use errors::{NumericError, NumericResult};
pub use radix::{format_radix, MAX_RADIX, MIN_RADIX};
