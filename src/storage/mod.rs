// ============================================================================
// Storage Module
// Digit storage and its amortized growth policy
// ============================================================================
//
// This module provides:
// - GrowthPolicy: chunked capacity configuration (256-digit chunks by default)
// - DigitBuffer: least-significant-first digit storage with fallible growth

mod digit_buffer;
mod policy;

pub use digit_buffer::DigitBuffer;
pub use policy::{GrowthPolicy, CAPACITY_SLACK, DEFAULT_CHUNK_DIGITS};
