// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or growing a big unsigned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// The allocator could not provide `requested` digit slots
    AllocationFailure { requested: usize },
    /// Required capacity does not fit in usize
    CapacityOverflow,
    /// Radix outside the supported 2..=16 range
    InvalidRadix(u32),
    /// Growth policy with a zero chunk size
    InvalidPolicy,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::AllocationFailure { requested } => {
                write!(f, "allocation failure: could not reserve {} digits", requested)
            },
            NumericError::CapacityOverflow => {
                write!(f, "capacity overflow: digit count exceeds addressable storage")
            },
            NumericError::InvalidRadix(radix) => {
                write!(f, "invalid radix {}: expected a value in 2..=16", radix)
            },
            NumericError::InvalidPolicy => write!(f, "invalid growth policy: chunk size must be positive"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::AllocationFailure { requested: 514 }.to_string(),
            "allocation failure: could not reserve 514 digits"
        );
        assert_eq!(
            NumericError::InvalidRadix(17).to_string(),
            "invalid radix 17: expected a value in 2..=16"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::CapacityOverflow, NumericError::CapacityOverflow);
        assert_ne!(NumericError::InvalidRadix(1), NumericError::InvalidRadix(17));
    }
}
