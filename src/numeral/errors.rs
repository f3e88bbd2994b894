// ============================================================================
// Numeral Errors
// Error types for numeral validation, conversion and arithmetic
// ============================================================================

use super::validator::Radix;
use std::fmt;

/// Errors that can occur while parsing, converting or computing numerals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Input string does not match the numeral grammar of `radix`
    InvalidNumeral { text: String, radix: Radix },
    /// Attempted division by a zero-valued numeral
    DivisionByZero,
    /// Result left the representable decimal range
    Overflow,
}

impl NumeralError {
    /// Build an `InvalidNumeral` for the offending text.
    pub fn invalid(text: impl Into<String>, radix: Radix) -> Self {
        NumeralError::InvalidNumeral {
            text: text.into(),
            radix,
        }
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::InvalidNumeral { text, radix } => {
                write!(f, "{:?} is not a valid {} number", text, radix)
            },
            NumeralError::DivisionByZero => write!(f, "division by zero"),
            NumeralError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded the decimal range")
            },
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
