// ============================================================================
// Dozenal Library
// Base-12 numerals with exact decimal-domain arithmetic
// ============================================================================

//! # Dozenal
//!
//! Parsing, formatting and arithmetic for base-12 ("dozenal") numerals.
//!
//! ## Features
//!
//! - **Digit alphabet** `0123456789XE`, with `X` = ten and `E` = eleven
//! - **Fractional parts** in both directions, truncated to a configurable
//!   number of dozenal digits (12 by default)
//! - **Exact decimal arithmetic** backed by `rust_decimal`
//! - **No panics**: every fallible operation returns [`numeral::NumeralResult`]
//!
//! ## Example
//!
//! ```rust
//! use dozenal::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let gross: Dozenal = "100".parse().unwrap();
//! assert_eq!(gross.decimal(), Decimal::from(144));
//!
//! let dozen = Dozenal::from_integer(12).unwrap();
//! assert_eq!(dozen.as_str(), "10");
//!
//! let quotient = (&gross / &dozen).unwrap();
//! assert_eq!(quotient.as_str(), "10");
//!
//! let err = (&gross / &Dozenal::from_integer(0).unwrap()).unwrap_err();
//! assert_eq!(err, NumeralError::DivisionByZero);
//! ```

pub mod numeral;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeral::{
        decimal_to_dozenal, dozenal_to_decimal, validate, ConversionConfig, Dozenal,
        NumeralError, NumeralResult, Radix,
    };
}
