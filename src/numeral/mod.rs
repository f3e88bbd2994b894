// ============================================================================
// Numeral Module
// Dozenal numerals with decimal-domain arithmetic
// ============================================================================
//
// This module provides:
// - Dozenal: a base-12 numeral paired with its decimal value
// - validate: numeral grammar check for dozenal and decimal text
// - dozenal_to_decimal / decimal_to_dozenal: the radix converters
// - ConversionConfig: fractional digit cap for decimal -> dozenal
// - NumeralError: error types for parsing and arithmetic
//
// Design principles:
// - Exact decimal arithmetic via rust_decimal (no floating point)
// - All fallible operations return Result (no panics)
// - Values are immutable once constructed

mod config;
mod convert;
mod dozenal;
mod errors;
mod validator;

pub use config::{ConversionConfig, DEFAULT_MAX_FRACTION_DIGITS, MAX_FRACTION_DIGITS_LIMIT};
pub use convert::{
    decimal_to_dozenal, decimal_to_dozenal_with, digit_char, digit_value, dozenal_to_decimal,
    DIGITS,
};
pub use dozenal::Dozenal;
pub use errors::{NumeralError, NumeralResult};
pub use validator::{validate, NumeralParts, Radix, Sign};
