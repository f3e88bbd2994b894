// ============================================================================
// Radix Conversion
// Decimal <-> dozenal conversion, including fractional parts
// ============================================================================

use super::config::ConversionConfig;
use super::errors::{NumeralError, NumeralResult};
use super::validator::{validate, Radix};
use arrayvec::ArrayVec;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use smallvec::SmallVec;

/// The dozenal digit alphabet, ordered by value.
pub const DIGITS: [char; 12] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'X', 'E'];

const RADIX: u32 = 12;

/// A u128 needs at most 36 dozenal digits
const MAX_WHOLE_DIGITS: usize = 36;

type WholeDigits = ArrayVec<char, MAX_WHOLE_DIGITS>;
type FractionDigits = SmallVec<[char; 12]>;

/// Value of a dozenal digit symbol, `None` if it is not in the alphabet.
#[inline]
pub fn digit_value(symbol: char) -> Option<u32> {
    DIGITS
        .iter()
        .position(|&digit| digit == symbol)
        .map(|index| index as u32)
}

/// Dozenal symbol for a digit value in `0..12`.
#[inline]
pub fn digit_char(value: u32) -> Option<char> {
    DIGITS.get(value as usize).copied()
}

#[inline]
fn radix() -> Decimal {
    Decimal::from(RADIX)
}

// ============================================================================
// Dozenal -> Decimal
// ============================================================================

/// Compute the decimal value of a dozenal numeral.
///
/// # Errors
/// - `InvalidNumeral` (dozenal mode) if `text` is not a dozenal numeral
/// - `Overflow` if the whole part exceeds the `Decimal` range
///
/// # Example
/// ```
/// use dozenal::numeral::dozenal_to_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(dozenal_to_decimal("1E").unwrap(), Decimal::from(23));
/// assert_eq!(dozenal_to_decimal("-X.6").unwrap(), Decimal::new(-105, 1));
/// ```
pub fn dozenal_to_decimal(text: &str) -> NumeralResult<Decimal> {
    let parts = validate(text, Radix::Dozenal)?;

    let mut value = accumulate(parts.whole).ok_or(NumeralError::Overflow)?;

    if let Some(fraction) = parts.fraction {
        value = value
            .checked_add(fraction_value(fraction)?)
            .ok_or(NumeralError::Overflow)?;
    }

    if parts.is_negative() && !value.is_zero() {
        value = -value;
    }

    Ok(value)
}

/// Left-to-right positional accumulation of validated dozenal digits.
fn accumulate(digits: &str) -> Option<Decimal> {
    digits.chars().try_fold(Decimal::ZERO, |acc, symbol| {
        let digit = digit_value(symbol)?;
        acc.checked_mul(radix())?.checked_add(Decimal::from(digit))
    })
}

fn radix_power(exponent: usize) -> Option<Decimal> {
    (0..exponent).try_fold(Decimal::ONE, |acc, _| acc.checked_mul(radix()))
}

/// Value of the fractional digits: `accumulated / 12^len`.
///
/// Fractions too long for the accumulator fall back to Horner's scheme.
fn fraction_value(digits: &str) -> NumeralResult<Decimal> {
    let scaled = accumulate(digits)
        .zip(radix_power(digits.len()))
        .and_then(|(numerator, denominator)| numerator.checked_div(denominator));

    match scaled {
        Some(value) => Ok(value),
        None => {
            tracing::trace!(digits = digits.len(), "long dozenal fraction, using Horner evaluation");
            horner_fraction(digits)
        },
    }
}

fn horner_fraction(digits: &str) -> NumeralResult<Decimal> {
    digits.chars().rev().try_fold(Decimal::ZERO, |acc, symbol| {
        digit_value(symbol)
            .and_then(|digit| acc.checked_add(Decimal::from(digit)))
            .and_then(|sum| sum.checked_div(radix()))
            .ok_or(NumeralError::Overflow)
    })
}

// ============================================================================
// Decimal -> Dozenal
// ============================================================================

/// Render a decimal value as a dozenal numeral with the default precision.
///
/// # Example
/// ```
/// use dozenal::numeral::decimal_to_dozenal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(decimal_to_dozenal(Decimal::from(23)).unwrap(), "1E");
/// assert_eq!(decimal_to_dozenal(Decimal::new(5, 1)).unwrap(), "0.6");
/// ```
pub fn decimal_to_dozenal(value: Decimal) -> NumeralResult<String> {
    decimal_to_dozenal_with(value, &ConversionConfig::default())
}

/// Render a decimal value as a dozenal numeral.
///
/// The value is rendered to text and re-validated against the decimal
/// grammar before conversion. Fractions that do not terminate within
/// `config.max_fraction_digits` dozenal digits are truncated.
///
/// # Errors
/// - `InvalidNumeral` (decimal mode) if the rendering is not a decimal numeral
/// - `Overflow` if an intermediate value leaves the `Decimal` range
pub fn decimal_to_dozenal_with(value: Decimal, config: &ConversionConfig) -> NumeralResult<String> {
    // Trailing fractional zeros would otherwise produce a "x.0" rendering
    let text = value.normalize().to_string();
    let parts = validate(&text, Radix::Decimal)?;

    let whole = whole_digits(parts.whole_integer()?);
    let fraction = match parts.fraction_decimal()? {
        Some(fraction) => Some(fraction_digits(
            fraction,
            config.effective_fraction_digits(),
        )?),
        None => None,
    };

    let mut dozenal = String::with_capacity(
        1 + whole.len() + fraction.as_ref().map_or(0, |digits| digits.len() + 1),
    );
    if parts.is_negative() {
        dozenal.push('-');
    }
    dozenal.extend(whole.iter().rev());
    if let Some(digits) = fraction {
        dozenal.push('.');
        dozenal.extend(digits);
    }

    Ok(dozenal)
}

/// Dozenal digits of `value`, least significant first.
fn whole_digits(mut value: u128) -> WholeDigits {
    let mut digits = WholeDigits::new();
    loop {
        digits.push(DIGITS[(value % RADIX as u128) as usize]);
        value /= RADIX as u128;

        if value == 0 {
            break;
        }
    }
    digits
}

/// Expand a fraction in `[0, 1)` into at most `cap` dozenal digits.
fn fraction_digits(mut fraction: Decimal, cap: usize) -> NumeralResult<FractionDigits> {
    let mut digits = FractionDigits::new();

    for _ in 0..cap {
        fraction = fraction.checked_mul(radix()).ok_or(NumeralError::Overflow)?;
        let digit = fraction.trunc();
        let symbol = digit
            .to_u32()
            .and_then(digit_char)
            .ok_or(NumeralError::Overflow)?;
        digits.push(symbol);
        fraction = fraction.checked_sub(digit).ok_or(NumeralError::Overflow)?;

        if fraction.is_zero() {
            return Ok(digits);
        }
    }

    tracing::trace!(cap, remainder = %fraction, "dozenal fraction truncated");
    Ok(digits)
}
