// ============================================================================
// Dozenal Value
// Base-12 numeral held together with its decimal value
// ============================================================================

use super::config::ConversionConfig;
use super::convert::{decimal_to_dozenal_with, dozenal_to_decimal};
use super::errors::{NumeralError, NumeralResult};
use super::validator::Radix;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

/// A dozenal numeral paired with its decimal value.
///
/// Both forms are fixed at construction and never change afterwards.
/// Arithmetic is carried out on the decimal value and the dozenal text of
/// the result is derived again, so fractional results are truncated to the
/// configured number of dozenal digits.
///
/// No equality or ordering is defined on the numeral itself; compare
/// through [`Dozenal::decimal`].
///
/// # Example
/// ```
/// use dozenal::numeral::Dozenal;
/// use rust_decimal::Decimal;
///
/// let a: Dozenal = "1E".parse().unwrap();      // 23
/// let b = Dozenal::from_integer(1).unwrap();   // 1
/// let sum = (&a + &b).unwrap();
/// assert_eq!(sum.as_str(), "20");
/// assert_eq!(sum.decimal(), Decimal::from(24));
/// ```
#[derive(Clone)]
pub struct Dozenal {
    decimal: Decimal,
    dozenal: String,
}

impl Dozenal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a dozenal numeral such as `"1E"`, `"-X.6"` or `"+10"`.
    ///
    /// The text is kept as written.
    ///
    /// # Errors
    /// - `InvalidNumeral` if `text` is not a dozenal numeral
    /// - `Overflow` if the value exceeds the decimal range
    pub fn parse(text: &str) -> NumeralResult<Self> {
        let decimal = dozenal_to_decimal(text)?;
        Ok(Self {
            decimal,
            dozenal: text.to_string(),
        })
    }

    /// Create from a decimal value, deriving the dozenal text.
    ///
    /// # Errors
    /// Returns `Overflow` if the conversion leaves the decimal range.
    pub fn from_decimal(decimal: Decimal) -> NumeralResult<Self> {
        Self::from_decimal_with(decimal, &ConversionConfig::default())
    }

    /// Create from a decimal value using a custom fraction digit cap.
    pub fn from_decimal_with(decimal: Decimal, config: &ConversionConfig) -> NumeralResult<Self> {
        let dozenal = decimal_to_dozenal_with(decimal, config)?;
        Ok(Self { decimal, dozenal })
    }

    /// Create from an integer value.
    #[inline]
    pub fn from_integer(value: i64) -> NumeralResult<Self> {
        Self::from_decimal(Decimal::from(value))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Decimal value of the numeral.
    #[inline]
    pub fn decimal(&self) -> Decimal {
        self.decimal
    }

    /// Dozenal text of the numeral.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.dozenal
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.dozenal
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.decimal.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.decimal.is_sign_negative() && !self.decimal.is_zero()
    }

    /// Whole-part digits of the dozenal text, without sign.
    pub fn whole_part(&self) -> &str {
        let unsigned = self.dozenal.trim_start_matches(['+', '-']);
        unsigned.split_once('.').map_or(unsigned, |(whole, _)| whole)
    }

    /// Fractional digits of the dozenal text, if it has any.
    pub fn fraction_part(&self) -> Option<&str> {
        self.dozenal.split_once('.').map(|(_, fraction)| fraction)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum is out of range.
    pub fn checked_add(&self, rhs: &Self) -> NumeralResult<Self> {
        let sum = self
            .decimal
            .checked_add(rhs.decimal)
            .ok_or(NumeralError::Overflow)?;
        Self::from_decimal(sum)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if the difference is out of range.
    pub fn checked_sub(&self, rhs: &Self) -> NumeralResult<Self> {
        let difference = self
            .decimal
            .checked_sub(rhs.decimal)
            .ok_or(NumeralError::Overflow)?;
        Self::from_decimal(difference)
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if the product is out of range.
    pub fn checked_mul(&self, rhs: &Self) -> NumeralResult<Self> {
        let product = self
            .decimal
            .checked_mul(rhs.decimal)
            .ok_or(NumeralError::Overflow)?;
        Self::from_decimal(product)
    }

    /// Checked division (not integral).
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient is out of range
    pub fn checked_div(&self, rhs: &Self) -> NumeralResult<Self> {
        if rhs.is_zero() {
            tracing::debug!(dividend = %self, "rejected dozenal division by zero");
            return Err(NumeralError::DivisionByZero);
        }

        let quotient = self
            .decimal
            .checked_div(rhs.decimal)
            .ok_or(NumeralError::Overflow)?;
        Self::from_decimal(quotient)
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

// Operators return the checked result instead of panicking
macro_rules! impl_checked_op {
    ($op:ident, $method:ident, $checked:ident) => {
        impl $op for Dozenal {
            type Output = NumeralResult<Dozenal>;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                self.$checked(&rhs)
            }
        }

        impl<'a, 'b> $op<&'b Dozenal> for &'a Dozenal {
            type Output = NumeralResult<Dozenal>;

            #[inline]
            fn $method(self, rhs: &'b Dozenal) -> Self::Output {
                self.$checked(rhs)
            }
        }
    };
}

impl_checked_op!(Add, add, checked_add);
impl_checked_op!(Sub, sub, checked_sub);
impl_checked_op!(Mul, mul, checked_mul);
impl_checked_op!(Div, div, checked_div);

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for Dozenal {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Dozenal {
    type Error = NumeralError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<Decimal> for Dozenal {
    type Error = NumeralError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl TryFrom<f64> for Dozenal {
    type Error = NumeralError;

    /// Non-finite floats have no decimal rendering and are rejected as
    /// invalid decimal numerals; finite floats outside the decimal range
    /// overflow.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumeralError::invalid(value.to_string(), Radix::Decimal));
        }

        let decimal = Decimal::try_from(value).map_err(|_| NumeralError::Overflow)?;
        Self::from_decimal(decimal)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Dozenal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dozenal({}, decimal={})", self.dozenal, self.decimal)
    }
}

impl fmt::Display for Dozenal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dozenal)
    }
}

// ============================================================================
// Serde (dozenal text on the wire)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Dozenal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.dozenal)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dozenal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
