// ============================================================================
// Numeral Validator
// Grammar check and sign/whole/fraction split for numeral strings
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static DOZENAL_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?([0-9XE]+)(?:\.([0-9XE]+))?$").expect("dozenal grammar compiles")
});

static DECIMAL_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?([0-9]+)(?:\.([0-9]+))?$").expect("decimal grammar compiles")
});

/// Radix mode a numeral string is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 12, digits `0-9`, `X`, `E`
    Dozenal,
    /// Base 10, digits `0-9`
    Decimal,
}

impl Radix {
    fn grammar(self) -> &'static Regex {
        match self {
            Radix::Dozenal => &*DOZENAL_GRAMMAR,
            Radix::Decimal => &*DECIMAL_GRAMMAR,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Dozenal => write!(f, "dozenal"),
            Radix::Decimal => write!(f, "decimal"),
        }
    }
}

/// Explicit sign of a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

/// A validated numeral split into its components.
///
/// Borrowed from the input string; digits are kept exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralParts<'a> {
    /// Explicit sign, `None` when the numeral had no sign character
    pub sign: Option<Sign>,
    /// Whole-part digits (never empty)
    pub whole: &'a str,
    /// Fractional digits, `None` when there was no `.`
    pub fraction: Option<&'a str>,
    radix: Radix,
}

impl NumeralParts<'_> {
    /// Radix the parts were validated against.
    #[inline]
    pub fn radix(&self) -> Radix {
        self.radix
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Some(Sign::Minus)
    }

    /// Whole part as an integer. Decimal mode only.
    ///
    /// # Errors
    /// - `InvalidNumeral` if the parts are dozenal
    /// - `Overflow` if the digits exceed `u128`
    pub fn whole_integer(&self) -> NumeralResult<u128> {
        self.require_decimal()?;
        self.whole.parse().map_err(|_| NumeralError::Overflow)
    }

    /// Fractional part as a value in `[0, 1)`. Decimal mode only.
    ///
    /// Leading zeros are significant: `"05"` is 0.05.
    ///
    /// # Errors
    /// - `InvalidNumeral` if the parts are dozenal
    /// - `Overflow` if the digits exceed the `Decimal` scale limit
    pub fn fraction_decimal(&self) -> NumeralResult<Option<Decimal>> {
        self.require_decimal()?;
        match self.fraction {
            None => Ok(None),
            Some(digits) => Decimal::from_str(&format!("0.{digits}"))
                .map(Some)
                .map_err(|_| NumeralError::Overflow),
        }
    }

    fn require_decimal(&self) -> NumeralResult<()> {
        match self.radix {
            Radix::Decimal => Ok(()),
            Radix::Dozenal => Err(NumeralError::invalid(self.to_string(), Radix::Decimal)),
        }
    }
}

impl fmt::Display for NumeralParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            Some(Sign::Plus) => write!(f, "+")?,
            Some(Sign::Minus) => write!(f, "-")?,
            None => {}
        }
        write!(f, "{}", self.whole)?;
        if let Some(fraction) = self.fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

/// Validate `text` against the numeral grammar of `radix`.
///
/// Grammar: optional `+`/`-`, one or more digits, then optionally `.` and
/// one or more digits.
///
/// # Errors
/// Returns `InvalidNumeral` carrying `text` when it does not match.
pub fn validate(text: &str, radix: Radix) -> NumeralResult<NumeralParts<'_>> {
    let captures = radix
        .grammar()
        .captures(text)
        .ok_or_else(|| NumeralError::invalid(text, radix))?;

    let sign = captures.get(1).map(|m| match m.as_str() {
        "-" => Sign::Minus,
        _ => Sign::Plus,
    });
    // Group 2 is mandatory in both grammars
    let whole = captures
        .get(2)
        .map(|m| m.as_str())
        .ok_or_else(|| NumeralError::invalid(text, radix))?;
    let fraction = captures.get(3).map(|m| m.as_str());

    Ok(NumeralParts {
        sign,
        whole,
        fraction,
        radix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dozenal_parts() {
        let parts = validate("-1E.6", Radix::Dozenal).unwrap();
        assert_eq!(parts.sign, Some(Sign::Minus));
        assert_eq!(parts.whole, "1E");
        assert_eq!(parts.fraction, Some("6"));
        assert!(parts.is_negative());

        let parts = validate("+X0", Radix::Dozenal).unwrap();
        assert_eq!(parts.sign, Some(Sign::Plus));
        assert_eq!(parts.whole, "X0");
        assert_eq!(parts.fraction, None);

        let parts = validate("7", Radix::Dozenal).unwrap();
        assert_eq!(parts.sign, None);
        assert!(!parts.is_negative());
    }

    #[test]
    fn test_invalid_dozenal() {
        for text in ["", "1.2.3", "A", "x", "e", "-", "+-1", "1-", ".5", "5.", " 5", "1E 2"] {
            assert_eq!(
                validate(text, Radix::Dozenal),
                Err(NumeralError::InvalidNumeral {
                    text: text.to_string(),
                    radix: Radix::Dozenal,
                }),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decimal_rejects_dozenal_digits() {
        assert!(validate("1X", Radix::Decimal).is_err());
        assert!(validate("E", Radix::Decimal).is_err());
        assert!(validate("1e5", Radix::Decimal).is_err());
        assert!(validate("NaN", Radix::Decimal).is_err());
        assert!(validate("inf", Radix::Decimal).is_err());
    }

    #[test]
    fn test_decimal_typed_parts() {
        let parts = validate("-123.05", Radix::Decimal).unwrap();
        assert_eq!(parts.whole_integer().unwrap(), 123);
        assert_eq!(
            parts.fraction_decimal().unwrap(),
            Some(Decimal::new(5, 2))
        );

        let parts = validate("42", Radix::Decimal).unwrap();
        assert_eq!(parts.fraction_decimal().unwrap(), None);
    }

    #[test]
    fn test_typed_parts_require_decimal_mode() {
        let parts = validate("1E", Radix::Dozenal).unwrap();
        assert!(matches!(
            parts.whole_integer(),
            Err(NumeralError::InvalidNumeral { radix: Radix::Decimal, .. })
        ));
    }

    #[test]
    fn test_parts_display() {
        let parts = validate("+1X.06", Radix::Dozenal).unwrap();
        assert_eq!(parts.to_string(), "+1X.06");
        assert_eq!(parts.radix(), Radix::Dozenal);
    }
}
