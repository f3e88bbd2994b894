// ============================================================================
// Conversion Configuration
// Precision settings for decimal to dozenal conversion
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of fractional dozenal digits produced before truncation.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 12;

/// Upper bound for `max_fraction_digits` (the `Decimal` scale limit).
pub const MAX_FRACTION_DIGITS_LIMIT: usize = 28;

/// Settings for rendering decimal values as dozenal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionConfig {
    /// Fractional digits emitted before the expansion is cut off.
    /// Repeating fractions are truncated here, not detected.
    pub max_fraction_digits: usize,
}

impl ConversionConfig {
    /// Create a configuration with the default precision
    pub fn new() -> Self {
        Self {
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }

    /// Builder method: Set the fractional digit cap
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_fraction_digits == 0 {
            return Err("Fraction digit cap must be at least 1".to_string());
        }

        if self.max_fraction_digits > MAX_FRACTION_DIGITS_LIMIT {
            return Err(format!(
                "Fraction digit cap cannot exceed {}",
                MAX_FRACTION_DIGITS_LIMIT
            ));
        }

        Ok(())
    }

    /// Cap actually applied during conversion, clamped into the valid range.
    pub(crate) fn effective_fraction_digits(&self) -> usize {
        self.max_fraction_digits.clamp(1, MAX_FRACTION_DIGITS_LIMIT)
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new()
    }
}
