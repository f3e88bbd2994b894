// ============================================================================
// Basic Usage Example
// ============================================================================

use dozenal::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), NumeralError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Dozenal Example ===\n");

    // Parse dozenal text
    let gross: Dozenal = "100".parse()?;
    let dozen = Dozenal::parse("10")?;
    println!("{} (dozenal) = {} (decimal)", gross, gross.decimal());
    println!("{} (dozenal) = {} (decimal)\n", dozen, dozen.decimal());

    // Convert decimal values
    for value in [0, 10, 11, 23, 2026] {
        let x = Dozenal::from_integer(value)?;
        println!("{:>5} (decimal) = {} (dozenal)", value, x);
    }

    // Fractions terminate or are truncated after 12 digits
    println!();
    for value in [Decimal::new(5, 1), Decimal::new(1875, 4), Decimal::new(1, 1)] {
        println!("{} (decimal) = {} (dozenal)", value, Dozenal::from_decimal(value)?);
    }

    let coarse = ConversionConfig::new().with_max_fraction_digits(4);
    println!(
        "{} (decimal, 4 digits) = {} (dozenal)",
        Decimal::new(1, 1),
        Dozenal::from_decimal_with(Decimal::new(1, 1), &coarse)?
    );

    // Arithmetic
    println!("\n{} + {} = {}", gross, dozen, (&gross + &dozen)?);
    println!("{} - {} = {}", gross, dozen, (&gross - &dozen)?);
    println!("{} * {} = {}", gross, dozen, (&gross * &dozen)?);
    println!("{} / {} = {}", gross, dozen, (&gross / &dozen)?);

    match &gross / &Dozenal::from_integer(0)? {
        Ok(_) => println!("unexpected quotient"),
        Err(err) => println!("{} / 0 -> {}", gross, err),
    }

    Ok(())
}
