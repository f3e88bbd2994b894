// ============================================================================
// Arithmetic Consistency Tests
// Operators agree with decimal-domain arithmetic on the converted values
// ============================================================================

use dozenal::numeral::{dozenal_to_decimal, Dozenal, NumeralError, DIGITS};
use quickcheck::{quickcheck, Arbitrary, Gen};

/// A syntactically valid dozenal numeral.
#[derive(Debug, Clone)]
struct DozenalText(String);

impl Arbitrary for DozenalText {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut text = String::new();
        if bool::arbitrary(g) {
            text.push(*g.choose(&['+', '-']).unwrap());
        }

        let whole_len = 1 + usize::arbitrary(g) % 8;
        text.extend((0..whole_len).map(|_| *g.choose(&DIGITS).unwrap()));

        if bool::arbitrary(g) {
            text.push('.');
            let fraction_len = 1 + usize::arbitrary(g) % 4;
            text.extend((0..fraction_len).map(|_| *g.choose(&DIGITS).unwrap()));
        }

        DozenalText(text)
    }
}

quickcheck! {
    fn addition_matches_decimal_sum(a: DozenalText, b: DozenalText) -> bool {
        let sum = (Dozenal::parse(&a.0).unwrap() + Dozenal::parse(&b.0).unwrap()).unwrap();
        sum.decimal() == dozenal_to_decimal(&a.0).unwrap() + dozenal_to_decimal(&b.0).unwrap()
    }

    fn subtraction_matches_decimal_difference(a: DozenalText, b: DozenalText) -> bool {
        let difference = (Dozenal::parse(&a.0).unwrap() - Dozenal::parse(&b.0).unwrap()).unwrap();
        difference.decimal()
            == dozenal_to_decimal(&a.0).unwrap() - dozenal_to_decimal(&b.0).unwrap()
    }

    fn multiplication_matches_decimal_product(a: DozenalText, b: DozenalText) -> bool {
        let product = (Dozenal::parse(&a.0).unwrap() * Dozenal::parse(&b.0).unwrap()).unwrap();
        product.decimal() == dozenal_to_decimal(&a.0).unwrap() * dozenal_to_decimal(&b.0).unwrap()
    }

    fn integer_sums_render_exactly(a: i32, b: i32) -> bool {
        let x = Dozenal::from_integer(a as i64).unwrap();
        let y = Dozenal::from_integer(b as i64).unwrap();
        let sum = (&x + &y).unwrap();
        Dozenal::parse(sum.as_str()).unwrap().decimal() == sum.decimal()
    }

    fn division_by_zero_always_rejected(a: DozenalText) -> bool {
        let zero = Dozenal::parse("0").unwrap();
        matches!(Dozenal::parse(&a.0).unwrap() / zero, Err(NumeralError::DivisionByZero))
    }
}

#[test]
fn test_division_by_zero_example() {
    let result = Dozenal::parse("5").unwrap() / Dozenal::parse("0").unwrap();
    assert_eq!(result.unwrap_err(), NumeralError::DivisionByZero);
}
