// Integration tests for ledgerlens-math covering the scale-then-format
// path a statement rendering pass takes.

use ledgerlens_math::formatting::{format_decimal, format_value, FormatConfig};
use ledgerlens_math::scale::{from_f64, to_decimal, ScaleConfig};

#[test]
fn test_minor_units_to_display_string() {
    let value = to_decimal(150_000, 2);
    let config = FormatConfig::new();
    assert_eq!(format_decimal(value, &config), "1,500.00");
}

#[test]
fn test_scale_zero_currency_display() {
    // Scale 0 currencies (JPY-like) keep the full integer
    let value = to_decimal(150_000, 0);
    let config = FormatConfig::new();
    assert_eq!(format_decimal(value, &config), "150,000");
}

#[test]
fn test_negative_balance_statement_style() {
    let value = to_decimal(-9_876_543, 2);
    let config = FormatConfig::new().with_symbol("$");
    assert_eq!(format_decimal(value, &config), "($98,765.43)");
}

#[test]
fn test_unresolvable_balance_displays_na() {
    let value = from_f64(f64::NAN, 2);
    let config = FormatConfig::new();
    assert_eq!(format_decimal(value, &config), "N/A");
}

#[test]
fn test_default_scale_is_two() {
    let config = ScaleConfig::new();
    let value = to_decimal(40_000, config.default_scale);
    assert_eq!(format_decimal(value, &FormatConfig::new()), "400.00");
}

#[test]
fn test_large_balance_keeps_exact_value() {
    // A balance near i64::MAX scales without drifting the way a float
    // division would
    let value = to_decimal(9_223_372_036_854_775_807, 2).unwrap();
    assert_eq!(value.to_string(), "92233720368547758.07");
    assert_eq!(
        format_value(value, &FormatConfig::new()),
        "92,233,720,368,547,758.07"
    );
}
