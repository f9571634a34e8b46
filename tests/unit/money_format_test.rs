/// Tests for locale-aware money and percentage formatting
///
/// Validates:
/// - amounts are rounded to the currency's display precision
/// - en-IN uses lakh grouping, other locales thousands grouping
/// - percentages are rendered exactly as supplied
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fira_compare::core::{format_money, format_percent, Currency, Locale};

#[test]
fn test_rupees_in_indian_locale() {
    assert_eq!(format_money(dec!(1275), Currency::INR, Locale::EnIn), "₹1,275");
    assert_eq!(format_money(dec!(421100), Currency::INR, Locale::EnIn), "₹4,21,100");
    assert_eq!(format_money(dec!(12345678), Currency::INR, Locale::EnIn), "₹1,23,45,678");
    assert_eq!(format_money(dec!(999), Currency::INR, Locale::EnIn), "₹999");
    assert_eq!(format_money(Decimal::ZERO, Currency::INR, Locale::EnIn), "₹0");
}

#[test]
fn test_rupees_rounded_to_whole_units() {
    assert_eq!(format_money(dec!(1022.50), Currency::INR, Locale::EnIn), "₹1,023");
    assert_eq!(format_money(dec!(1022.49), Currency::INR, Locale::EnIn), "₹1,022");
}

#[test]
fn test_negative_amounts_keep_sign() {
    assert_eq!(format_money(dec!(-1022), Currency::INR, Locale::EnIn), "-₹1,022");
    assert_eq!(format_money(dec!(-0.2), Currency::INR, Locale::EnIn), "₹0");
}

#[test]
fn test_two_decimal_currencies() {
    assert_eq!(format_money(dec!(1275.5), Currency::USD, Locale::EnUs), "$1,275.50");
    assert_eq!(format_money(dec!(1275.005), Currency::USD, Locale::EnUs), "$1,275.01");
    assert_eq!(format_money(dec!(1234567.891), Currency::GBP, Locale::EnGb), "£1,234,567.89");
    assert_eq!(format_money(dec!(5000), Currency::USD, Locale::EnIn), "$5,000.00");
}

#[test]
fn test_german_locale_separators() {
    assert_eq!(
        format_money(dec!(1275), Currency::EUR, Locale::DeDe),
        "1.275,00\u{a0}€"
    );
}

#[test]
fn test_zero_decimal_yen() {
    assert_eq!(format_money(dec!(150000.4), Currency::JPY, Locale::EnUs), "¥150,000");
}

#[test]
fn test_percent_is_not_rounded() {
    assert_eq!(format_percent(dec!(2.85)), "2.85%");
    assert_eq!(format_percent(dec!(80.1)), "80.1%");
    assert_eq!(format_percent(dec!(2.0974858)), "2.0974858%");
    assert_eq!(format_percent(Decimal::ZERO), "0%");
}

proptest! {
    #[test]
    fn test_indian_format_round_trips_digits(rupees in 0u64..1_000_000_000_000u64) {
        let formatted = format_money(Decimal::from(rupees), Currency::INR, Locale::EnIn);

        prop_assert!(formatted.starts_with('₹'));
        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits, rupees.to_string());
    }

    #[test]
    fn test_thousands_groups_have_three_digits(dollars in 1_000u64..1_000_000_000u64) {
        let formatted = format_money(Decimal::from(dollars), Currency::USD, Locale::EnUs);
        let integer = formatted
            .trim_start_matches('$')
            .split('.')
            .next()
            .unwrap()
            .to_string();

        for group in integer.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }
}
