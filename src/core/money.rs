//! Locale-aware rendering of monetary amounts and percentages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;
use super::error::{AppError, Result};

/// Display locales supported by the comparison views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-IN")]
    EnIn,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

impl Locale {
    fn grouping(&self) -> Grouping {
        match self {
            Locale::EnIn => Grouping::Indian,
            Locale::EnUs | Locale::EnGb | Locale::DeDe => Grouping::Thousands,
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Locale::DeDe => '.',
            _ => ',',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::DeDe => ',',
            _ => '.',
        }
    }

    fn symbol_after(&self) -> bool {
        matches!(self, Locale::DeDe)
    }

    /// BCP 47 tag
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnIn => "en-IN",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_lowercase().as_str() {
            "en-in" => Ok(Locale::EnIn),
            "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" => Ok(Locale::DeDe),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

/// Formats `amount` in `currency` using the grouping, separators and symbol
/// placement of `locale`. The amount is rounded to the currency's display scale.
pub fn format_money(amount: Decimal, currency: Currency, locale: Locale) -> String {
    let rounded = currency.round(amount);
    let negative = rounded < Decimal::ZERO;
    let digits = format!("{:.*}", currency.scale() as usize, rounded.abs());

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut number = group_digits(integer, locale.grouping(), locale.group_separator());
    if let Some(fraction) = fraction {
        number.push(locale.decimal_separator());
        number.push_str(fraction);
    }

    let sign = if negative { "-" } else { "" };
    if locale.symbol_after() {
        format!("{}{}\u{a0}{}", sign, number, currency.symbol())
    } else {
        format!("{}{}{}", sign, currency.symbol(), number)
    }
}

/// Appends a literal `%`; the value is rendered exactly as supplied.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value)
}

fn group_digits(integer: &str, grouping: Grouping, separator: char) -> String {
    let len = integer.len();
    if len <= 3 {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(len - 3);
    let head_group = match grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(head_group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(&separator.to_string());
    out.push(separator);
    out.push_str(tail);
    out
}

/// `a + b`, or `InvalidInput` when the sum leaves the `Decimal` range
pub fn checked_add(field: &str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(|| out_of_range(field))
}

pub fn checked_sub(field: &str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b).ok_or_else(|| out_of_range(field))
}

pub fn checked_mul(field: &str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(|| out_of_range(field))
}

/// `a / b`. A zero divisor is `DivisionByZero`; a quotient that does not fit
/// is `InvalidInput`.
pub fn checked_div(field: &str, a: Decimal, b: Decimal) -> Result<Decimal> {
    if b.is_zero() {
        return Err(AppError::division_by_zero(format!(
            "{} needs a non-zero divisor",
            field
        )));
    }
    a.checked_div(b).ok_or_else(|| out_of_range(field))
}

/// `part / whole × 100`, with the same error mapping as [`checked_div`]
pub fn percent_of(field: &str, part: Decimal, whole: Decimal) -> Result<Decimal> {
    let ratio = checked_div(field, part, whole)?;
    checked_mul(field, ratio, Decimal::ONE_HUNDRED)
}

fn out_of_range(field: &str) -> AppError {
    AppError::invalid_input(format!("{} is out of range", field))
}

pub fn require_non_negative(field: &str, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(AppError::invalid_input(format!(
            "{} cannot be negative",
            field
        )));
    }
    Ok(value)
}
