//! Display rendition of a comparison: every figure formatted, nothing left
//! for the client to compute.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{format_money, format_percent, Currency, Locale};
use crate::modules::comparisons::models::{ChargeValue, ComparisonResult, ProviderBreakdown};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeLine {
    pub kind: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderView {
    pub label: String,
    pub charges: Vec<ChargeLine>,
    pub amount_received: String,
    pub effective_cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub headline: String,
    pub subheadline: String,
    pub baseline: ProviderView,
    pub challenger: ProviderView,
}

impl ComparisonView {
    pub fn render(result: &ComparisonResult, locale: Locale) -> Self {
        let currency = result.currency;
        let money = |amount: Decimal| format_money(amount, currency, locale);
        let challenger = &result.challenger.label;

        let headline = if result.challenger_is_cheaper() {
            format!("You could save {} with {}", money(result.savings_amount), challenger)
        } else if result.savings_amount < Decimal::ZERO {
            format!(
                "Your current provider is cheaper by {}",
                money(result.savings_amount.abs())
            )
        } else {
            format!("{} costs the same as your current provider", challenger)
        };

        let subheadline = match result.savings_percent {
            Some(percent) => {
                let shown = round_percent(percent.abs(), 1);
                if percent >= Decimal::ZERO {
                    format!("That's {} less than your current provider", format_percent(shown))
                } else {
                    format!("That's {} more than your current provider", format_percent(shown))
                }
            }
            None => "Savings percentage unavailable".to_string(),
        };

        Self {
            headline,
            subheadline,
            baseline: provider_view(
                &result.baseline,
                result.baseline_amount_received,
                currency,
                locale,
                false,
            ),
            challenger: provider_view(
                &result.challenger,
                result.challenger_amount_received,
                currency,
                locale,
                true,
            ),
        }
    }
}

fn provider_view(
    breakdown: &ProviderBreakdown,
    amount_received: Decimal,
    currency: Currency,
    locale: Locale,
    show_free: bool,
) -> ProviderView {
    let charges = breakdown
        .charges
        .iter()
        .map(|charge| {
            let display = if show_free && charge.is_free() {
                "FREE".to_string()
            } else {
                match charge.value {
                    ChargeValue::Rate(rate) => format_percent(rate.normalize()),
                    ChargeValue::Amount(amount) => format_money(amount, currency, locale),
                }
            };

            ChargeLine {
                kind: charge.kind.clone(),
                display,
            }
        })
        .collect();

    ProviderView {
        label: breakdown.label.clone(),
        charges,
        amount_received: format_money(amount_received, currency, locale),
        effective_cost: format_percent(round_percent(breakdown.effective_cost_percent, 2)),
    }
}

fn round_percent(value: Decimal, dp: u32) -> Decimal {
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}
