use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::DisplayConfig;
use crate::core::money::{checked_sub, percent_of, require_non_negative};
use crate::core::{AppError, Currency, Result};
use crate::modules::comparisons::models::{
    Charge, ComparisonInput, ComparisonResult, ProviderBreakdown, SourceAmount,
};
use crate::modules::fira::models::FiraData;

/// Maps extracted FIRA figures onto calculator inputs
#[derive(Debug, Clone)]
pub struct FiraMapper {
    home_currency: Currency,
    baseline_label: String,
    challenger_label: String,
}

impl FiraMapper {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            home_currency: display.home_currency,
            baseline_label: display.baseline_label.clone(),
            challenger_label: display.challenger_label.clone(),
        }
    }

    pub fn map(&self, data: &FiraData) -> Result<ComparisonInput> {
        let amount = required("amount", data.amount)?;
        let transaction_amount = required("inrAmount", data.inr_amount)?;
        let market_rate = required("fxRateSkydo", data.fx_rate_skydo)?;
        let provider_rate = required("calculatedExchangeRate", data.calculated_exchange_rate)?;

        let currency = match data.currency.as_deref() {
            Some(code) => code.parse().map_err(AppError::InvalidInput)?,
            None => return Err(AppError::invalid_input("currency is required")),
        };

        let margin = fx_margin_percent(market_rate, provider_rate)?;

        let baseline = ProviderBreakdown::new(
            self.baseline_label.as_str(),
            transaction_amount,
            vec![
                Charge::rate(
                    "FX Margin",
                    margin,
                    require_non_negative("platformFxFee", data.platform_fx_fee)?,
                )?,
                Charge::amount("Wire Fee", data.platform_wire_fee)?,
                Charge::amount("FIRA Fee", data.platform_fira_fee)?,
                Charge::amount("Transaction Fee", data.platform_transaction_fee)?,
            ],
        )?;

        // The challenger converts at the market rate, so its margin is zero
        let challenger = ProviderBreakdown::new(
            self.challenger_label.as_str(),
            transaction_amount,
            vec![
                Charge::rate(
                    "FX Margin",
                    Decimal::ZERO,
                    require_non_negative("skydoFxFee", data.skydo_fx_fee)?,
                )?,
                Charge::amount("Wire Fee", data.skydo_wire_fee)?,
                Charge::amount("FIRA Fee", data.skydo_fira_fee)?,
                Charge::amount("Transaction Fee", data.transaction_skydo_fee)?,
            ],
        )?;

        Ok(ComparisonInput {
            transaction_amount,
            currency: self.home_currency,
            baseline,
            challenger,
            source: Some(SourceAmount {
                amount,
                currency,
                value_date: data.value_date,
            }),
        })
    }

    /// Log where the certificate's printed totals disagree with the computed
    /// amounts received. The computed figures are kept.
    pub fn reconcile(&self, data: &FiraData, result: &ComparisonResult) {
        let printed = [
            (&self.baseline_label, data.final_inr_amount, result.baseline_amount_received),
            (
                &self.challenger_label,
                data.final_inr_amount_skydo,
                result.challenger_amount_received,
            ),
        ];

        for (label, printed, computed) in printed {
            let Some(printed) = printed else { continue };
            if self.home_currency.round(printed) != self.home_currency.round(computed) {
                tracing::warn!(
                    provider = %label,
                    printed = %printed,
                    computed = %computed,
                    "Certificate amount differs from computed amount received"
                );
            }
        }
    }
}

fn required(field: &str, value: Option<Decimal>) -> Result<Decimal> {
    let value = value.ok_or_else(|| AppError::invalid_input(format!("{} is required", field)))?;
    require_non_negative(field, value)
}

/// (market - provider) / market × 100, rounded to 2 dp and floored at zero
fn fx_margin_percent(market_rate: Decimal, provider_rate: Decimal) -> Result<Decimal> {
    let spread = checked_sub("FX margin", market_rate, provider_rate)?;
    let percent = percent_of("FX margin", spread, market_rate)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(percent.max(Decimal::ZERO))
}
