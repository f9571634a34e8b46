use rust_decimal::Decimal;

use crate::core::money::{checked_div, checked_mul, checked_sub, percent_of, require_non_negative};
use crate::core::{AppError, Result};
use crate::modules::comparisons::models::{
    ComparisonInput, ComparisonResult, ProviderBreakdown, Savings,
};

/// FeeCalculator turns two provider breakdowns into savings figures.
///
/// Every operation is a pure function of its arguments; the calculator keeps
/// no state between calls.
pub struct FeeCalculator;

impl FeeCalculator {
    pub fn new() -> Self {
        Self
    }

    /// transaction_amount - total fee. Not clamped: fees above the
    /// transaction amount yield a negative figure.
    pub fn compute_amount_received(
        &self,
        transaction_amount: Decimal,
        breakdown: &ProviderBreakdown,
    ) -> Result<Decimal> {
        checked_sub(
            "amount received",
            transaction_amount,
            breakdown.total_fee_on_transaction,
        )
    }

    /// Savings of `challenger` over `baseline`.
    ///
    /// The percentage is taken relative to what the baseline delivers
    /// (`transaction_amount - baseline total`). It is `None` when that is zero.
    pub fn compute_savings(
        &self,
        baseline: &ProviderBreakdown,
        challenger: &ProviderBreakdown,
        transaction_amount: Decimal,
    ) -> Result<Savings> {
        let amount = checked_sub(
            "savings",
            baseline.total_fee_on_transaction,
            challenger.total_fee_on_transaction,
        )?;
        let baseline_received = self.compute_amount_received(transaction_amount, baseline)?;

        let percent = if baseline_received.is_zero() {
            None
        } else {
            Some(percent_of("savings percentage", amount, baseline_received)?)
        };

        Ok(Savings { amount, percent })
    }

    /// Proportionally rescale a breakdown to a new transaction amount.
    ///
    /// Gross amount and every absolute charge are multiplied by
    /// `new / original` and the fee total is re-summed from the scaled
    /// charges; rates and the effective cost percentage are left unchanged.
    /// This assumes fees grow linearly with the amount, which is a
    /// simplification: real fixed fees and fee tiers do not scale this way.
    pub fn rescale(
        &self,
        breakdown: &ProviderBreakdown,
        new_transaction_amount: Decimal,
        original_transaction_amount: Decimal,
    ) -> Result<ProviderBreakdown> {
        breakdown.validate()?;
        require_non_negative("newTransactionAmount", new_transaction_amount)?;
        require_non_negative("original transaction amount", original_transaction_amount)?;

        let ratio = checked_div(
            "rescale ratio",
            new_transaction_amount,
            original_transaction_amount,
        )?;

        let charges = breakdown
            .charges
            .iter()
            .map(|c| c.scaled(ratio))
            .collect::<Result<Vec<_>>>()?;
        let total_fee_on_transaction =
            ProviderBreakdown::sum_contributions(&breakdown.label, &charges)?;

        Ok(ProviderBreakdown {
            label: breakdown.label.clone(),
            gross_amount: checked_mul("gross amount", breakdown.gross_amount, ratio)?,
            charges,
            total_fee_on_transaction,
            effective_cost_percent: breakdown.effective_cost_percent,
        })
    }

    /// Resolve a full comparison from validated inputs
    pub fn compare(&self, input: ComparisonInput) -> Result<ComparisonResult> {
        if input.transaction_amount < Decimal::ZERO {
            return Err(AppError::invalid_input(format!(
                "Transaction amount cannot be negative, got: {}",
                input.transaction_amount
            )));
        }

        let savings =
            self.compute_savings(&input.baseline, &input.challenger, input.transaction_amount)?;

        if savings.percent.is_none() {
            tracing::warn!(
                transaction_amount = %input.transaction_amount,
                baseline_fees = %input.baseline.total_fee_on_transaction,
                "Baseline delivers nothing; savings percentage unavailable"
            );
        }

        Ok(ComparisonResult {
            baseline_amount_received: self
                .compute_amount_received(input.transaction_amount, &input.baseline)?,
            challenger_amount_received: self
                .compute_amount_received(input.transaction_amount, &input.challenger)?,
            savings_amount: savings.amount,
            savings_percent: savings.percent,
            baseline: input.baseline,
            challenger: input.challenger,
            transaction_amount: input.transaction_amount,
            currency: input.currency,
            source: input.source,
        })
    }

    /// Rescale both sides of an existing comparison to a new transaction
    /// amount and recompute what each side delivers
    pub fn rescale_comparison(
        &self,
        result: &ComparisonResult,
        new_transaction_amount: Decimal,
    ) -> Result<ComparisonResult> {
        let original = result.transaction_amount;
        let baseline = self.rescale(&result.baseline, new_transaction_amount, original)?;
        let challenger = self.rescale(&result.challenger, new_transaction_amount, original)?;

        let source = match &result.source {
            Some(source) => {
                require_non_negative("source amount", source.amount)?;
                let ratio = checked_div("rescale ratio", new_transaction_amount, original)?;
                let mut scaled = source.clone();
                scaled.amount = source
                    .currency
                    .round(checked_mul("source amount", source.amount, ratio)?);
                Some(scaled)
            }
            None => None,
        };

        self.compare(ComparisonInput {
            transaction_amount: new_transaction_amount,
            currency: result.currency,
            baseline,
            challenger,
            source,
        })
    }
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new()
    }
}
