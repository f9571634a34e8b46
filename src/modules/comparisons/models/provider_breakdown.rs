use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::charge::Charge;
use crate::core::money::{checked_add, percent_of};
use crate::core::{AppError, Result};

/// Fee breakdown for one provider on one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderBreakdown {
    /// Display name, e.g. "Current Provider"
    pub label: String,

    /// Amount transferred before fees
    pub gross_amount: Decimal,

    /// Charges in display order
    pub charges: Vec<Charge>,

    /// Sum of the charges' absolute contributions
    pub total_fee_on_transaction: Decimal,

    /// total_fee_on_transaction / gross_amount × 100
    pub effective_cost_percent: Decimal,
}

impl ProviderBreakdown {
    /// Build a breakdown, deriving the fee total and effective cost from the charges
    pub fn new(label: impl Into<String>, gross_amount: Decimal, charges: Vec<Charge>) -> Result<Self> {
        let label = label.into();
        let total_fee_on_transaction = Self::sum_contributions(&label, &charges)?;
        let effective_cost_percent = Self::effective_cost(gross_amount, total_fee_on_transaction)?;

        let breakdown = Self {
            label,
            gross_amount,
            charges,
            total_fee_on_transaction,
            effective_cost_percent,
        };
        breakdown.validate()?;

        Ok(breakdown)
    }

    /// Check a breakdown that arrived over the wire: non-negative figures,
    /// valid charges and a fee total equal to the sum of their contributions
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(AppError::invalid_input("Provider label cannot be empty"));
        }

        let figures = [
            ("gross amount", self.gross_amount),
            ("fee total", self.total_fee_on_transaction),
            ("effective cost", self.effective_cost_percent),
        ];
        for (name, value) in figures {
            if value < Decimal::ZERO {
                return Err(AppError::invalid_input(format!(
                    "{}: {} cannot be negative, got: {}",
                    self.label, name, value
                )));
            }
        }

        for charge in &self.charges {
            charge.validate()?;
        }

        let sum = Self::sum_contributions(&self.label, &self.charges)?;
        if sum != self.total_fee_on_transaction {
            return Err(AppError::invalid_input(format!(
                "{}: fee total {} does not match the charges ({})",
                self.label, self.total_fee_on_transaction, sum
            )));
        }

        Ok(())
    }

    /// total / gross × 100
    pub fn effective_cost(gross_amount: Decimal, total_fee: Decimal) -> Result<Decimal> {
        percent_of("effective cost", total_fee, gross_amount)
    }

    pub(crate) fn sum_contributions(label: &str, charges: &[Charge]) -> Result<Decimal> {
        charges.iter().try_fold(Decimal::ZERO, |total, charge| {
            checked_add(&format!("{} fee total", label), total, charge.contribution)
        })
    }
}
