// A single line on a provider's fee breakdown.
//
// A charge is either an absolute amount or a percentage-of-amount rate. Rate
// charges never contribute to fee totals on their own: the upstream data
// source resolves them to an absolute contribution, which is carried next to
// the rate so the display and the aggregation never have to infer one from
// the other.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::checked_mul;
use crate::core::{AppError, Result};

/// Magnitude of a charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ChargeValue {
    /// Absolute amount in the comparison currency
    Amount(Decimal),
    /// Percentage of the transaction amount, in percent units (2.5 = 2.5%)
    Rate(Decimal),
}

impl ChargeValue {
    pub fn magnitude(&self) -> Decimal {
        match self {
            ChargeValue::Amount(v) | ChargeValue::Rate(v) => *v,
        }
    }

    pub fn is_rate(&self) -> bool {
        matches!(self, ChargeValue::Rate(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    /// Category label, e.g. "FX Margin", "Wire Fee", "FIRA Fee"
    pub kind: String,

    pub value: ChargeValue,

    /// Absolute amount this charge adds to the provider's fee total
    pub contribution: Decimal,
}

impl Charge {
    /// Absolute fee; contributes its own amount to the total
    pub fn amount(kind: impl Into<String>, amount: Decimal) -> Result<Self> {
        let kind = kind.into();
        Self::validate_magnitude(&kind, amount)?;

        Ok(Self {
            kind,
            value: ChargeValue::Amount(amount),
            contribution: amount,
        })
    }

    /// Rate charge with the absolute contribution already resolved upstream
    pub fn rate(kind: impl Into<String>, rate: Decimal, contribution: Decimal) -> Result<Self> {
        let kind = kind.into();
        Self::validate_magnitude(&kind, rate)?;
        Self::validate_magnitude(&kind, contribution)?;

        Ok(Self {
            kind,
            value: ChargeValue::Rate(rate),
            contribution,
        })
    }

    /// Zero-valued charges are shown as "FREE" / "0 Margin"
    pub fn is_free(&self) -> bool {
        self.value.magnitude().is_zero() && self.contribution.is_zero()
    }

    /// Proportional copy: absolute figures scale, rates stay put
    pub(crate) fn scaled(&self, ratio: Decimal) -> Result<Self> {
        let value = match self.value {
            ChargeValue::Amount(v) => ChargeValue::Amount(checked_mul(&self.kind, v, ratio)?),
            rate @ ChargeValue::Rate(_) => rate,
        };

        Ok(Self {
            kind: self.kind.clone(),
            value,
            contribution: checked_mul(&self.kind, self.contribution, ratio)?,
        })
    }

    /// Re-check a charge that was deserialized rather than built through
    /// [`Charge::amount`] or [`Charge::rate`]
    pub fn validate(&self) -> Result<()> {
        Self::validate_magnitude(&self.kind, self.value.magnitude())?;
        Self::validate_magnitude(&self.kind, self.contribution)?;

        if let ChargeValue::Amount(amount) = self.value {
            if amount != self.contribution {
                return Err(AppError::invalid_input(format!(
                    "{}: contribution {} does not match amount {}",
                    self.kind, self.contribution, amount
                )));
            }
        }

        Ok(())
    }

    fn validate_magnitude(kind: &str, value: Decimal) -> Result<()> {
        if kind.trim().is_empty() {
            return Err(AppError::invalid_input("Charge kind cannot be empty"));
        }

        if value < Decimal::ZERO {
            return Err(AppError::invalid_input(format!(
                "{} cannot be negative, got: {}",
                kind, value
            )));
        }

        Ok(())
    }
}
