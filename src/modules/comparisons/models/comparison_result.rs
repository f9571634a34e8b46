use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::provider_breakdown::ProviderBreakdown;
use crate::core::Currency;

/// Foreign-currency figures the comparison was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceAmount {
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_date: Option<NaiveDate>,
}

/// Everything the calculator needs to produce a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonInput {
    /// Home-currency reference amount both sides are measured against
    pub transaction_amount: Decimal,
    pub currency: Currency,
    pub baseline: ProviderBreakdown,
    pub challenger: ProviderBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceAmount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    /// baseline fee total - challenger fee total; negative when the baseline is cheaper
    pub amount: Decimal,

    /// amount relative to what the baseline delivers, in percent;
    /// `None` when the baseline delivers nothing
    pub percent: Option<Decimal>,
}

/// Fully resolved comparison handed to the display layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub baseline: ProviderBreakdown,
    pub challenger: ProviderBreakdown,
    pub transaction_amount: Decimal,
    pub currency: Currency,
    pub baseline_amount_received: Decimal,
    pub challenger_amount_received: Decimal,
    pub savings_amount: Decimal,
    pub savings_percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceAmount>,
}

impl ComparisonResult {
    pub fn savings(&self) -> Savings {
        Savings {
            amount: self.savings_amount,
            percent: self.savings_percent,
        }
    }

    pub fn challenger_is_cheaper(&self) -> bool {
        self.savings_amount > Decimal::ZERO
    }
}
