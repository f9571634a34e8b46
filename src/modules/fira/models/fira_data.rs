use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures extracted from a FIRA/FIRC certificate.
///
/// `inr_amount` is the home-currency amount credited on the certificate, i.e.
/// the remitted amount at the provider's `calculated_exchange_rate`. It is the
/// transaction amount both providers' fees are taken from. `fx_rate_skydo` is
/// the market rate and only feeds the displayed FX margin; FX costs enter the
/// fee totals through `platform_fx_fee` and `skydo_fx_fee`, already resolved
/// to home-currency amounts by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiraData {
    #[serde(default)]
    pub id: Option<i64>,

    /// Remitted amount in the foreign currency
    #[serde(default)]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub inr_amount: Option<Decimal>,

    /// Market rate quoted by the challenger
    #[serde(default)]
    pub fx_rate_skydo: Option<Decimal>,

    /// Rate the current provider actually applied
    #[serde(default)]
    pub calculated_exchange_rate: Option<Decimal>,

    #[serde(default)]
    pub transaction_skydo_fee: Decimal,
    #[serde(default)]
    pub skydo_fira_fee: Decimal,
    #[serde(default)]
    pub skydo_wire_fee: Decimal,
    #[serde(default)]
    pub skydo_fx_fee: Decimal,

    #[serde(default)]
    pub platform_fira_fee: Decimal,
    #[serde(default)]
    pub platform_wire_fee: Decimal,
    #[serde(default)]
    pub platform_transaction_fee: Decimal,
    #[serde(default)]
    pub platform_fx_fee: Decimal,

    /// Amount the current provider credited, as printed on the certificate
    #[serde(default)]
    pub final_inr_amount: Option<Decimal>,
    #[serde(default)]
    pub final_inr_amount_skydo: Option<Decimal>,

    #[serde(default)]
    pub value_date: Option<NaiveDate>,
}

/// Envelope returned by a FIRA processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiraProcessingResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub fira_data: Option<FiraData>,
    #[serde(default)]
    pub processing_time_ms: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl FiraProcessingResult {
    /// Human-readable failure reason for an unsuccessful result
    pub fn failure_reason(&self) -> String {
        if self.errors.is_empty() {
            if self.message.is_empty() {
                "FIRA processing failed".to_string()
            } else {
                self.message.clone()
            }
        } else {
            self.errors.join("; ")
        }
    }
}
