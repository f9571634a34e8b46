mod charge;
mod comparison_result;
mod provider_breakdown;

pub use charge::{Charge, ChargeValue};
pub use comparison_result::{ComparisonInput, ComparisonResult, Savings, SourceAmount};
pub use provider_breakdown::ProviderBreakdown;
