pub mod fee_calculator;
pub mod presenter;

pub use fee_calculator::FeeCalculator;
pub use presenter::{ChargeLine, ComparisonView, ProviderView};
