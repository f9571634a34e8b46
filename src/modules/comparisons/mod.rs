pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Charge, ChargeValue, ComparisonResult, ProviderBreakdown};
pub use services::{ComparisonView, FeeCalculator};
