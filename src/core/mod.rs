pub mod currency;
pub mod error;
pub mod money;

pub use currency::Currency;
pub use error::{AppError, Result};
pub use money::{format_money, format_percent, Locale};
