pub mod comparisons;
pub mod fira;
pub mod health;
