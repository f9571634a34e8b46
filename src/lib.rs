//! FIRA fee comparison service
//!
//! Compares what a current remittance provider charged on a FIRA/FIRC
//! certificate against a competing provider and renders the savings.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::comparisons;
pub use modules::fira;
