pub mod comparison_controller;

pub use comparison_controller::configure_comparison_routes;
