pub mod fira_controller;

pub use fira_controller::configure_fira_routes;
