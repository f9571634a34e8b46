pub mod controllers;
pub mod models;
pub mod services;

pub use models::{FiraData, FiraProcessingResult, FiraUpload};
pub use services::{AnalysisService, FiraMapper, FiraProcessor};
