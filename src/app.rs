//! Shared application state and route wiring, used by the binary and by tests.

use actix_web::web;
use std::sync::Arc;

use crate::config::{Config, DisplayConfig, FiraConfig};
use crate::core::Result;
use crate::middleware::{json_error_handler, query_error_handler};
use crate::modules::comparisons::controllers::configure_comparison_routes;
use crate::modules::comparisons::services::FeeCalculator;
use crate::modules::fira::controllers::configure_fira_routes;
use crate::modules::fira::services::{processor_from_config, AnalysisService, FiraMapper, FiraProcessor};
use crate::modules::health;

pub struct AppState {
    pub analysis: AnalysisService,
    pub calculator: FeeCalculator,
    pub display: DisplayConfig,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let processor: Arc<dyn FiraProcessor> = Arc::from(processor_from_config(&config.fira)?);
        Ok(Self::new(processor, config.display.clone(), &config.fira))
    }

    pub fn new(processor: Arc<dyn FiraProcessor>, display: DisplayConfig, fira: &FiraConfig) -> Self {
        Self {
            analysis: AnalysisService::new(
                processor,
                FiraMapper::new(&display),
                fira.max_upload_bytes,
            ),
            calculator: FeeCalculator::new(),
            display,
            max_upload_bytes: fira.max_upload_bytes,
        }
    }
}

/// Register every route plus the extractor configs that turn malformed
/// requests into JSON errors
pub fn configure_app(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(state)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(health::controllers::configure)
            .configure(configure_comparison_routes)
            .configure(configure_fira_routes);
    }
}
