use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::app::AppState;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    /// Which FIRA processor serves uploads ("mock" or "http")
    pub processor: String,
    pub application: String,
}

/// GET /health - Liveness probe
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            processor: state.analysis.processor_name().to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
