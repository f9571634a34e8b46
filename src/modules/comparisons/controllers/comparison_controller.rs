//! Comparison controller for HTTP endpoints
//!
//! Computes comparisons from already-extracted FIRA figures and rescales
//! existing comparisons when the client edits the transaction amount.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::core::AppError;
use crate::modules::comparisons::models::ComparisonResult;
use crate::modules::comparisons::services::ComparisonView;
use crate::modules::fira::models::FiraData;

#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub comparison: ComparisonResult,
    pub display: ComparisonView,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescaleRequest {
    pub comparison: ComparisonResult,
    pub new_transaction_amount: Decimal,
}

/// Compare providers for the given FIRA figures
///
/// POST /v1/comparisons
pub async fn create_comparison(
    state: web::Data<AppState>,
    body: web::Json<FiraData>,
) -> Result<HttpResponse, AppError> {
    let data = body.into_inner();
    let mapper = state.analysis.mapper();

    let input = mapper.map(&data)?;
    let comparison = state.calculator.compare(input)?;
    mapper.reconcile(&data, &comparison);

    tracing::info!(
        transaction_amount = %comparison.transaction_amount,
        savings = %comparison.savings_amount,
        "Comparison computed"
    );

    let display = ComparisonView::render(&comparison, state.display.locale);
    Ok(HttpResponse::Ok().json(ComparisonResponse { comparison, display }))
}

/// Rescale an existing comparison to a new transaction amount
///
/// The submitted comparison is re-checked before it is scaled.
///
/// POST /v1/comparisons/rescale
pub async fn rescale_comparison(
    state: web::Data<AppState>,
    body: web::Json<RescaleRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();

    let comparison = state
        .calculator
        .rescale_comparison(&request.comparison, request.new_transaction_amount)?;

    tracing::info!(
        from = %request.comparison.transaction_amount,
        to = %comparison.transaction_amount,
        "Comparison rescaled"
    );

    let display = ComparisonView::render(&comparison, state.display.locale);
    Ok(HttpResponse::Ok().json(ComparisonResponse { comparison, display }))
}

/// Configure comparison routes
pub fn configure_comparison_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/comparisons")
            .route("", web::post().to(create_comparison))
            .route("/rescale", web::post().to(rescale_comparison)),
    );
}
