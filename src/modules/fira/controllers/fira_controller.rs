use actix_web::{http::header, web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use serde::Serialize;
use uuid::Uuid;

use crate::app::AppState;
use crate::core::AppError;
use crate::modules::comparisons::models::ComparisonResult;
use crate::modules::comparisons::services::ComparisonView;
use crate::modules::fira::models::{FiraUpload, UploadParams};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub processor: String,
    pub comparison: ComparisonResult,
    pub display: ComparisonView,
}

/// Upload a FIRA document and return the provider comparison
///
/// POST /v1/fira/analyze?fileName=..&paymentMethod=..&importerId=..
pub async fn analyze_document(
    state: web::Data<AppState>,
    req: HttpRequest,
    params: web::Query<UploadParams>,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let params = params.into_inner();
    let bytes = read_document(payload, &params.file_name, state.max_upload_bytes).await?;
    let upload = FiraUpload::new(params, content_type, bytes);
    let outcome = state.analysis.analyze(upload).await?;

    let display = ComparisonView::render(&outcome.comparison, state.display.locale);
    Ok(HttpResponse::Ok().json(AnalysisResponse {
        analysis_id: outcome.analysis_id,
        processor: outcome.processor,
        comparison: outcome.comparison,
        display,
    }))
}

/// Collect the request body, stopping as soon as it passes the upload limit
async fn read_document(
    mut payload: web::Payload,
    file_name: &str,
    max_bytes: usize,
) -> Result<Vec<u8>, AppError> {
    let mut bytes = Vec::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk
            .map_err(|e| AppError::invalid_input(format!("Failed to read {}: {}", file_name, e)))?;

        if bytes.len() + chunk.len() > max_bytes {
            return Err(AppError::UnsupportedDocument(format!(
                "{} exceeds the {} byte limit",
                file_name, max_bytes
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

/// Configure FIRA routes
pub fn configure_fira_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/v1/fira").route("/analyze", web::post().to(analyze_document)));
}
