use actix_web::{error, HttpRequest};

use crate::core::AppError;

/// Malformed or mistyped JSON bodies become `INVALID_INPUT` errors
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected JSON body");
    AppError::invalid_input(err.to_string()).into()
}

/// Missing or mistyped query parameters become `INVALID_INPUT` errors
pub fn query_error_handler(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected query string");
    AppError::invalid_input(err.to_string()).into()
}
