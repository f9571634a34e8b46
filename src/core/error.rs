use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A required figure is missing, negative or non-finite
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A zero amount was used as a divisor
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Analysis session received an event its current phase cannot accept
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Uploaded document is empty, too large or of an unaccepted type
    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    /// FIRA processor reported a failure
    #[error("Processing error: {0}")]
    Processing(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        AppError::DivisionByZero(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        AppError::InvalidState(msg.into())
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        AppError::Processing(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Stable machine-readable code used in JSON error bodies
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::DivisionByZero(_) => "DIVISION_BY_ZERO",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::UnsupportedDocument(_) => "UNSUPPORTED_DOCUMENT",
            AppError::Processing(_) => "PROCESSING_FAILED",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::HttpClient(_) => "UPSTREAM_UNAVAILABLE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::DivisionByZero(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::UnsupportedDocument(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Processing(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
