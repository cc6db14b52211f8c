use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or incomplete multipart submission.
    #[error("{0}")]
    InvalidInput(String),

    /// Uploaded bytes are not valid UTF-8 text or not well-formed CSV.
    #[error("Error reading CSV: {0}")]
    CsvParse(String),

    /// Completion API call failed (network, non-2xx, malformed response).
    #[error("OpenAI API error: {0}")]
    OpenAI(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::CsvParse(_) => StatusCode::BAD_REQUEST,
            AppError::OpenAI(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
