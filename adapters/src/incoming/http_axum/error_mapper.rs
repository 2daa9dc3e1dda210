use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error, warn};

use canvas_insight_application::error::AppError;

pub struct HttpError(pub AppError);

pub fn status_code_for(app_error: &AppError) -> StatusCode {
    match app_error {
        AppError::Domain(_) | AppError::MissingCredential | AppError::MissingDrawing => {
            StatusCode::BAD_REQUEST
        }
        AppError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::AnalysisInProgress => StatusCode::CONFLICT,
        AppError::AnalysisFailed { .. } => StatusCode::BAD_GATEWAY,
        AppError::EncodingFailed { .. }
        | AppError::CodecError { .. }
        | AppError::IoError(_)
        | AppError::ConfigError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn log_app_error(app_error: &AppError) {
    match app_error {
        AppError::Domain(_)
        | AppError::MissingCredential
        | AppError::MissingDrawing
        | AppError::ValidationError { .. }
        | AppError::AnalysisInProgress => {
            debug!("Client error response generated: {}", app_error);
        }
        AppError::AnalysisFailed { .. } => {
            warn!("Upstream error response generated: {}", app_error);
        }
        _ => {
            error!("Server error response generated: {}", app_error);
        }
    }
}

fn public_message(app_error: &AppError) -> String {
    match app_error {
        AppError::ConfigError { .. } => "Configuration error".to_string(),
        AppError::IoError(_) => "Internal server error".to_string(),
        AppError::CodecError { .. } => "Codec error".to_string(),
        _ => app_error.to_string(),
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let app_error = &self.0;
        log_app_error(app_error);

        let status_code = status_code_for(app_error);
        let error_response = json!({
            "ok": false,
            "error": public_message(app_error),
            "status": status_code.as_u16()
        });

        (status_code, Json(error_response)).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}
