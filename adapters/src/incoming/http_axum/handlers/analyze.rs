use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_valid::Valid;
use tracing::debug;

use canvas_insight_application::{
    analysis::presenter::{Presentation, present},
    ports::incoming::analysis::AnalyzeDrawingUseCase,
};

use crate::incoming::http_axum::{
    core::extractors::{BearerHeader, resolve_credential},
    dto::{
        requests::{AnalyzeRequest, decode_drawing},
        responses::ApiResponse,
    },
    error_mapper::{HttpError, log_app_error, status_code_for},
};
use crate::shared::app_state::AppState;

/// Runs one analysis and answers with what the user should see, on success and on failure.
pub async fn analyze_drawing(
    State(state): State<AppState>,
    bearer: BearerHeader,
    Valid(Json(request)): Valid<Json<AnalyzeRequest>>,
) -> Result<Response, HttpError> {
    let credential = resolve_credential(bearer, request.api_key);
    // The missing key takes precedence over a malformed drawing.
    let drawing = match decode_drawing(request.drawing) {
        Ok(drawing) => drawing,
        Err(e) if credential.is_empty() => {
            debug!("Ignoring undecodable drawing sent without an API key: {}", e);
            None
        }
        Err(e) => return Err(HttpError(e)),
    };

    let analyze_uc: &dyn AnalyzeDrawingUseCase = &*state.analyze_use_case;
    let result = analyze_uc.analyze_drawing(drawing, credential).await;
    let presentation = present(&result);

    let response = match result {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success_with_data(Some(presentation))),
        )
            .into_response(),
        Err(app_error) => {
            log_app_error(&app_error);
            let status_code = status_code_for(&app_error);
            let message = presentation.to_string();
            (
                status_code,
                Json(ApiResponse::<Presentation>::failure_with_data(
                    message,
                    Some(presentation),
                )),
            )
                .into_response()
        }
    };

    Ok(response)
}
