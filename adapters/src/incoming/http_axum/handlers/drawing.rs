use axum::{Json, extract::State};
use axum_valid::Valid;

use canvas_insight_application::ports::incoming::drawing::{SaveDrawingUseCase, SavedDrawing};

use crate::incoming::http_axum::{
    dto::{
        requests::{SaveDrawingRequest, decode_drawing},
        responses::ApiResponse,
    },
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;

pub async fn save_drawing(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<SaveDrawingRequest>>,
) -> Result<Json<ApiResponse<SavedDrawing>>, HttpError> {
    let drawing = decode_drawing(request.drawing).map_err(HttpError)?;

    let save_uc: &dyn SaveDrawingUseCase = &*state.save_drawing_use_case;
    let saved = save_uc.save_drawing(drawing).await.map_err(HttpError)?;

    Ok(Json(ApiResponse::success_with_data(Some(saved))))
}
