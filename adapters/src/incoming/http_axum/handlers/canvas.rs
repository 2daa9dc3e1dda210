use axum::{Json, extract::State};

use crate::incoming::http_axum::dto::responses::ApiResponse;
use crate::shared::app_state::AppState;
use domain::canvas_config::CanvasConfig;

/// Canvas settings a drawing surface needs to render itself.
pub async fn get_canvas_config(State(state): State<AppState>) -> Json<ApiResponse<CanvasConfig>> {
    Json(ApiResponse::success_with_data(Some(state.config.canvas.clone())))
}
