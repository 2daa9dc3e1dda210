use axum::{
    Router,
    routing::{get, post},
};

use crate::incoming::http_axum::{
    handlers::{
        analyze::analyze_drawing, canvas::get_canvas_config, drawing::save_drawing,
        health::health_check,
    },
    router_ext::RouterExt,
};
use crate::shared::app_state::AppState;

pub fn build_application_router(state: &AppState) -> Router<AppState> {
    let read_routes = Router::new()
        .route("/health", get(health_check))
        .route("/canvas/config", get(get_canvas_config));

    let upload_routes = Router::new()
        .route("/analyze", post(analyze_drawing))
        .route("/drawing/save", post(save_drawing))
        .with_body_limit(state.config.server.max_body_bytes);

    read_routes.merge(upload_routes).with_request_id()
}
