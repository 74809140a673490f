use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Both collection files are readable", body = HealthResponse),
        (status = 503, description = "A collection file is unreadable", body = ErrorResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.registration.lock().await.store().load().await.map(|u| u.len());
    let blogs = state.blogs.lock().await.store().load().await.map(|b| b.len());

    match (users, blogs) {
        (Ok(_), Ok(_)) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
            }),
        )
            .into_response(),
        (Err(e), _) | (_, Err(e)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: format!("Collection unavailable: {}", e),
            }),
        )
            .into_response(),
    }
}
