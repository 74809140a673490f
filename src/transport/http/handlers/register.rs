use crate::app::error::AppError;
use crate::domain::model::Registration;
use crate::transport::http::types::{malformed_body, AppState, ErrorResponse, MessageResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/register",
    request_body = Registration,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Validation failed or username taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn register_handler(
    State(state): State<AppState>,
    request: Result<Json<Registration>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(registration) = request.map_err(malformed_body)?;

    state.registration.lock().await.register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully!")),
    ))
}
