use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Root probe: always returns 200 to indicate the process is running.
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"message": "Guru Chat API is running"})),
    )
}
