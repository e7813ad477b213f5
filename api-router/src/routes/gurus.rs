use axum::{extract::State, response::IntoResponse, Json};
use common::storage::types::guru::GuruProfile;
use serde::Serialize;

use crate::api_state::ApiState;

#[derive(Serialize)]
pub struct GuruListResponse {
    pub gurus: Vec<GuruProfile>,
}

/// Listing never fails; a store outage degrades to the built-in guru set.
pub async fn list_gurus(State(state): State<ApiState>) -> impl IntoResponse {
    let gurus = state.guidance.list_gurus().await;

    Json(GuruListResponse { gurus })
}
