use axum::{extract::State, Json};
use common::guidance::service::{AskOutcome, AskRequest};
use serde::{Deserialize, Serialize};

use crate::{api_state::ApiState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct AskPayload {
    pub conversation_id: Option<String>,
    pub guru_id: String,
    pub user_message: String,
    pub user_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub conversation_id: String,
    pub reply: String,
}

/// One exchange: resolve the guru, reply, persist best-effort. Responds 404
/// when the guru cannot be resolved; store outages never fail the request.
pub async fn ask_guru(
    State(state): State<ApiState>,
    Json(payload): Json<AskPayload>,
) -> Result<Json<AskResponse>, ApiError> {
    let AskOutcome {
        conversation_id,
        reply,
    } = state
        .guidance
        .handle_ask(AskRequest {
            conversation_id: payload.conversation_id,
            guru_id: payload.guru_id,
            user_message: payload.user_message,
            user_name: payload.user_name,
        })
        .await?;

    Ok(Json(AskResponse {
        conversation_id,
        reply,
    }))
}
