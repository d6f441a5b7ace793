//! Credential handlers
//!
//! Set, inspect and clear the Gemini API key

use crate::handlers::AppState;
use crate::models::AssistantMode;
use crate::utils::error::{helpers::validation_error, AppResult};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SetCredentialRequest {
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialStatus {
    pub configured: bool,
    pub mode: AssistantMode,
}

/// GET /v1/credential
pub async fn credential_status(State(state): State<Arc<AppState>>) -> Json<CredentialStatus> {
    Json(CredentialStatus {
        configured: state.assistant.has_api_key(),
        mode: state.assistant.mode(),
    })
}

/// PUT /v1/credential
pub async fn set_credential(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetCredentialRequest>,
) -> AppResult<StatusCode> {
    let key = request.api_key.trim();
    if key.is_empty() {
        return Err(validation_error("API key cannot be empty"));
    }
    if key.contains(char::is_whitespace) {
        return Err(validation_error("API key cannot contain whitespace characters"));
    }

    state.assistant.set_api_key(key);
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/credential
pub async fn clear_credential(State(state): State<Arc<AppState>>) -> StatusCode {
    state.assistant.clear_api_key();
    StatusCode::NO_CONTENT
}
