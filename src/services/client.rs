//! Gemini client service
//!
//! Wraps a Transport with credential gating, failure classification and
//! quota-flag bookkeeping.

use crate::models::gemini::GenerateContentResponse;
use crate::services::classifier::{classify_failure, error_message, parse_error_body, FailureClass};
use crate::services::credentials::CredentialManager;
use crate::services::prompts::build_request;
use crate::services::transport::Transport;
use crate::utils::error::{AssistError, AssistResult};
use crate::utils::logging::create_request_log_summary;
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct GeminiClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<CredentialManager>,
}

impl GeminiClient {
    pub fn new(transport: Arc<dyn Transport>, credentials: Arc<CredentialManager>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Generate text for `prompt`, returning the first candidate's first part.
    ///
    /// Quota failures set the persisted quota flag; any success clears it.
    pub async fn generate(&self, prompt: &str, system_prompt: &str) -> AssistResult<String> {
        let api_key = self
            .credentials
            .api_key()
            .ok_or(AssistError::MissingCredential)?;

        let request = build_request(prompt, system_prompt);

        let log_summary = create_request_log_summary(&request);
        if let Ok(summary_json) = serde_json::to_string_pretty(&log_summary) {
            debug!("📤 Gemini Request:\n{}", summary_json);
        }

        let reply = self
            .transport
            .generate_content(&api_key, &request)
            .await
            .map_err(|e| {
                error!("Gemini transport ({}) failed: {:#}", self.transport.name(), e);
                AssistError::Transport(format!("{:#}", e))
            })?;

        if !reply.is_success() {
            let body = parse_error_body(&reply.body);
            return match classify_failure(reply.status, body.as_ref()) {
                FailureClass::QuotaExceeded => {
                    warn!("Gemini quota exceeded (status {})", reply.status);
                    self.credentials.mark_quota_exceeded();
                    Err(AssistError::QuotaExceeded)
                }
                FailureClass::Provider { status } => {
                    let message = error_message(body.as_ref());
                    error!("Gemini API error: {} - {:?}", status, message);
                    Err(AssistError::Provider { status, message })
                }
            };
        }

        self.credentials.clear_quota_flag();

        let response: GenerateContentResponse = serde_json::from_str(&reply.body)
            .map_err(|e| AssistError::MalformedResponse(format!("invalid JSON body: {}", e)))?;

        let text = response
            .first_text()
            .ok_or_else(|| AssistError::MalformedResponse("no candidate text".to_string()))?;

        debug!("Gemini request completed successfully ({} chars)", text.len());
        Ok(text.to_string())
    }
}
