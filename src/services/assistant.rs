//! Career assistant
//!
//! Decides between live Gemini generation and static fallback content for
//! every assistant operation.

use crate::models::{
    AssistantMode, ChatReply, InterviewQuestion, ResumeAnalysis, RoadmapMilestone, UseCase,
};
use crate::services::client::GeminiClient;
use crate::services::credentials::CredentialManager;
use crate::services::transport::Transport;
use crate::services::{fallback, parser, prompts};
use crate::store::KeyValueStore;
use crate::utils::error::AssistResult;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// How a live attempt ended when it did not produce a value
enum Miss {
    /// No credential, or the reply could not be parsed into the expected shape
    Unusable,
    /// The provider call failed
    Failed,
}

pub struct CareerAssistant {
    client: GeminiClient,
    credentials: Arc<CredentialManager>,
}

impl CareerAssistant {
    pub fn new(store: Arc<dyn KeyValueStore>, transport: Arc<dyn Transport>) -> Self {
        let credentials = Arc::new(CredentialManager::new(store));
        let client = GeminiClient::new(transport, credentials.clone());
        Self {
            client,
            credentials,
        }
    }

    pub fn credentials(&self) -> &CredentialManager {
        &self.credentials
    }

    pub fn set_api_key(&self, key: impl Into<String>) {
        self.credentials.set_credential(key);
    }

    pub fn has_api_key(&self) -> bool {
        self.credentials.has_credential()
    }

    pub fn clear_api_key(&self) {
        self.credentials.clear_credential();
    }

    pub fn mode(&self) -> AssistantMode {
        self.credentials.mode()
    }

    /// Chat reply for `prompt`.
    ///
    /// Quota failures, and any failure while a quota flag is still recorded,
    /// answer with the canned reply for `use_case`. Other failures are
    /// returned to the caller.
    pub async fn generate_response(&self, prompt: &str, use_case: UseCase) -> AssistResult<ChatReply> {
        info!("Processing chat request (context: {})", use_case);

        if self.credentials.has_credential() {
            match self
                .client
                .generate(prompt, use_case.system_instruction())
                .await
            {
                Ok(content) => {
                    return Ok(ChatReply {
                        content,
                        suggestions: use_case.suggestions(),
                        error: None,
                    })
                }
                Err(e) if e.is_quota() || self.credentials.quota_exceeded() => {
                    warn!("Using fallback chat reply due to API quota limits ({})", e.kind());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(fallback::chat(use_case))
    }

    /// Chat reply that never fails: propagated errors become the generic
    /// error payload
    pub async fn respond(&self, prompt: &str, use_case: UseCase) -> ChatReply {
        match self.generate_response(prompt, use_case).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error generating AI response: {}", e);
                fallback::chat_error()
            }
        }
    }

    /// Run one live generation and parse its text
    async fn attempt<T>(
        &self,
        operation: &str,
        prompt: String,
        system_prompt: &str,
        parse: impl FnOnce(&str) -> parser::ParseResult<T>,
    ) -> Result<T, Miss> {
        if !self.credentials.has_credential() {
            debug!("{}: no API key, using fallback", operation);
            return Err(Miss::Unusable);
        }

        let text = self
            .client
            .generate(&prompt, system_prompt)
            .await
            .map_err(|e| {
                warn!("{}: Gemini call failed ({}), using fallback", operation, e.kind());
                Miss::Failed
            })?;

        parse(&text).map_err(|e| {
            warn!("{}: failed to parse Gemini reply: {}", operation, e);
            Miss::Unusable
        })
    }

    /// Career path titles for a user profile; the list length varies with
    /// the model's reply
    pub async fn generate_career_recommendations<P>(&self, profile: &P) -> Vec<String>
    where
        P: Serialize + ?Sized,
    {
        let profile_json = match serde_json::to_string(profile) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize user profile: {}", e);
                return fallback::recommendations_failure();
            }
        };

        match self
            .attempt(
                "recommendations",
                prompts::recommendations_prompt(&profile_json),
                prompts::RECOMMENDATIONS_SYSTEM_PROMPT,
                parser::parse_recommendations,
            )
            .await
        {
            Ok(titles) => titles,
            Err(Miss::Unusable) => fallback::recommendations_offline(),
            Err(Miss::Failed) => fallback::recommendations_failure(),
        }
    }

    /// Five interview questions with preparation tips for `job_role`
    pub async fn generate_interview_questions(&self, job_role: &str) -> Vec<InterviewQuestion> {
        info!("Generating interview questions for role: {}", job_role);

        match self
            .attempt(
                "interview questions",
                prompts::interview_questions_prompt(job_role),
                prompts::INTERVIEW_QUESTIONS_SYSTEM_PROMPT,
                parser::parse_interview_questions,
            )
            .await
        {
            Ok(questions) => questions,
            Err(Miss::Unusable) => fallback::interview_questions_offline(job_role),
            Err(Miss::Failed) => fallback::interview_questions_failure(),
        }
    }

    /// ATS score and five improvement recommendations
    pub async fn analyze_resume(&self, resume_content: &str) -> ResumeAnalysis {
        match self
            .attempt(
                "resume analysis",
                prompts::resume_analysis_prompt(resume_content),
                prompts::RESUME_ANALYSIS_SYSTEM_PROMPT,
                parser::parse_resume_analysis,
            )
            .await
        {
            Ok(analysis) => analysis,
            Err(Miss::Unusable) => fallback::resume_analysis_offline(),
            Err(Miss::Failed) => fallback::resume_analysis_failure(),
        }
    }

    /// Milestones from `current_skills` to `target_role`; the last milestone
    /// is always `target_role`
    pub async fn generate_career_roadmap(
        &self,
        current_skills: &[String],
        target_role: &str,
    ) -> Vec<RoadmapMilestone> {
        info!("Generating career roadmap from current skills to {}", target_role);

        self.attempt(
            "roadmap",
            prompts::roadmap_prompt(current_skills, target_role),
            prompts::ROADMAP_SYSTEM_PROMPT,
            |text| parser::parse_roadmap(text, target_role),
        )
        .await
        .unwrap_or_else(|_| fallback::roadmap(target_role))
    }
}
