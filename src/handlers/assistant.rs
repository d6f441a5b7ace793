//! Assistant handlers
//!
//! JSON endpoints for chat, recommendations, interview questions, resume
//! analysis and roadmaps. Every endpoint answers 200 once the request is
//! valid; provider trouble shows up as fallback content, never as an
//! HTTP error.

use crate::handlers::AppState;
use crate::models::{ChatReply, InterviewQuestion, ResumeAnalysis, RoadmapMilestone, UseCase};
use crate::services::quick_reply::{quick_reply, GREETING};
use crate::utils::error::{helpers::require_text, AppResult};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    /// resume / interview / anything else for general guidance
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuickChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuickChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub profile: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct InterviewQuestionsRequest {
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InterviewQuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct ResumeAnalysisRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    pub target_role: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoadmapResponse {
    pub milestones: Vec<RoadmapMilestone>,
}

/// POST /v1/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatReply>> {
    require_text("prompt", &request.prompt)?;

    let use_case = request
        .context
        .as_deref()
        .map(UseCase::from_context)
        .unwrap_or_default();
    debug!("Chat request routed to {} context", use_case);

    Ok(Json(state.assistant.respond(&request.prompt, use_case).await))
}

/// GET /v1/chat/quick
///
/// Opening message for the chat widget
pub async fn quick_chat_greeting() -> Json<QuickChatResponse> {
    Json(QuickChatResponse {
        reply: GREETING.to_string(),
    })
}

/// POST /v1/chat/quick
pub async fn quick_chat(Json(request): Json<QuickChatRequest>) -> AppResult<Json<QuickChatResponse>> {
    require_text("message", &request.message)?;

    Ok(Json(QuickChatResponse {
        reply: quick_reply(&request.message).to_string(),
    }))
}

/// POST /v1/recommendations
pub async fn recommendations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendationsRequest>,
) -> Json<RecommendationsResponse> {
    let recommendations = state
        .assistant
        .generate_career_recommendations(&request.profile)
        .await;
    Json(RecommendationsResponse { recommendations })
}

/// POST /v1/interview-questions
pub async fn interview_questions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InterviewQuestionsRequest>,
) -> AppResult<Json<InterviewQuestionsResponse>> {
    require_text("role", &request.role)?;

    let questions = state
        .assistant
        .generate_interview_questions(request.role.trim())
        .await;
    Ok(Json(InterviewQuestionsResponse { questions }))
}

/// POST /v1/resume-analysis
pub async fn resume_analysis(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResumeAnalysisRequest>,
) -> AppResult<Json<ResumeAnalysis>> {
    require_text("content", &request.content)?;

    Ok(Json(state.assistant.analyze_resume(&request.content).await))
}

/// POST /v1/roadmap
pub async fn roadmap(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RoadmapRequest>,
) -> AppResult<Json<RoadmapResponse>> {
    require_text("target_role", &request.target_role)?;

    let milestones = state
        .assistant
        .generate_career_roadmap(&request.current_skills, request.target_role.trim())
        .await;
    Ok(Json(RoadmapResponse { milestones }))
}
