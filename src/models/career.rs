//! Career assistant data models
//!
//! Result shapes returned by the assistant operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional context shaping chat prompts and suggestions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCase {
    #[default]
    General,
    Resume,
    Interview,
}

impl UseCase {
    /// Map a free-form context tag; anything unrecognised is general career guidance
    pub fn from_context(context: &str) -> Self {
        match context.trim().to_ascii_lowercase().as_str() {
            "resume" => UseCase::Resume,
            "interview" => UseCase::Interview,
            _ => UseCase::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::General => "general",
            UseCase::Resume => "resume",
            UseCase::Interview => "interview",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Informal assistant mode derived from credential and quota state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantMode {
    NoCredential,
    Live,
    QuotaBackoff,
}

/// Chat response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Message text
    pub content: String,
    /// Follow-up prompts offered to the user
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Set when the reply is the generic error payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Interview question with a preparation tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub tip: String,
}

/// Resume analysis: ATS score in `0..=100` and exactly five feedback lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub score: u8,
    pub feedback: Vec<String>,
}

/// One step of a career roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapMilestone {
    pub milestone: String,
    pub timeframe: String,
    pub skills: Vec<String>,
}

impl ChatReply {
    pub fn new(content: impl Into<String>, suggestions: &[&str]) -> Self {
        Self {
            content: content.into(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
