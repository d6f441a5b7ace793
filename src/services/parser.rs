//! Structured output parsing
//!
//! Turns model text into typed results. A mismatch is an ordinary
//! `Err(ParseError)`; the assistant answers it with fallback content.

use crate::models::{InterviewQuestion, ResumeAnalysis, RoadmapMilestone};
use serde::Deserialize;
use thiserror::Error;

/// Number of feedback lines a resume analysis must carry
pub const FEEDBACK_ENTRIES: usize = 5;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected shape: {0}")]
    Shape(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

fn shape(message: impl Into<String>) -> ParseError {
    ParseError::Shape(message.into())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}

/// Comma separated job titles, trimmed, empties dropped
pub fn parse_recommendations(text: &str) -> ParseResult<Vec<String>> {
    let titles: Vec<String> = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if titles.is_empty() {
        return Err(shape("no recommendations in reply"));
    }
    Ok(titles)
}

pub fn parse_interview_questions(text: &str) -> ParseResult<Vec<InterviewQuestion>> {
    let questions: Vec<InterviewQuestion> = serde_json::from_str(strip_json_fences(text))?;
    if questions.is_empty() {
        return Err(shape("empty question list"));
    }
    Ok(questions)
}

#[derive(Deserialize)]
struct RawAnalysis {
    score: f64,
    feedback: Vec<String>,
}

pub fn parse_resume_analysis(text: &str) -> ParseResult<ResumeAnalysis> {
    let raw: RawAnalysis = serde_json::from_str(strip_json_fences(text))?;

    if !(0.0..=100.0).contains(&raw.score) {
        return Err(shape(format!("score {} outside 0-100", raw.score)));
    }
    if raw.feedback.len() != FEEDBACK_ENTRIES {
        return Err(shape(format!(
            "expected {} feedback entries, got {}",
            FEEDBACK_ENTRIES,
            raw.feedback.len()
        )));
    }

    Ok(ResumeAnalysis {
        score: raw.score.round() as u8,
        feedback: raw.feedback,
    })
}

/// Roadmap milestones; the final milestone is renamed to `target_role`.
pub fn parse_roadmap(text: &str, target_role: &str) -> ParseResult<Vec<RoadmapMilestone>> {
    let mut milestones: Vec<RoadmapMilestone> = serde_json::from_str(strip_json_fences(text))?;

    let last = milestones
        .last_mut()
        .ok_or_else(|| shape("empty roadmap"))?;
    last.milestone = target_role.to_string();

    Ok(milestones)
}
