//! Data models module
//!
//! Defines Gemini wire structures and the career result shapes

pub mod career;
pub mod gemini;

pub use career::{
    AssistantMode, ChatReply, InterviewQuestion, ResumeAnalysis, RoadmapMilestone, UseCase,
};
