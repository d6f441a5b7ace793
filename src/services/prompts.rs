//! Prompt construction
//!
//! System instructions, suggestion lists and prompt templates for each
//! assistant operation, plus the fixed generation parameters.

use crate::models::gemini::{GeminiContent, GenerateContentRequest, GenerationConfig};
use crate::models::UseCase;

pub const TEMPERATURE: f32 = 0.7;
pub const TOP_K: u32 = 40;
pub const TOP_P: f32 = 0.95;
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

const GENERAL_SYSTEM_PROMPT: &str =
    "You are a helpful career assistant. Provide concise, professional advice.";

const RESUME_SYSTEM_PROMPT: &str = "You are a resume optimization expert. Provide actionable advice to improve resumes for ATS compatibility and professional presentation. Be specific and concise.";

const INTERVIEW_SYSTEM_PROMPT: &str = "You are an interview preparation coach. Provide specific tactics and sample answers for job interviews. Be concise and practical.";

const RESUME_SUGGESTIONS: [&str; 3] = [
    "How to add metrics to my resume",
    "Optimize my skills section",
    "Best format for work experience",
];

const INTERVIEW_SUGGESTIONS: [&str; 3] = [
    "How to answer 'tell me about yourself'",
    "Handling salary negotiations",
    "Questions to ask interviewers",
];

const GENERAL_SUGGESTIONS: [&str; 3] = [
    "Career path advice",
    "Skill development tips",
    "Industry trends",
];

pub const RECOMMENDATIONS_SYSTEM_PROMPT: &str = "You are a career counselor specializing in job recommendations. Analyze user profiles and suggest appropriate career paths.";

pub const INTERVIEW_QUESTIONS_SYSTEM_PROMPT: &str = "You are an interview preparation expert. Create challenging but common interview questions with helpful preparation tips.";

pub const RESUME_ANALYSIS_SYSTEM_PROMPT: &str = "You are a professional resume analyzer specializing in ATS optimization. Provide clear, specific feedback with actionable recommendations.";

pub const ROADMAP_SYSTEM_PROMPT: &str = "You are a career development expert. Create practical, detailed roadmaps for career progression with realistic timelines.";

impl UseCase {
    /// System instruction for chat in this context
    pub fn system_instruction(&self) -> &'static str {
        match self {
            UseCase::Resume => RESUME_SYSTEM_PROMPT,
            UseCase::Interview => INTERVIEW_SYSTEM_PROMPT,
            UseCase::General => GENERAL_SYSTEM_PROMPT,
        }
    }

    /// Follow-up prompts attached to live chat replies
    pub fn suggestions(&self) -> Vec<String> {
        let list: &[&str] = match self {
            UseCase::Resume => &RESUME_SUGGESTIONS,
            UseCase::Interview => &INTERVIEW_SUGGESTIONS,
            UseCase::General => &GENERAL_SUGGESTIONS,
        };
        list.iter().map(|s| s.to_string()).collect()
    }
}

/// The fixed sampling parameters
pub fn generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: TEMPERATURE,
        top_k: TOP_K,
        top_p: TOP_P,
        max_output_tokens: MAX_OUTPUT_TOKENS,
    }
}

/// Single-turn request with a system instruction
pub fn build_request(prompt: &str, system_prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![GeminiContent::text(Some("user"), prompt)],
        system_instruction: Some(GeminiContent::text(None, system_prompt)),
        generation_config: generation_config(),
    }
}

pub fn recommendations_prompt(profile_json: &str) -> String {
    format!(
        "Based on the following user profile, suggest 5 suitable career paths that match their skills, interests and values. Only return the job titles as a comma separated list: {}",
        profile_json
    )
}

pub fn interview_questions_prompt(job_role: &str) -> String {
    format!(
        "Generate 5 interview questions with preparation tips for a {} position. Format the response as JSON with an array of objects, each having 'question' and 'tip' properties.",
        job_role
    )
}

pub fn resume_analysis_prompt(resume_content: &str) -> String {
    format!(
        "
Analyze this resume content and provide:
1. An overall ATS optimization score from 0-100
2. A list of 5 specific improvement recommendations

Format your response as JSON with two fields:
- score: a number from 0-100
- feedback: an array of 5 string recommendations

Here's the resume to analyze:
{}",
        resume_content
    )
}

pub fn roadmap_prompt(current_skills: &[String], target_role: &str) -> String {
    format!(
        r#"
Create a career development roadmap for someone with these skills: {}
who wants to become a {}.

Format the response as JSON with this structure:
[
  {{
    "milestone": "Milestone name",
    "timeframe": "Time period (e.g., 0-3 months)",
    "skills": ["Skill 1", "Skill 2", "Skill 3"]
  }}
]

Include 5 milestones total, with the final milestone being the target role.
"#,
        current_skills.join(", "),
        target_role
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_case_prompts_and_suggestions() {
        assert!(UseCase::Resume.system_instruction().contains("ATS"));
        assert!(UseCase::Interview.system_instruction().contains("interview"));
        assert!(UseCase::General.system_instruction().contains("career assistant"));

        for use_case in [UseCase::General, UseCase::Resume, UseCase::Interview] {
            assert_eq!(use_case.suggestions().len(), 3);
        }
        assert_eq!(UseCase::Resume.suggestions()[0], "How to add metrics to my resume");
    }

    #[test]
    fn test_build_request() {
        let request = build_request("Hi", "Be brief");
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
        assert_eq!(request.contents[0].parts[0].text.as_deref(), Some("Hi"));

        let system = request.system_instruction.unwrap();
        assert_eq!(system.role, None);
        assert_eq!(system.parts[0].text.as_deref(), Some("Be brief"));

        assert_eq!(request.generation_config, generation_config());
        assert_eq!(request.generation_config.max_output_tokens, 1024);
    }

    #[test]
    fn test_templates_embed_arguments() {
        assert!(interview_questions_prompt("Backend Engineer").contains("a Backend Engineer position"));
        assert!(recommendations_prompt(r#"{"skills":["Rust"]}"#).ends_with(r#"{"skills":["Rust"]}"#));
        assert!(resume_analysis_prompt("Jane Doe").ends_with("Jane Doe"));

        let roadmap = roadmap_prompt(&["HTML".to_string(), "CSS".to_string()], "Senior Architect");
        assert!(roadmap.contains("these skills: HTML, CSS"));
        assert!(roadmap.contains("become a Senior Architect."));
        assert!(roadmap.contains("\"milestone\": \"Milestone name\""));
    }
}
