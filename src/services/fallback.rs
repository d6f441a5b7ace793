//! Static fallback content
//!
//! `offline` tables answer when there is no credential or the live reply
//! was unusable; `failure` tables answer when the provider call failed.

use crate::models::{ChatReply, InterviewQuestion, ResumeAnalysis, RoadmapMilestone, UseCase};

/// Error text attached to the apology reply
pub const CHAT_ERROR: &str = "Failed to generate AI response";

const CHAT_APOLOGY: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

/// Canned chat reply for a use case
pub fn chat(use_case: UseCase) -> ChatReply {
    match use_case {
        UseCase::Resume => ChatReply::new(
            "Here are some suggestions for improving your resume based on industry standards:

1. Quantify your achievements with metrics
2. Use action verbs at the beginning of bullet points
3. Tailor your keywords to match the job description
4. Keep your resume to 1-2 pages in length
5. Use a clean, professional format",
            &[
                "Add more quantifiable achievements",
                "Remove outdated experience",
                "Reorganize skills section",
            ],
        ),
        UseCase::Interview => ChatReply::new(
            "Based on the job role you're targeting, be prepared to answer these questions:

1. Tell me about a time you faced a significant challenge in your previous role
2. How do you prioritize tasks when dealing with multiple deadlines?
3. What are your greatest professional strengths and weaknesses?
4. Where do you see yourself in five years?
5. Why are you interested in working for this company?",
            &[
                "Practice the STAR method",
                "Research company values",
                "Prepare questions to ask",
            ],
        ),
        UseCase::General => ChatReply::new(
            "Based on your profile, here are some career development recommendations:

1. Focus on developing technical skills in high-demand areas
2. Network with professionals in your target industry
3. Consider obtaining relevant certifications
4. Join professional organizations in your field
5. Create a portfolio showcasing your best work",
            &[
                "Update LinkedIn profile",
                "Join industry webinars",
                "Find a mentor in your field",
            ],
        ),
    }
}

/// Generic error payload for a failed chat request
pub fn chat_error() -> ChatReply {
    ChatReply {
        content: CHAT_APOLOGY.to_string(),
        suggestions: Vec::new(),
        error: Some(CHAT_ERROR.to_string()),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn recommendations_offline() -> Vec<String> {
    strings(&[
        "Full Stack Developer",
        "UX/UI Designer",
        "Product Manager",
        "Data Scientist",
        "DevOps Engineer",
    ])
}

pub fn recommendations_failure() -> Vec<String> {
    strings(&[
        "Software Developer",
        "Digital Marketing Specialist",
        "Business Analyst",
        "Project Manager",
        "Content Strategist",
    ])
}

fn questions(pairs: &[(&str, &str)]) -> Vec<InterviewQuestion> {
    pairs
        .iter()
        .map(|(question, tip)| InterviewQuestion {
            question: question.to_string(),
            tip: tip.to_string(),
        })
        .collect()
}

/// Role-matched question list: developer/engineer, design, or generic
pub fn interview_questions_offline(job_role: &str) -> Vec<InterviewQuestion> {
    let role = job_role.to_lowercase();

    if role.contains("developer") || role.contains("engineer") {
        questions(&[
            (
                "Explain how you would design a scalable web application architecture.",
                "Focus on microservices, load balancing, and database optimization strategies.",
            ),
            (
                "Describe a challenging bug you encountered and how you solved it.",
                "Highlight your debugging process and problem-solving methodology.",
            ),
            (
                "How do you stay updated with the latest technologies and best practices?",
                "Mention specific resources, communities, or learning methods you use.",
            ),
            (
                "Tell me about a time you had to refactor code to improve performance.",
                "Quantify the performance improvement and explain your approach.",
            ),
            (
                "How do you ensure code quality and prevent regression bugs?",
                "Discuss testing strategies, code reviews, and CI/CD practices.",
            ),
        ])
    } else if role.contains("design") {
        questions(&[
            (
                "Walk me through your design process from concept to implementation.",
                "Emphasize user research, wireframing, prototyping, and iteration.",
            ),
            (
                "How do you gather and incorporate user feedback into your designs?",
                "Discuss usability testing methods and how you prioritize changes.",
            ),
            (
                "Describe a design challenge you faced and how you overcame it.",
                "Focus on the problem-solving aspects and business constraints you navigated.",
            ),
            (
                "How do you balance aesthetic choices with usability requirements?",
                "Highlight your understanding of accessibility and inclusive design principles.",
            ),
            (
                "Tell me about a time when you had to defend a design decision to stakeholders.",
                "Demonstrate your communication skills and ability to articulate design reasoning.",
            ),
        ])
    } else {
        questions(&[
            (
                "What interests you about this role and our company?",
                "Show that you've researched the company and understand how your skills align.",
            ),
            (
                "Describe a time when you had to adapt to a significant change at work.",
                "Highlight your flexibility and positive attitude toward change.",
            ),
            (
                "How do you handle working under pressure and tight deadlines?",
                "Give a specific example showing your prioritization skills and calm approach.",
            ),
            (
                "Tell me about a time you collaborated with a difficult team member.",
                "Focus on your communication and conflict resolution strategies.",
            ),
            (
                "Where do you see yourself professionally in 3-5 years?",
                "Connect your career goals to the position and company growth.",
            ),
        ])
    }
}

pub fn interview_questions_failure() -> Vec<InterviewQuestion> {
    questions(&[
        (
            "What are your greatest professional strengths?",
            "Focus on strengths relevant to the position and provide specific examples.",
        ),
        (
            "Why are you interested in this role?",
            "Research the company and role beforehand to give a targeted answer.",
        ),
        (
            "Describe a challenging situation at work and how you handled it.",
            "Use the STAR method: Situation, Task, Action, Result.",
        ),
        (
            "Where do you see yourself in 5 years?",
            "Show ambition while being realistic about career progression.",
        ),
        (
            "Do you have any questions for us?",
            "Always prepare thoughtful questions that show your interest in the role.",
        ),
    ])
}

pub fn resume_analysis_offline() -> ResumeAnalysis {
    ResumeAnalysis {
        score: 78,
        feedback: strings(&[
            "Consider adding more quantifiable achievements",
            "Skills section could be expanded with relevant keywords",
            "Professional summary should be more concise and impactful",
            "Education section formatting needs improvement",
            "Add relevant certifications to strengthen credentials",
        ]),
    }
}

pub fn resume_analysis_failure() -> ResumeAnalysis {
    ResumeAnalysis {
        score: 65,
        feedback: strings(&[
            "Error processing detailed analysis",
            "Make sure your resume uses industry keywords",
            "Ensure your resume is in a standard format",
            "Quantify your achievements where possible",
            "Keep formatting simple for ATS systems",
        ]),
    }
}

fn milestone(name: &str, timeframe: &str, skills: &[&str]) -> RoadmapMilestone {
    RoadmapMilestone {
        milestone: name.to_string(),
        timeframe: timeframe.to_string(),
        skills: strings(skills),
    }
}

/// Four-step roadmap ending at `target_role`
pub fn roadmap(target_role: &str) -> Vec<RoadmapMilestone> {
    vec![
        milestone(
            "Skill Foundation",
            "0-6 months",
            &["Core skills", "Fundamental knowledge", "Basic tools"],
        ),
        milestone(
            "Practical Experience",
            "6-12 months",
            &["Applied learning", "Portfolio development", "Industry networking"],
        ),
        milestone(
            "Professional Growth",
            "1-2 years",
            &["Specialized techniques", "Team collaboration", "Project experience"],
        ),
        milestone(
            target_role,
            "2-3 years",
            &["Advanced expertise", "Leadership", "Strategic thinking"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_fallbacks_have_three_suggestions() {
        for use_case in [UseCase::General, UseCase::Resume, UseCase::Interview] {
            let reply = chat(use_case);
            assert_eq!(reply.suggestions.len(), 3);
            assert!(!reply.is_error());
        }
        assert!(chat(UseCase::Resume).content.contains("Quantify your achievements"));

        let error = chat_error();
        assert_eq!(error.error.as_deref(), Some(CHAT_ERROR));
        assert!(error.suggestions.is_empty());
    }

    #[test]
    fn test_interview_role_matching() {
        let dev = interview_questions_offline("Backend ENGINEER");
        assert!(dev[0].question.contains("scalable web application"));
        assert_eq!(dev, interview_questions_offline("frontend developer"));

        let design = interview_questions_offline("Product Designer");
        assert!(design[0].question.contains("design process"));

        let generic = interview_questions_offline("Accountant");
        assert!(generic[0].question.contains("this role and our company"));

        for list in [dev, design, generic, interview_questions_failure()] {
            assert_eq!(list.len(), 5);
        }
    }

    #[test]
    fn test_resume_analysis_shapes() {
        for analysis in [resume_analysis_offline(), resume_analysis_failure()] {
            assert!(analysis.score <= 100);
            assert_eq!(analysis.feedback.len(), 5);
        }
    }

    #[test]
    fn test_roadmap_ends_at_target() {
        let steps = roadmap("Staff Engineer");
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[3].milestone, "Staff Engineer");
        assert_eq!(steps[0].timeframe, "0-6 months");
    }
}
