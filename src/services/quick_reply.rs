//! Offline quick replies for the chat widget

/// Opening message shown when the widget opens
pub const GREETING: &str =
    "Hi there! I'm your CareerCraft AI assistant. How can I help with your career journey today?";

const RESUME_REPLY: &str = "I can help you build a professional resume tailored to your target job. For more detailed assistance, visit our Resume Builder section!";
const INTERVIEW_REPLY: &str = "Interview preparation is key to success. I can provide practice questions for common roles. Would you like to see some examples?";
const CAREER_REPLY: &str = "Finding the right career path can be challenging. Our Career Test can help identify roles that match your personality and skills!";
const HELP_REPLY: &str = "I can assist with resume building, interview preparation, career guidance, and more. What specific area would you like help with?";
const DEFAULT_REPLY: &str = "I'm here to support your career journey. For a more in-depth conversation, check out our full AI Chat feature!";

/// Keyword routes, checked in order
const ROUTES: &[(&[&str], &str)] = &[
    (&["resume", "cv"], RESUME_REPLY),
    (&["interview"], INTERVIEW_REPLY),
    (&["career", "job"], CAREER_REPLY),
    (&["help"], HELP_REPLY),
];

pub fn quick_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    ROUTES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}
