//! Logging utilities
//!
//! Subscriber setup and request summaries for debug logs

use crate::config::LoggingConfig;
use crate::models::gemini::{GeminiContent, GenerateContentRequest};

/// Set to true to include full prompts and system instructions in debug logs
/// Default is false to reduce log verbosity
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Initialize the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::info!("Logging system initialized");
    Ok(())
}

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", kept, s.chars().count() - max_len)
    } else {
        s.to_string()
    }
}

fn content_preview(content: &GeminiContent, max_len: usize) -> serde_json::Value {
    let text: Vec<&str> = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    serde_json::Value::String(truncate_content(&text.join("\n"), max_len))
}

/// Create a filtered summary of a Gemini request for logging
/// Keeps original structure but truncates verbose content
pub fn create_request_log_summary(request: &GenerateContentRequest) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        return serde_json::to_value(request)
            .unwrap_or(serde_json::json!({"error": "serialize failed"}));
    }

    let contents: Vec<serde_json::Value> = request
        .contents
        .iter()
        .map(|c| {
            serde_json::json!({
                "role": c.role,
                "text": content_preview(c, 200),
            })
        })
        .collect();

    let system = request
        .system_instruction
        .as_ref()
        .map(|s| content_preview(s, 100))
        .unwrap_or(serde_json::Value::Null);

    serde_json::json!({
        "system": system,
        "contents": contents,
        "generationConfig": request.generation_config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gemini::GenerationConfig;

    #[test]
    fn test_truncate_content() {
        assert_eq!(truncate_content("short", 10), "short");
        assert_eq!(truncate_content("abcdefghij", 4), "abcd... (6 chars truncated)");
        // Multi-byte characters are never split
        assert_eq!(truncate_content("ééé", 1), "é... (2 chars truncated)");
    }

    #[test]
    fn test_request_log_summary_truncates_prompt() {
        let request = GenerateContentRequest {
            contents: vec![GeminiContent::text(Some("user"), "x".repeat(500))],
            system_instruction: Some(GeminiContent::text(None, "be brief")),
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 1024,
            },
        };

        let summary = create_request_log_summary(&request);
        assert_eq!(summary["system"], "be brief");
        assert!(summary["contents"][0]["text"]
            .as_str()
            .unwrap()
            .ends_with("(300 chars truncated)"));
        assert_eq!(summary["generationConfig"]["topK"], 40);
    }
}
