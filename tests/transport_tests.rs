//! HTTP transport tests
//!
//! Run the Gemini client against a mock HTTP server

use careercraft::config::GeminiConfig;
use careercraft::models::{AssistantMode, UseCase};
use careercraft::services::fallback;
use careercraft::services::{CareerAssistant, HttpTransport, Transport};
use careercraft::services::prompts::build_request;
use careercraft::store::{KeyValueStore, MemoryStore, QUOTA_ERROR_KEY};
use careercraft::utils::error::AssistError;
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-pro:generateContent";

fn gemini_config(server: &MockServer) -> GeminiConfig {
    GeminiConfig {
        base_url: server.url("/v1beta"),
        model: "gemini-1.5-pro".to_string(),
        timeout: 5,
    }
}

fn assistant_for(server: &MockServer) -> (CareerAssistant, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let transport = HttpTransport::new(&gemini_config(server)).unwrap();
    let assistant = CareerAssistant::new(store.clone(), Arc::new(transport));
    assistant.set_api_key("test-api-key");
    (assistant, store)
}

#[tokio::test]
async fn test_request_wire_format() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .query_param("key", "test-api-key")
                .header("content-type", "application/json")
                .json_body_partial(
                    r#"{
                        "contents": [{"role": "user", "parts": [{"text": "hello"}]}],
                        "systemInstruction": {"parts": [{"text": "be brief"}]},
                        "generationConfig": {"topK": 40, "maxOutputTokens": 1024}
                    }"#,
                );
            then.status(200).json_body(json!({
                "candidates": [{"content": {"role": "model", "parts": [{"text": "hi"}]}}]
            }));
        })
        .await;

    let transport = HttpTransport::new(&gemini_config(&server)).unwrap();
    let reply = transport
        .generate_content("test-api-key", &build_request("hello", "be brief"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("\"hi\""));
}

#[tokio::test]
async fn test_non_success_status_is_returned_not_raised() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(503).body("upstream unavailable");
        })
        .await;

    let transport = HttpTransport::new(&gemini_config(&server)).unwrap();
    let reply = transport
        .generate_content("k", &build_request("hello", "sys"))
        .await
        .unwrap();

    assert_eq!(reply.status, 503);
    assert_eq!(reply.body, "upstream unavailable");
    assert!(!reply.is_success());
}

#[tokio::test]
async fn test_end_to_end_chat_success() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Polish your summary."}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16}
            }));
        })
        .await;

    let (assistant, _store) = assistant_for(&server);
    let reply = assistant
        .generate_response("review", UseCase::Resume)
        .await
        .unwrap();

    assert_eq!(reply.content, "Polish your summary.");
    assert_eq!(reply.suggestions, UseCase::Resume.suggestions());
}

#[tokio::test]
async fn test_end_to_end_quota_exhaustion() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(429).json_body(json!({
                "error": {"code": 429, "message": "Quota exceeded for quota metric", "status": "RESOURCE_EXHAUSTED"}
            }));
        })
        .await;

    let (assistant, store) = assistant_for(&server);
    let reply = assistant
        .generate_response("hi", UseCase::General)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(reply, fallback::chat(UseCase::General));
    assert_eq!(store.get(QUOTA_ERROR_KEY).as_deref(), Some("true"));
    assert_eq!(assistant.mode(), AssistantMode::QuotaBackoff);
}

#[tokio::test]
async fn test_end_to_end_server_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(500).json_body(json!({
                "error": {"code": 500, "message": "Internal error", "status": "INTERNAL"}
            }));
        })
        .await;

    let (assistant, store) = assistant_for(&server);

    let result = assistant.generate_response("hi", UseCase::General).await;
    assert!(matches!(result, Err(AssistError::Provider { status: 500, .. })));

    let recommendations = assistant.generate_career_recommendations(&json!({})).await;
    assert_eq!(recommendations, fallback::recommendations_failure());

    mock.assert_hits_async(2).await;
    assert_eq!(store.get(QUOTA_ERROR_KEY), None);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let config = GeminiConfig {
        base_url: "http://127.0.0.1:9/v1beta".to_string(),
        model: "gemini-1.5-pro".to_string(),
        timeout: 2,
    };
    let store = Arc::new(MemoryStore::new());
    let assistant = CareerAssistant::new(store, Arc::new(HttpTransport::new(&config).unwrap()));
    assistant.set_api_key("SECRET-KEY-123");

    let result = assistant.generate_response("hi", UseCase::General).await;
    match result {
        Err(AssistError::Transport(message)) => {
            assert!(message.contains("Failed to send request"));
            assert!(!message.contains("SECRET-KEY-123"), "key leaked: {}", message);
        }
        other => panic!("expected transport error, got {:?}", other),
    }

    let questions = assistant.generate_interview_questions("Engineer").await;
    assert_eq!(questions, fallback::interview_questions_failure());
}
