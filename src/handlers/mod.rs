//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod assistant;
pub mod credential;
pub mod health;
pub mod paths;

use crate::config::Settings;
use crate::middleware::logging::request_logging_middleware;
use crate::services::{CareerAssistant, HttpTransport};
use crate::store::FileStore;
use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Application state
pub struct AppState {
    pub settings: Settings,
    pub assistant: Arc<CareerAssistant>,
    pub started_at: Instant,
}

/// Create application router backed by the file store and Gemini over HTTP
pub async fn create_router(settings: Settings) -> Result<Router> {
    let store = FileStore::open(&settings.store.path).context("Failed to open credential store")?;
    let transport = HttpTransport::new(&settings.gemini)?;

    let assistant = Arc::new(CareerAssistant::new(Arc::new(store), Arc::new(transport)));

    Ok(create_router_with_assistant(settings, assistant))
}

/// Create application router around an existing assistant
pub fn create_router_with_assistant(settings: Settings, assistant: Arc<CareerAssistant>) -> Router {
    let cors = build_cors_layer(&settings);

    let app_state = Arc::new(AppState {
        settings,
        assistant,
        started_at: Instant::now(),
    });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware));

    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route(
            "/v1/credential",
            get(credential::credential_status)
                .put(credential::set_credential)
                .delete(credential::clear_credential),
        )
        .route("/v1/chat", post(assistant::chat))
        .route(
            "/v1/chat/quick",
            get(assistant::quick_chat_greeting).post(assistant::quick_chat),
        )
        .route("/v1/recommendations", post(assistant::recommendations))
        .route("/v1/interview-questions", post(assistant::interview_questions))
        .route("/v1/resume-analysis", post(assistant::resume_analysis))
        .route("/v1/roadmap", post(assistant::roadmap))
        .route("/v1/paths", get(paths::list_paths))
        .route("/v1/paths/plan", post(paths::plan_path))
        .with_state(app_state)
        .layer(middleware_stack);

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    router
}

fn build_cors_layer(settings: &Settings) -> Option<CorsLayer> {
    if !settings.security.cors_enabled {
        return None;
    }

    let origins = &settings.security.allowed_origins;
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Some(layer.allow_origin(Any));
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    Some(layer.allow_origin(parsed))
}
