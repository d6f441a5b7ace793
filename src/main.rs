//! CareerCraft Server
//!
//! HTTP service exposing the career assistant: chat, recommendations,
//! interview questions, resume analysis, roadmaps and career path plans

use anyhow::{Context, Result};
use careercraft::{create_router, utils::logging::init_logging, version_info, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load settings from environment (and .env when present)
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging)?;
    info!("{}", version_info());
    info!(
        "Gemini model: {} (store: {:?})",
        settings.gemini.model, settings.store.path
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Create router
    let app = create_router(settings).await?;

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 CareerCraft server started!");
    info!("📝 Health check: http://{}/health", addr);
    info!("💬 Chat endpoint: http://{}/v1/chat", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}
