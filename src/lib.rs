//! CareerCraft Library
//!
//! Career assistant backed by Gemini generation with static fallback content

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, create_router_with_assistant, AppState};
pub use models::{gemini, AssistantMode, ChatReply, UseCase};
pub use services::{CareerAssistant, CredentialManager, GeminiClient, HttpTransport, Transport};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use utils::error::{AppError, AppResult, AssistError, AssistResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
