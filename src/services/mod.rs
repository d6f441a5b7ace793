//! Service layer module
//!
//! Contains the credential manager, Gemini client, parsing, fallback content
//! and the career assistant that ties them together

pub mod assistant;
pub mod classifier;
pub mod client;
pub mod credentials;
pub mod fallback;
pub mod parser;
pub mod paths;
pub mod prompts;
pub mod quick_reply;
pub mod transport;

pub use assistant::CareerAssistant;
pub use client::GeminiClient;
pub use credentials::CredentialManager;
pub use transport::{HttpTransport, ProviderReply, Transport};
