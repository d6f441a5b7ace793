//! Configuration management module
//!
//! Loads server, provider, store and logging settings from environment variables

pub mod settings;

pub use settings::{GeminiConfig, LoggingConfig, SecurityConfig, ServerConfig, Settings, StoreConfig};
