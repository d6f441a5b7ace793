//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default Gemini API base URL
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Gemini API configuration
    pub gemini: GeminiConfig,
    /// Persistent store configuration
    pub store: StoreConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API base URL
    pub base_url: String,
    /// Model used for every generation call
    pub model: String,
    /// Request timeout in seconds, 0 disables the timeout
    pub timeout: u64,
}

/// Persistent store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding the credential and quota flag
    pub path: PathBuf,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Allowed origins for CORS
    pub allowed_origins: Vec<String>,
    /// Whether CORS is enabled
    pub cors_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl GeminiConfig {
    /// Request timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }

    /// Full `generateContent` endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Create a configuration instance from an arbitrary variable lookup
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let store_path = match lookup("CAREERCRAFT_STORE_PATH") {
            Some(path) => PathBuf::from(path),
            None => default_store_path(),
        };

        let settings = Self {
            server: ServerConfig {
                host: get_or_default("SERVER_HOST", "127.0.0.1"),
                port: get_or_default("SERVER_PORT", "8090")
                    .parse()
                    .context("Invalid port number")?,
            },
            gemini: GeminiConfig {
                base_url: get_or_default("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
                model: get_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                timeout: get_or_default("GEMINI_REQUEST_TIMEOUT", "0")
                    .parse()
                    .context("Invalid timeout value")?,
            },
            store: StoreConfig { path: store_path },
            security: SecurityConfig {
                allowed_origins: get_or_default("ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                cors_enabled: get_or_default("CORS_ENABLED", "true")
                    .parse()
                    .context("Invalid CORS enabled flag")?,
            },
            logging: LoggingConfig {
                level: get_or_default("RUST_LOG", "info"),
                format: get_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if !self.gemini.base_url.starts_with("http") {
            anyhow::bail!("Invalid Gemini base URL format, should start with 'http'");
        }

        if self.gemini.model.trim().is_empty() {
            anyhow::bail!("Gemini model name cannot be empty");
        }

        if self.gemini.model.contains(char::is_whitespace) {
            anyhow::bail!("Gemini model name cannot contain whitespace characters");
        }

        if self.store.path.as_os_str().is_empty() {
            anyhow::bail!("Store path cannot be empty");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}

/// `~/.config/careercraft/store.json`, or the working directory when no
/// config directory is known
fn default_store_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("careercraft").join("store.json"),
        None => PathBuf::from("careercraft-store.json"),
    }
}
