//! Configuration module unit tests

use careercraft::config::settings::Settings;
use std::collections::HashMap;
use std::path::PathBuf;

/// Build settings from an explicit variable map
fn settings_from(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_source(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_without_environment() {
    let settings = settings_from(&[]).unwrap();

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 8090);
    assert_eq!(
        settings.gemini.base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(settings.gemini.model, "gemini-1.5-pro");
    assert_eq!(settings.gemini.timeout, 0);
    assert!(settings.gemini.request_timeout().is_none());
    assert!(settings.security.cors_enabled);
    assert_eq!(settings.security.allowed_origins, vec!["*"]);
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, "text");
    assert!(settings.store.path.to_string_lossy().ends_with("store.json"));
}

#[test]
fn test_settings_from_full_environment() {
    let settings = settings_from(&[
        ("SERVER_HOST", "0.0.0.0"),
        ("SERVER_PORT", "9000"),
        ("GEMINI_BASE_URL", "http://localhost:8081/v1beta/"),
        ("GEMINI_MODEL", "gemini-1.5-flash"),
        ("GEMINI_REQUEST_TIMEOUT", "30"),
        ("CAREERCRAFT_STORE_PATH", "/tmp/careercraft/store.json"),
        ("CORS_ENABLED", "false"),
        ("ALLOWED_ORIGINS", "http://localhost:3000, https://app.example.com"),
        ("RUST_LOG", "debug"),
        ("LOG_FORMAT", "json"),
    ])
    .unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 9000);
    assert_eq!(
        settings.gemini.endpoint(),
        "http://localhost:8081/v1beta/models/gemini-1.5-flash:generateContent"
    );
    assert_eq!(settings.gemini.request_timeout().map(|d| d.as_secs()), Some(30));
    assert_eq!(settings.store.path, PathBuf::from("/tmp/careercraft/store.json"));
    assert!(!settings.security.cors_enabled);
    assert_eq!(
        settings.security.allowed_origins,
        vec!["http://localhost:3000", "https://app.example.com"]
    );
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");
}

#[test]
fn test_invalid_values_are_rejected() {
    let cases: &[(&str, &str)] = &[
        ("SERVER_PORT", "not-a-port"),
        ("SERVER_PORT", "0"),
        ("GEMINI_BASE_URL", "generativelanguage.googleapis.com"),
        ("GEMINI_MODEL", "   "),
        ("GEMINI_MODEL", "gemini 1.5"),
        ("GEMINI_REQUEST_TIMEOUT", "-1"),
        ("CAREERCRAFT_STORE_PATH", ""),
        ("CORS_ENABLED", "yes"),
        ("RUST_LOG", "verbose"),
        ("LOG_FORMAT", "xml"),
    ];

    for &(key, value) in cases {
        let result = settings_from(&[(key, value)]);
        assert!(result.is_err(), "{}={:?} should be rejected", key, value);
    }
}

#[test]
fn test_settings_clone_and_debug() {
    let settings = settings_from(&[("GEMINI_MODEL", "gemini-1.5-flash")]).unwrap();
    let cloned = settings.clone();

    assert_eq!(cloned.gemini.model, settings.gemini.model);
    assert!(format!("{:?}", settings).contains("gemini-1.5-flash"));
}
