//! Tests for config validation.

use super::*;

#[test]
fn default_config_validates() {
    let config = CareerConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_model() {
    let mut config = CareerConfig::default();
    config.api.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.model"));
}

#[test]
fn catches_model_with_method_suffix() {
    let mut config = CareerConfig::default();
    config.api.model = "gemini-pro:generateContent".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bare model name"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = CareerConfig::default();
    config.api.base_url = "generativelanguage.googleapis.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.base_url"));
}

#[test]
fn collects_all_errors() {
    let mut config = CareerConfig::default();
    config.api.model = String::new();
    config.api.base_url = "ftp://x".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.model"));
    assert!(err.contains("api.base_url"));
    assert!(err.contains("; "));
}

#[test]
fn plain_http_base_url_is_allowed() {
    let mut config = CareerConfig::default();
    config.api.base_url = "http://127.0.0.1:8080/v1beta/models".into();
    assert!(validate(&config).is_ok());
}
