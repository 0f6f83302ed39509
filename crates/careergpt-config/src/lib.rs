//! CareerGPT configuration.
//!
//! TOML-based configuration with serde defaults for every section, so a
//! partial file (or no file at all) works out of the box. The API key is
//! resolved separately from the environment, see [`api_key`].

pub mod api_key;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use api_key::{resolve_api_key, API_KEY_ENV};
pub use schema::CareerConfig;

use careergpt_common::ConfigError;
use std::path::Path;

/// Load config from `path` if given, otherwise from the platform default
/// location, then validate it.
pub fn load_config(path: Option<&Path>) -> Result<CareerConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"ftp://example.com\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nmodel = \"gemini-1.5-flash\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.api.model, "gemini-1.5-flash");
    }
}
