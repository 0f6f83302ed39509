//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError::ValidationError`.

#[cfg(test)]
mod tests;

use crate::schema::CareerConfig;
use careergpt_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CareerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_api(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_api(errors: &mut Vec<String>, config: &CareerConfig) {
    let model = config.api.model.trim();
    if model.is_empty() {
        errors.push("api.model must not be empty".into());
    } else if model.contains('/') || model.contains(':') {
        errors.push(format!(
            "api.model = {model:?} must be a bare model name"
        ));
    }

    let base_url = config.api.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(format!(
            "api.base_url = {base_url:?} must start with http:// or https://"
        ));
    }
}
