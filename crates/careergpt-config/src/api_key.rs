//! API key resolution.
//!
//! Resolution order:
//! 1. `GENERATIVE_LANGUAGE_API_KEY` in the process environment
//! 2. `[api] api_key` in the config file
//! 3. `GENERATIVE_LANGUAGE_API_KEY` as it was set when the binary was built
//!
//! A missing key is not an error here. Requests made without one are
//! rejected by the API and handled like any other failed request.

use crate::schema::CareerConfig;

/// Environment variable holding the Generative Language API key.
pub const API_KEY_ENV: &str = "GENERATIVE_LANGUAGE_API_KEY";

const BUILD_TIME_API_KEY: Option<&str> = option_env!("GENERATIVE_LANGUAGE_API_KEY");

/// Resolve the API key from the environment, the config, or the build.
pub fn resolve_api_key(config: &CareerConfig) -> Option<String> {
    resolve_from(
        std::env::var(API_KEY_ENV).ok(),
        config.api.api_key.as_deref(),
        BUILD_TIME_API_KEY,
    )
}

fn resolve_from(
    runtime: Option<String>,
    file: Option<&str>,
    build: Option<&str>,
) -> Option<String> {
    runtime
        .filter(|k| !k.trim().is_empty())
        .or_else(|| non_empty(file))
        .or_else(|| non_empty(build))
}

fn non_empty(key: Option<&str>) -> Option<String> {
    key.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_env_wins() {
        let key = resolve_from(Some("env".into()), Some("file"), Some("build"));
        assert_eq!(key.as_deref(), Some("env"));
    }

    #[test]
    fn file_used_when_env_missing() {
        let key = resolve_from(None, Some("file"), Some("build"));
        assert_eq!(key.as_deref(), Some("file"));
    }

    #[test]
    fn build_time_key_is_last_resort() {
        let key = resolve_from(None, None, Some("build"));
        assert_eq!(key.as_deref(), Some("build"));
    }

    #[test]
    fn blank_values_are_skipped() {
        let key = resolve_from(Some("   ".into()), Some(""), Some("build"));
        assert_eq!(key.as_deref(), Some("build"));
    }

    #[test]
    fn nothing_configured_gives_none() {
        assert!(resolve_from(None, None, None).is_none());
    }
}
