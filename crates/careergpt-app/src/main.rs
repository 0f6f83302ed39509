mod app_state;
mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use careergpt_ai::{AnswerClient, ChatSession, GeminiClient, GeminiConfig};
use careergpt_config::{resolve_api_key, CareerConfig, API_KEY_ENV};
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already present in the environment are left alone.
fn load_dotenv(path: &Path) {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return;
    };

    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(&key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim().to_string(), value.to_string())
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

const DEFAULT_LOG_DIRECTIVE: &str = "careergpt=info";

/// `RUST_LOG` plus the given directive; an unparsable directive falls back
/// to the default one.
fn log_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse())
    {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

fn init_logging(directive: &str) {
    // Chat goes to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directive))
        .with_writer(std::io::stderr)
        .init();
}

fn build_client(config: &CareerConfig, model_override: Option<String>) -> GeminiClient {
    let api_key = resolve_api_key(config).unwrap_or_else(|| {
        tracing::warn!("no API key configured (set {API_KEY_ENV}); requests will fail");
        String::new()
    });

    let model = model_override.unwrap_or_else(|| config.api.model.clone());
    let gemini = GeminiConfig::new(api_key)
        .with_model(model)
        .with_base_url(config.api.base_url.clone());

    tracing::info!(model = %gemini.model, "Gemini client ready");
    GeminiClient::new(gemini)
}

fn main() -> ExitCode {
    // Load .env file before any threads exist
    load_dotenv(&PathBuf::from(".env"));

    let args = cli::parse();

    let loaded = careergpt_config::load_config(args.config.as_deref());
    let log_directive = match (&args.log_level, &loaded) {
        (Some(directive), _) => directive.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&log_directive);

    tracing::info!("CareerGPT v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CareerConfig::default()
    });

    let client: Arc<dyn AnswerClient> = Arc::new(build_client(&config, args.model));
    let session = Arc::new(ChatSession::new());

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = app_state::ChatApp::new(session, client, std::io::stdout());
    let result = runtime.block_on(async {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        app.run(stdin).await
    });

    match result {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Chat loop error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_parsing_skips_comments_and_quotes() {
        let parsed = parse_dotenv(
            "# comment\n\nGENERATIVE_LANGUAGE_API_KEY=\"abc123\"\n OTHER = 'x' \nnot a pair\n=novalue\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("GENERATIVE_LANGUAGE_API_KEY".to_string(), "abc123".to_string()),
                ("OTHER".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn log_filter_keeps_requested_directive() {
        let filter = log_filter("careergpt=debug");
        assert!(filter.to_string().contains("careergpt=debug"));
    }

    #[test]
    fn invalid_log_directive_falls_back_to_default() {
        let filter = log_filter("careergpt=loud");
        assert!(filter.to_string().contains(DEFAULT_LOG_DIRECTIVE));
        assert!(!filter.to_string().contains("loud"));
    }

    #[test]
    fn client_uses_model_override() {
        let config = CareerConfig::default();
        let client = build_client(&config, Some("gemini-1.5-flash".into()));
        assert_eq!(client.config().model, "gemini-1.5-flash");
        assert_eq!(client.config().base_url, config.api.base_url);
    }

    #[test]
    fn client_uses_configured_model_by_default() {
        let mut config = CareerConfig::default();
        config.api.model = "gemini-1.0-pro".into();
        let client = build_client(&config, None);
        assert_eq!(client.config().model, "gemini-1.0-pro");
    }
}
