use std::path::PathBuf;

/// Why a config file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure that ends the terminal chat loop.
#[derive(Debug, thiserror::Error)]
pub enum CareerError {
    /// Reading stdin or writing stdout failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The spawned answer task panicked or was cancelled.
    #[error("answer task failed: {0}")]
    AnswerTask(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("api.model must not be empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: api.model must not be empty"
        );
    }

    #[test]
    fn career_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: CareerError = io_err.into();
        assert!(matches!(err, CareerError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }

    #[test]
    fn answer_task_error_message() {
        let err = CareerError::AnswerTask("task 7 panicked".into());
        assert_eq!(err.to_string(), "answer task failed: task 7 panicked");
    }
}
