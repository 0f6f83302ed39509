use clap::Parser;
use std::path::PathBuf;

/// CareerGPT: a terminal career and study roadmap advisor.
#[derive(Parser, Debug)]
#[command(name = "careergpt", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `careergpt=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model name override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let args = Args::try_parse_from(["careergpt"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.model.is_none());
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "careergpt",
            "--config",
            "/tmp/careergpt.toml",
            "--log-level",
            "careergpt=debug",
            "-m",
            "gemini-1.5-flash",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/careergpt.toml")));
        assert_eq!(args.log_level.as_deref(), Some("careergpt=debug"));
        assert_eq!(args.model.as_deref(), Some("gemini-1.5-flash"));
    }
}
