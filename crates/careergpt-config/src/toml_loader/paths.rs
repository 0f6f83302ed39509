//! Config path resolution.

use careergpt_common::ConfigError;
use std::path::PathBuf;

/// Get the platform-specific default config file path.
///
/// On macOS: `~/Library/Application Support/careergpt/config.toml`
/// On Linux: `~/.config/careergpt/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("careergpt").join("config.toml"))
}
