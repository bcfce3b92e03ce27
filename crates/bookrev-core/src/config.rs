//! Configuration management for bookrev.
//!
//! Loads configuration from ${BOOKREV_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `[api] base_url` (read by the CLI flag).
pub const BASE_URL_ENV: &str = "BOOKREV_BASE_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for bookrev configuration and data files.
    //!
    //! BOOKREV_HOME resolution order:
    //! 1. BOOKREV_HOME environment variable (if set)
    //! 2. ~/.config/bookrev (default)

    use std::path::PathBuf;

    /// Returns the bookrev home directory.
    pub fn home() -> PathBuf {
        if let Ok(home) = std::env::var("BOOKREV_HOME")
            && !home.trim().is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("bookrev")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        home().join("config.toml")
    }

    /// Returns the path to the persisted session token.
    pub fn session_path() -> PathBuf {
        home().join("session.json")
    }

    /// Returns the default log file path used by the interactive UI.
    pub fn log_path() -> PathBuf {
        home().join("bookrev.log")
    }
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend (scheme, host and port).
    pub base_url: String,
    /// Request timeout in seconds (0 disables).
    pub timeout_secs: u32,
    /// Attach the stored token as a bearer credential on catalog requests.
    pub attach_token: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Config::DEFAULT_BASE_URL.to_string(),
            timeout_secs: Config::DEFAULT_TIMEOUT_SECS,
            attach_token: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive (e.g. "info", "bookrev_core=debug").
    pub level: String,
    /// Log file for the interactive UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub log: LogConfig,
}

impl Config {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
    const DEFAULT_TIMEOUT_SECS: u32 = 30;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Returns the request timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        if self.api.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.api.timeout_secs)))
        }
    }

    /// Returns the log file path, resolving relative paths against the home dir.
    pub fn log_file(&self) -> PathBuf {
        match self.log.file.as_deref().map(str::trim) {
            Some(file) if !file.is_empty() => {
                let path = PathBuf::from(file);
                if path.is_absolute() {
                    path
                } else {
                    paths::home().join(path)
                }
            }
            _ => paths::log_path(),
        }
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

/// Picks the base URL from an override or the configured value and validates it.
///
/// Blank overrides are ignored. Trailing slashes are stripped so endpoint
/// paths can be appended verbatim.
///
/// # Errors
/// Returns an error if the chosen URL does not parse or is not http(s).
pub fn resolve_base_url(override_url: Option<&str>, configured: &str) -> Result<String> {
    let chosen = override_url
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| configured.trim());
    let chosen = if chosen.is_empty() {
        Config::DEFAULT_BASE_URL
    } else {
        chosen
    };

    let parsed =
        url::Url::parse(chosen).with_context(|| format!("Invalid backend base URL: {chosen}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("Invalid backend base URL: {chosen} (expected http or https)");
    }

    Ok(chosen.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.attach_token);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "[api]\nbase_url = \"http://books.test:9000\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api.base_url, "http://books.test:9000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "[api\nbase_url = ").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("base_url = \"http://localhost:8080\""));
        assert!(contents.contains("# file ="));

        // The template itself must parse back into the defaults.
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api.base_url, Config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_timeout_zero_disables() {
        let mut config = Config::default();
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));

        config.api.timeout_secs = 0;
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_resolve_base_url_precedence() {
        assert_eq!(
            resolve_base_url(Some("http://override:1/"), "http://config:2").unwrap(),
            "http://override:1"
        );
        assert_eq!(
            resolve_base_url(Some("   "), "http://config:2/").unwrap(),
            "http://config:2"
        );
        assert_eq!(
            resolve_base_url(None, "").unwrap(),
            Config::DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_resolve_base_url_rejects_garbage() {
        assert!(resolve_base_url(Some("not a url"), "").is_err());
        assert!(resolve_base_url(Some("ftp://books.test"), "").is_err());
    }

    #[test]
    fn test_log_file_relative_and_absolute() {
        let mut config = Config::default();
        assert!(config.log_file().ends_with("bookrev.log"));

        let dir = tempdir().unwrap();
        let absolute = dir.path().join("custom.log");
        config.log.file = Some(absolute.to_string_lossy().to_string());
        assert_eq!(config.log_file(), absolute);

        config.log.file = Some("logs/ui.log".to_string());
        assert!(config.log_file().ends_with("logs/ui.log"));
    }
}
