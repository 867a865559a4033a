//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Default upstream base URL
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Secret store entry written by Claude Code
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "Claude Code-credentials";

/// Supported log output formats
const VALID_LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Usage API configuration
    pub api: ApiConfig,
    /// Credential lookup configuration
    pub credentials: CredentialsConfig,
    /// Rendering configuration
    pub display: DisplayConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Usage API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL, the usage path is appended to it
    pub base_url: String,
    /// Deadline for the usage request in seconds
    pub timeout_secs: u64,
}

/// Credential lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Home directory override; `None` resolves the current user's home
    pub home_dir: Option<PathBuf>,
    /// Keychain service name queried on macOS
    pub keychain_service: String,
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of cells in each progress bar
    pub bar_width: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: 10,
            },
            credentials: CredentialsConfig {
                home_dir: None,
                keychain_service: DEFAULT_KEYCHAIN_SERVICE.to_string(),
            },
            display: DisplayConfig { bar_width: 10 },
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl Settings {
    /// Create a new configuration instance.
    ///
    /// Only logging is read from the environment; everything else uses defaults.
    /// Unusable logging values fall back to the defaults instead of failing.
    pub fn new() -> Result<Self> {
        let mut settings = Self::default();

        let level = get_env_or_default("RUST_LOG", &settings.logging.level);
        if is_valid_filter(&level) {
            settings.logging.level = level;
        }

        let format = get_env_or_default("LOG_FORMAT", &settings.logging.format);
        if VALID_LOG_FORMATS.contains(&format.as_str()) {
            settings.logging.format = format;
        }

        settings.validate()?;

        Ok(settings)
    }

    /// Settings pointing at a different API host and home directory
    pub fn with_overrides(base_url: impl Into<String>, home_dir: impl Into<PathBuf>) -> Self {
        let mut settings = Self::default();
        settings.api.base_url = base_url.into();
        settings.credentials.home_dir = Some(home_dir.into());
        settings
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if !self.api.base_url.starts_with("http") {
            anyhow::bail!("Invalid API base URL format, should start with 'http'");
        }

        if self.api.timeout_secs == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        if self.display.bar_width == 0 {
            anyhow::bail!("Bar width cannot be 0");
        }

        if self.credentials.keychain_service.is_empty() {
            anyhow::bail!("Keychain service name cannot be empty");
        }

        if !is_valid_filter(&self.logging.level) {
            anyhow::bail!("Invalid log filter: {}", self.logging.level);
        }

        if !VALID_LOG_FORMATS.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Request deadline
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}

/// Whether `directives` parse as a tracing filter
fn is_valid_filter(directives: &str) -> bool {
    EnvFilter::try_new(directives).is_ok()
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.api.base_url, "https://api.anthropic.com");
        assert_eq!(settings.display.bar_width, 10);
        assert_eq!(settings.credentials.keychain_service, "Claude Code-credentials");
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_with_overrides() {
        let settings = Settings::with_overrides("http://127.0.0.1:9999", "/tmp/home");
        assert_eq!(settings.api.base_url, "http://127.0.0.1:9999");
        assert_eq!(settings.credentials.home_dir, Some(PathBuf::from("/tmp/home")));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_filter_directives_accepted() {
        let mut settings = Settings::default();
        for level in ["info,hyper=warn", "claude_usage_line=debug", "INFO"] {
            settings.logging.level = level.to_string();
            assert!(settings.validate().is_ok(), "{level} should be accepted");
        }

        settings.logging.level = "claude_usage_line=loud".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_width() {
        let mut settings = Settings::default();
        settings.display.bar_width = 0;
        assert!(settings.validate().is_err());
    }
}
