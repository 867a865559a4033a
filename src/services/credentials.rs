//! Credential resolution
//!
//! Looks up the Claude Code OAuth token. Every platform reads
//! `~/.claude/.credentials.json`; macOS falls back to the login keychain.

use crate::config::CredentialsConfig;
use crate::models::credentials::{parse_credentials, AccessToken};
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// A place a credentials document can be read from
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Source name used in logs and error messages
    fn name(&self) -> &str;

    /// Read and validate the access token
    async fn read_token(&self) -> AppResult<AccessToken>;
}

/// Credentials JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn read_token(&self) -> AppResult<AccessToken> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => AppError::CredentialNotFound(self.path.clone()),
                _ => AppError::CredentialRead {
                    path: self.path.clone(),
                    source,
                },
            })?;

        parse_credentials(&content, self.name())
    }
}

/// macOS login keychain, queried through the `security` tool
#[derive(Debug, Clone)]
pub struct KeychainSource {
    service: String,
}

impl KeychainSource {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }
}

#[async_trait]
impl CredentialSource for KeychainSource {
    fn name(&self) -> &str {
        "keychain"
    }

    async fn read_token(&self) -> AppResult<AccessToken> {
        let output = Command::new("security")
            .args(["find-generic-password", "-s", &self.service, "-w"])
            .output()
            .await
            .map_err(|e| {
                AppError::SecretStoreUnavailable(format!("failed to execute security command: {e}"))
            })?;

        if !output.status.success() {
            return Err(AppError::SecretStoreUnavailable(format!(
                "keychain item '{}' not found",
                self.service
            )));
        }

        let json_str = String::from_utf8(output.stdout).map_err(|e| {
            AppError::SecretStoreUnavailable(format!("invalid UTF-8 in keychain data: {e}"))
        })?;

        parse_credentials(&json_str, self.name())
    }
}

/// Tries each source in order and returns the first token found
pub struct CredentialResolver {
    credentials_path: PathBuf,
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialResolver {
    /// Resolver over an explicit source list.
    ///
    /// `credentials_path` is reported when every source fails.
    pub fn new(credentials_path: PathBuf, sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self {
            credentials_path,
            sources,
        }
    }

    /// Sources available on the running platform
    pub fn for_platform(config: &CredentialsConfig) -> AppResult<Self> {
        let path = credentials_file_path(config)?;
        let mut sources: Vec<Box<dyn CredentialSource>> = vec![Box::new(FileSource::new(&path))];

        if cfg!(target_os = "macos") {
            sources.push(Box::new(KeychainSource::new(&config.keychain_service)));
        }

        Ok(Self::new(path, sources))
    }

    /// Names of the configured sources, in lookup order
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Resolve the access token.
    ///
    /// Intermediate failures are only logged; the returned error carries the last one.
    pub async fn resolve(&self) -> AppResult<AccessToken> {
        let mut last_error = None;

        for source in &self.sources {
            match source.read_token().await {
                Ok(token) => {
                    debug!("Access token loaded from {} ({} chars)", source.name(), token.len());
                    return Ok(token);
                }
                Err(e) => {
                    debug!("Credential source {} failed: {}", source.name(), e);
                    last_error = Some(e);
                }
            }
        }

        let last = last_error
            .unwrap_or_else(|| AppError::CredentialNotFound(self.credentials_path.clone()));
        Err(AppError::CredentialsUnavailable {
            path: self.credentials_path.clone(),
            last: Box::new(last),
        })
    }
}

/// `<home>/.claude/.credentials.json`
pub fn credentials_file_path(config: &CredentialsConfig) -> AppResult<PathBuf> {
    let home = match &config.home_dir {
        Some(home) => home.clone(),
        None => dirs::home_dir().ok_or(AppError::HomeDirUnavailable)?,
    };
    Ok(home.join(".claude").join(".credentials.json"))
}
