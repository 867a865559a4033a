//! Error handling module
//!
//! Defines error types for credential resolution, usage fetching and rendering

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Home directory could not be determined
    #[error("could not determine home directory")]
    HomeDirUnavailable,

    /// Credentials file does not exist
    #[error("credentials file not found at {}", .0.display())]
    CredentialNotFound(PathBuf),

    /// Credentials file exists but could not be read
    #[error("failed to read credentials file {}: {source}", .path.display())]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Credentials JSON is malformed
    #[error("failed to parse {origin} credentials: {source}")]
    CredentialParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Credentials parsed but carry no access token
    #[error("no access token found in {0} credentials")]
    CredentialEmpty(String),

    /// OS secret store could not be queried
    #[error("secret store unavailable: {0}")]
    SecretStoreUnavailable(String),

    /// Every credential source failed; carries the last failure
    #[error("credentials not found at {}: {last}", .path.display())]
    CredentialsUnavailable {
        path: PathBuf,
        last: Box<AppError>,
    },

    /// Token cannot be sent as a header value
    #[error("invalid token format: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// Network-level failure (DNS, connect, body read)
    #[error("failed to fetch usage: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request exceeded the caller's deadline
    #[error("failed to fetch usage: request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Upstream returned a non-success status
    #[error("API returned status {status}: {body}")]
    HttpStatus {
        status: u16,
        body: String,
    },

    /// Response body is not a valid usage payload
    #[error("failed to parse usage response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reset timestamp is not RFC 3339
    #[error("invalid reset timestamp: {0}")]
    TimeParse(#[from] chrono::ParseError),
}

impl AppError {
    /// Stable category name, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::HomeDirUnavailable
            | AppError::CredentialNotFound(_)
            | AppError::CredentialsUnavailable { .. } => "credential_not_found",
            AppError::CredentialRead { .. } => "credential_read_error",
            AppError::CredentialParse { .. } => "credential_parse_error",
            AppError::CredentialEmpty(_) => "credential_empty",
            AppError::SecretStoreUnavailable(_) => "secret_store_unavailable",
            AppError::InvalidToken(_) => "invalid_token",
            AppError::Transport(_) | AppError::Timeout(_) => "transport_error",
            AppError::HttpStatus { .. } => "http_status_error",
            AppError::Decode(_) => "decode_error",
            AppError::TimeParse(_) => "time_parse_error",
        }
    }

    /// HTTP status code, if the upstream answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::HttpStatus { status, .. } => Some(*status),
            AppError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AppError::HomeDirUnavailable.kind(), "credential_not_found");
        assert_eq!(AppError::CredentialEmpty("file".to_string()).kind(), "credential_empty");
        assert_eq!(AppError::Timeout(Duration::from_secs(5)).kind(), "transport_error");
        assert_eq!(
            AppError::HttpStatus { status: 401, body: String::new() }.kind(),
            "http_status_error"
        );
    }

    #[test]
    fn test_composed_credentials_error_names_path() {
        let path = PathBuf::from("/home/user/.claude/.credentials.json");
        let err = AppError::CredentialsUnavailable {
            path: path.clone(),
            last: Box::new(AppError::CredentialNotFound(path)),
        };

        let message = err.to_string();
        assert!(
            message.starts_with("credentials not found at /home/user/.claude/.credentials.json")
        );
        assert!(message.contains("credentials file not found"));
    }

    #[test]
    fn test_status_code() {
        let err = AppError::HttpStatus { status: 401, body: "denied".to_string() };
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.to_string(), "API returned status 401: denied");
        assert_eq!(AppError::HomeDirUnavailable.status_code(), None);
    }
}
