//! Credential data models
//!
//! Shape of the OAuth credentials Claude Code stores on disk and in the keychain

use crate::utils::error::{AppError, AppResult};
use serde::Deserialize;
use std::fmt;

/// Top-level credentials document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeCredentials {
    #[serde(default)]
    pub claude_ai_oauth: Option<OAuthCredentials>,
}

/// OAuth section; other fields (refresh token, expiry, scopes) are ignored
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthCredentials {
    #[serde(default)]
    pub access_token: String,
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Bearer token that never shows up in debug output or logs
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token, rejecting blank values
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Raw value, only for building the Authorization header
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token length (safe to log)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; blank tokens are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken([REDACTED])")
    }
}

/// Parse a credentials JSON blob and extract the access token.
///
/// `origin` names the source in error messages ("file", "keychain").
pub fn parse_credentials(json_str: &str, origin: &str) -> AppResult<AccessToken> {
    let creds: ClaudeCredentials =
        serde_json::from_str(json_str.trim()).map_err(|source| AppError::CredentialParse {
            origin: origin.to_string(),
            source,
        })?;

    creds
        .claude_ai_oauth
        .and_then(|oauth| AccessToken::new(oauth.access_token))
        .ok_or_else(|| AppError::CredentialEmpty(origin.to_string()))
}
