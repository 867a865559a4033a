//! Data models module
//!
//! Defines the credential document and usage API structures

pub mod credentials;
pub mod usage;

pub use credentials::{parse_credentials, AccessToken, ClaudeCredentials, OAuthCredentials};
pub use usage::{UsageBucket, UsageSnapshot};
