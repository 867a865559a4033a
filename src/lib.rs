//! Claude Usage Line Library
//!
//! Fetches Claude OAuth usage quotas and renders them as a terminal status line

pub mod app;
pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

// Re-export common types
pub use app::{run, RunError, Stage};
pub use config::Settings;
pub use models::{AccessToken, UsageBucket, UsageSnapshot};
pub use services::{CredentialResolver, UsageClient};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
