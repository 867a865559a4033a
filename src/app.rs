//! Invocation pipeline
//!
//! Resolve credentials, fetch usage, render one line. Each stage is a
//! terminal failure point; nothing is printed unless all of them succeed.

use crate::config::Settings;
use crate::render::format_status_line;
use crate::services::{CredentialResolver, UsageClient};
use crate::utils::error::AppError;
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolvingCredentials,
    FetchingUsage,
    Rendered,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ResolvingCredentials => "resolving credentials",
            Stage::FetchingUsage => "fetching usage",
            Stage::Rendered => "rendered",
        };
        f.write_str(name)
    }
}

/// Failure of a single stage
#[derive(Debug, Error)]
#[error("{source}")]
pub struct RunError {
    pub stage: Stage,
    #[source]
    pub source: AppError,
}

impl RunError {
    fn at(stage: Stage) -> impl FnOnce(AppError) -> Self {
        move |source| {
            debug!("Failed while {}: {} ({})", stage, source, source.kind());
            Self { stage, source }
        }
    }
}

/// Run the pipeline once and return the status line
pub async fn run(settings: &Settings, now: DateTime<Utc>) -> Result<String, RunError> {
    debug!("Stage: {}", Stage::ResolvingCredentials);
    let resolver = CredentialResolver::for_platform(&settings.credentials)
        .map_err(RunError::at(Stage::ResolvingCredentials))?;
    debug!("Credential sources: {}", resolver.source_names().join(", "));
    let token = resolver
        .resolve()
        .await
        .map_err(RunError::at(Stage::ResolvingCredentials))?;

    debug!("Stage: {}", Stage::FetchingUsage);
    let client = UsageClient::new(&settings.api).map_err(RunError::at(Stage::FetchingUsage))?;
    let timeout = settings.request_timeout();
    let usage = tokio::time::timeout(timeout, client.fetch_usage(&token))
        .await
        .map_err(|_| AppError::Timeout(timeout))
        .and_then(|result| result)
        .map_err(RunError::at(Stage::FetchingUsage))?;

    let line = format_status_line(&usage, now, settings.display.bar_width);
    debug!("Stage: {}", Stage::Rendered);

    Ok(line)
}
