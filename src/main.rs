//! Claude Usage Line
//!
//! Prints 5-hour and 7-day usage quotas as one status line.
//! On failure prints `Error: <message>` to stderr and exits 1.

use anyhow::Result;
use chrono::Utc;
use std::process::ExitCode;
use tracing::debug;

use claude_usage_line::utils::logging::init_logging;
use claude_usage_line::{run, version_info, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<String> {
    let settings = Settings::new()?;
    init_logging(&settings.logging)?;
    debug!("{}", version_info());

    let line = run(&settings, Utc::now()).await?;
    Ok(line)
}
