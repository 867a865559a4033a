//! Configuration management module
//!
//! Responsible for building and validating runtime settings

pub mod settings;

pub use settings::{ApiConfig, CredentialsConfig, DisplayConfig, LoggingConfig, Settings};
