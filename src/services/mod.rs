//! Service layer module
//!
//! Contains the credential resolver and the usage API client

pub mod client;
pub mod credentials;

pub use client::UsageClient;
pub use credentials::{CredentialResolver, CredentialSource, FileSource, KeychainSource};
