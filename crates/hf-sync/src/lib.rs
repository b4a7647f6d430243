//! Shared assistant context kept in a GitHub repository.
//!
//! The context file, per-role project notes and session logs live as plain
//! markdown files read and written through the GitHub contents API.

pub mod client;
pub mod config;
pub mod error;
pub mod sync;
pub mod types;

pub use client::GitHubClient;
pub use config::SyncConfig;
pub use error::SyncError;
pub use sync::ContextSync;
pub use types::Role;
