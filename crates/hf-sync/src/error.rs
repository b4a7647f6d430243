use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Missing GitHub configuration. Set {0}.")]
    MissingConfig(&'static str),

    #[error("GitHub API error on {path}: {status} {message}")]
    Http {
        path: String,
        status: u16,
        message: String,
    },

    #[error("Request to GitHub failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Invalid session id \"{0}\". Use letters, digits, '-' and '_' only.")]
    InvalidSessionId(String),

    #[error("Unknown role \"{0}\". Expected one of: architect, hydrogen, tooling, docs, manager")]
    UnknownRole(String),
}
