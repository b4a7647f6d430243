use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid component name \"{0}\". Must be PascalCase (e.g., \"ProductCard\", \"CartDrawer\")")]
    InvalidComponentName(String),

    #[error("Invalid route name \"{0}\". Use format like \"products.$handle\", \"collections._index\", \"api.webhook\"")]
    InvalidRouteName(String),

    #[error("Unknown {kind} type \"{value}\"")]
    UnknownType { kind: &'static str, value: String },

    #[error("{0}")]
    OutputDir(String),

    #[error("File already exists at {0}. Use a different name or delete the existing file.")]
    FileAlreadyExists(PathBuf),

    #[error("Failed to create directory {path}: {source}")]
    MkdirError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
