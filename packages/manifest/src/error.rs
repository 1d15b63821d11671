use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a library manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Manifest not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Manifest root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}
