use std::path::PathBuf;

use crate::sanitize::SanitizeError;

#[derive(Debug, thiserror::Error)]
pub enum CardwiseError {
    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("http server error: {reason}")]
    Http { reason: String },

    #[error("invalid card number: {0}")]
    Sanitize(#[from] SanitizeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CardwiseError>;
