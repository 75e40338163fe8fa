//! Content query error types.

/// Errors produced while resolving coordinates against the content server.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("content server error: {0}")]
    Server(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
