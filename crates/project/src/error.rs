//! Project inspection error types.

use std::path::PathBuf;

/// Errors produced while inspecting or building a local project.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no project manifest found in {0}")]
    NotAProject(PathBuf),

    #[error("build failed: {0}")]
    Build(String),
}
